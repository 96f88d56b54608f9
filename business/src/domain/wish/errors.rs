use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum WishError {
    /// The product does not exist, or there is no wish to remove.
    #[error("wish.not_found")]
    NotFound,
    #[error("wish.store_unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<RepositoryError> for WishError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => WishError::NotFound,
            RepositoryError::Duplicated => WishError::StoreUnavailable(err.to_string()),
            RepositoryError::DatabaseError(message) => WishError::StoreUnavailable(message),
        }
    }
}

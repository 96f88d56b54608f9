use crate::domain::errors::RepositoryError;

/// A single rejected field, reported with a code-style reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub code: &'static str,
}

impl FieldViolation {
    pub fn new(field: &'static str, code: &'static str) -> Self {
        Self { field, code }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// Malformed or out-of-range input (size, cursor, category, keyword).
    #[error("{0}")]
    InvalidArgument(&'static str),
    #[error("product.not_found")]
    NotFound,
    #[error("product.forbidden")]
    Forbidden,
    #[error("product.validation_failed")]
    ValidationFailed(Vec<FieldViolation>),
    #[error("product.store_unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            RepositoryError::Duplicated => ProductError::StoreUnavailable(err.to_string()),
            RepositoryError::DatabaseError(message) => ProductError::StoreUnavailable(message),
        }
    }
}

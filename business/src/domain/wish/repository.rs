use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Wish;

#[async_trait]
pub trait WishRepository: Send + Sync {
    /// Fails with `Duplicated` when the pair is already stored and with
    /// `NotFound` when the product does not exist. Must be atomic per pair.
    async fn insert(&self, wish: &Wish) -> Result<(), RepositoryError>;
    /// Fails with `NotFound` when nothing was deleted.
    async fn delete(&self, wish: &Wish) -> Result<(), RepositoryError>;
}

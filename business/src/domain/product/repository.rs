use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::{NewProduct, Product};
use super::page::ProductQuery;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
    /// Persists a new listing and returns it with its store-assigned id.
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Removes the listing together with its images and wishes.
    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
    /// Rows in `query.sort` order after `query.cursor`, at most `query.fetch_limit()`.
    async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, RepositoryError>;
}

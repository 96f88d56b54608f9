use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductContent};
use crate::domain::product::storage::ImageUpload;
use crate::domain::shared::value_objects::UserId;

pub struct InsertProductParams {
    /// The user performing the request.
    pub actor: UserId,
    /// The owner declared in the product document.
    pub owner: UserId,
    pub content: ProductContent,
    pub files: Vec<ImageUpload>,
}

#[async_trait]
pub trait InsertProductUseCase: Send + Sync {
    async fn execute(&self, params: InsertProductParams) -> Result<Product, ProductError>;
}

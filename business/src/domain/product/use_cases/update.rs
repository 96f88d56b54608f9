use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductContent};
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct UpdateProductParams {
    pub id: ProductId,
    pub actor: UserId,
    pub content: ProductContent,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}

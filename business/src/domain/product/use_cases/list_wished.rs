use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::page::Page;
use crate::domain::shared::value_objects::UserId;

/// Wishlists are always ordered by product id, newest listing first.
pub struct ListWishedProductsParams {
    pub user_id: UserId,
    pub last: Option<String>,
    pub size: Option<i64>,
}

#[async_trait]
pub trait ListWishedProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListWishedProductsParams,
    ) -> Result<Page<Product>, ProductError>;
}

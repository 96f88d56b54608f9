use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::page::Page;
use crate::domain::product::sort::SortKey;
use crate::domain::shared::value_objects::UserId;

pub struct ListUserProductsParams {
    pub user_id: UserId,
    pub sort: SortKey,
    pub last: Option<String>,
    pub size: Option<i64>,
}

#[async_trait]
pub trait ListUserProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListUserProductsParams,
    ) -> Result<Page<Product>, ProductError>;
}

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::page::Page;
use crate::domain::product::sort::SortKey;

#[derive(Debug, Clone, Default)]
pub struct ListProductsParams {
    pub keyword: Option<String>,
    pub category: Option<i32>,
    pub sort: SortKey,
    pub last: Option<String>,
    pub size: Option<i64>,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<Page<Product>, ProductError>;
}

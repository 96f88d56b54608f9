use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::list::fetch_page;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::page::{ListingLimits, Page, ProductScope};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::sort::SortKey;
use crate::domain::product::use_cases::list_wished::{
    ListWishedProductsParams, ListWishedProductsUseCase,
};

pub struct ListWishedProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub limits: ListingLimits,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListWishedProductsUseCase for ListWishedProductsUseCaseImpl {
    async fn execute(
        &self,
        params: ListWishedProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        let query = self.limits.query(
            ProductScope::WishedBy(params.user_id),
            SortKey::IdDesc,
            params.last.as_deref(),
            params.size,
        )?;

        fetch_page(self.repository.as_ref(), self.logger.as_ref(), &query).await
    }
}

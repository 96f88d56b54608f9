use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::page::{ListingLimits, Page, ProductQuery, ProductScope};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list::{ListProductsParams, ListProductsUseCase};

pub struct ListProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub limits: ListingLimits,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListProductsUseCase for ListProductsUseCaseImpl {
    async fn execute(&self, params: ListProductsParams) -> Result<Page<Product>, ProductError> {
        let keyword = self.limits.keyword(params.keyword)?;
        let category = self.limits.category(params.category)?;
        let query = self.limits.query(
            ProductScope::Catalog { keyword, category },
            params.sort,
            params.last.as_deref(),
            params.size,
        )?;

        fetch_page(self.repository.as_ref(), self.logger.as_ref(), &query).await
    }
}

/// Runs a listing query and cuts the page. Listings never report `NotFound`.
pub(crate) async fn fetch_page(
    repository: &dyn ProductRepository,
    logger: &dyn Logger,
    query: &ProductQuery,
) -> Result<Page<Product>, ProductError> {
    logger.debug(&format!(
        "Listing products: scope={:?} sort={} cursor={:?} size={}",
        query.scope, query.sort, query.cursor, query.size
    ));

    let rows = match repository.list(query).await {
        Ok(rows) => rows,
        Err(RepositoryError::NotFound) => Vec::new(),
        Err(err) => {
            logger.error(&format!("Product listing failed: {}", err));
            return Err(err.into());
        }
    };

    let page = Page::from_rows(rows, query);
    logger.debug(&format!(
        "Listed {} products, has_more={}",
        page.items.len(),
        page.has_more
    ));
    Ok(page)
}

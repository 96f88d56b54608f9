use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::list::fetch_page;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::page::{ListingLimits, Page, ProductScope};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::list_by_user::{
    ListUserProductsParams, ListUserProductsUseCase,
};

pub struct ListUserProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub limits: ListingLimits,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListUserProductsUseCase for ListUserProductsUseCaseImpl {
    async fn execute(
        &self,
        params: ListUserProductsParams,
    ) -> Result<Page<Product>, ProductError> {
        let query = self.limits.query(
            ProductScope::Owner(params.user_id),
            params.sort,
            params.last.as_deref(),
            params.size,
        )?;

        fetch_page(self.repository.as_ref(), self.logger.as_ref(), &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::cursor::Cursor;
    use crate::domain::product::model::{ImageRef, NewProduct};
    use crate::domain::product::page::ProductQuery;
    use crate::domain::product::sort::SortKey;
    use crate::domain::shared::value_objects::{ProductId, UserId};
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: ProductId) -> Result<(), RepositoryError>;
            async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_scope_listing_to_owner_with_requested_sort() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_list()
            .withf(|query| {
                query.scope == ProductScope::Owner(UserId::new("seller"))
                    && query.sort == SortKey::Id
                    && query.cursor == Some(Cursor::Id(ProductId::new(4)))
            })
            .times(1)
            .returning(|_| {
                Ok(vec![Product {
                    id: ProductId::new(5),
                    user_id: UserId::new("seller"),
                    title: "Tent".to_string(),
                    price: 8_000,
                    category_id: None,
                    images: vec![ImageRef::new("products/tent.jpg")],
                    created_at: Utc::now(),
                }])
            });

        let use_case = ListUserProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            limits: ListingLimits::default(),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListUserProductsParams {
                user_id: UserId::new("seller"),
                sort: SortKey::Id,
                last: Some("4".to_string()),
                size: None,
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.size, 10);
    }

    #[tokio::test]
    async fn should_return_empty_page_for_user_without_products() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list().returning(|_| Ok(vec![]));

        let use_case = ListUserProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            limits: ListingLimits::default(),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListUserProductsParams {
                user_id: UserId::new("newcomer"),
                sort: SortKey::IdDesc,
                last: None,
                size: Some(5),
            })
            .await
            .unwrap();

        assert!(page.items.is_empty());
        assert!(!page.has_more);
    }

    #[tokio::test]
    async fn should_reject_size_above_limit() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_list().never();

        let use_case = ListUserProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            limits: ListingLimits {
                max_size: 20,
                ..ListingLimits::default()
            },
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListUserProductsParams {
                user_id: UserId::new("seller"),
                sort: SortKey::IdDesc,
                last: None,
                size: Some(21),
            })
            .await;

        assert!(matches!(
            result,
            Err(ProductError::InvalidArgument("product.size_too_large"))
        ));
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::ownership::OwnershipGuard;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Existence first so a missing product is a 404, never a 403
        let existing = self.repository.get_by_id(params.id).await?;

        if let Err(err) = OwnershipGuard::ensure(&params.actor, &existing.user_id) {
            self.logger.warn(&format!(
                "User {} tried to delete product {} owned by {}",
                params.actor, existing.id, existing.user_id
            ));
            return Err(err);
        }

        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{ImageRef, NewProduct, Product};
    use crate::domain::product::page::ProductQuery;
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

    fn make_product(owner: &str) -> Product {
        Product {
            id: ProductId::new(12),
            user_id: UserId::new(owner),
            title: "Guitar".to_string(),
            price: 40_000,
            category_id: None,
            images: vec![ImageRef::new("products/guitar.jpg")],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_delete_product_when_actor_owns_it() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(make_product("seller")));
        mock_repo
            .expect_delete()
            .withf(|id| *id == ProductId::new(12))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new(12),
                actor: UserId::new("seller"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_forbid_delete_when_actor_is_not_owner() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(make_product("seller")));
        mock_repo.expect_delete().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new(12),
                actor: UserId::new("buyer"),
            })
            .await;

        assert!(matches!(result, Err(ProductError::Forbidden)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_is_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: ProductId::new(12),
                actor: UserId::new("seller"),
            })
            .await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }
}

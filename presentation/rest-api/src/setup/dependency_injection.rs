use std::sync::Arc;

use logger::TracingLogger;
use object_storage::{S3ImageStorage, StorageClient};
use persistence::memory::InMemoryStore;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::wish::repository::WishRepositoryPostgres;

use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::insert::InsertProductUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::list_by_user::ListUserProductsUseCaseImpl;
use business::application::product::list_wished::ListWishedProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::wish::add::AddWishUseCaseImpl;
use business::application::wish::remove::RemoveWishUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::page::ListingLimits;
use business::domain::product::repository::ProductRepository;
use business::domain::product::storage::ImageStorage;
use business::domain::wish::repository::WishRepository;

use crate::api::health::routes::HealthApi;
use crate::api::product::routes::ProductApi;
use crate::api::wish::routes::WishApi;
use crate::config::storage_config::StorageConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub wish_api: WishApi,
}

impl DependencyContainer {
    pub fn new(
        pool: Option<sqlx::PgPool>,
        storage: &StorageConfig,
        limits: ListingLimits,
    ) -> anyhow::Result<Self> {
        let (store_kind, product_repository, wish_repository): (
            &'static str,
            Arc<dyn ProductRepository>,
            Arc<dyn WishRepository>,
        ) = match pool {
            Some(pool) => (
                "postgres",
                Arc::new(ProductRepositoryPostgres::new(pool.clone())),
                Arc::new(WishRepositoryPostgres::new(pool)),
            ),
            None => {
                let store = InMemoryStore::new();
                ("memory", Arc::new(store.clone()), Arc::new(store))
            }
        };

        let image_storage = Arc::new(S3ImageStorage::new(StorageClient::new(storage.settings())?));

        Ok(Self::with_adapters(
            store_kind,
            product_repository,
            wish_repository,
            image_storage,
            limits,
        ))
    }

    /// Wires use cases and routes over already-built adapters.
    pub fn with_adapters(
        store_kind: &'static str,
        product_repository: Arc<dyn ProductRepository>,
        wish_repository: Arc<dyn WishRepository>,
        image_storage: Arc<dyn ImageStorage>,
        limits: ListingLimits,
    ) -> Self {
        let product_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("products"));
        let wish_logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("wishes"));
        let health_api = HealthApi::new(store_kind);

        // Product use cases
        let insert_use_case = Arc::new(InsertProductUseCaseImpl {
            repository: product_repository.clone(),
            storage: image_storage,
            logger: product_logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            limits,
            logger: product_logger.clone(),
        });
        let list_by_user_use_case = Arc::new(ListUserProductsUseCaseImpl {
            repository: product_repository.clone(),
            limits,
            logger: product_logger.clone(),
        });
        let list_wished_use_case = Arc::new(ListWishedProductsUseCaseImpl {
            repository: product_repository.clone(),
            limits,
            logger: product_logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: product_logger.clone(),
        });

        // Wish use cases
        let add_wish_use_case = Arc::new(AddWishUseCaseImpl {
            repository: wish_repository.clone(),
            logger: wish_logger.clone(),
        });
        let remove_wish_use_case = Arc::new(RemoveWishUseCaseImpl {
            repository: wish_repository,
            logger: wish_logger,
        });

        let product_api = ProductApi::new(
            insert_use_case,
            get_by_id_use_case,
            list_use_case,
            list_by_user_use_case,
            list_wished_use_case,
            update_use_case,
            delete_use_case,
        );
        let wish_api = WishApi::new(add_wish_use_case, remove_wish_use_case);

        Self {
            health_api,
            product_api,
            wish_api,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn storage(endpoint: &str) -> StorageConfig {
        StorageConfig {
            endpoint: endpoint.to_string(),
            bucket: "products".to_string(),
            region: "us-east-1".to_string(),
            access_key_id: None,
            secret_access_key: None,
            public_url: None,
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn should_wire_memory_store_without_pool() {
        let container =
            DependencyContainer::new(None, &storage("http://localhost:9000"), ListingLimits::default());

        assert!(container.is_ok());
    }

    #[test]
    fn should_fail_on_invalid_storage_endpoint() {
        let container = DependencyContainer::new(None, &storage("::nope"), ListingLimits::default());

        assert!(container.is_err());
    }
}

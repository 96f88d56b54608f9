#![allow(dead_code)]

use std::sync::Arc;

use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::list_by_user::ListUserProductsUseCaseImpl;
use business::application::product::list_wished::ListWishedProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::wish::add::AddWishUseCaseImpl;
use business::application::wish::remove::RemoveWishUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::model::{ImageRef, NewProduct, Product, ProductContent};
use business::domain::product::page::ListingLimits;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::UserId;
use logger::TracingLogger;
use persistence::memory::InMemoryStore;

pub fn logger() -> Arc<dyn Logger> {
    Arc::new(TracingLogger::default())
}

pub async fn seed(store: &InMemoryStore, owner: &str, title: &str, price: i64) -> Product {
    let product = NewProduct::new(
        UserId::new(owner),
        ProductContent {
            title: title.to_string(),
            price,
            category_id: Some(1 + (price % 3) as i32),
        },
        vec![ImageRef::new(format!("images/{}.png", title))],
    )
    .unwrap();

    ProductRepository::insert(store, product).await.unwrap()
}

pub struct UseCases {
    pub list: ListProductsUseCaseImpl,
    pub list_by_user: ListUserProductsUseCaseImpl,
    pub list_wished: ListWishedProductsUseCaseImpl,
    pub update: UpdateProductUseCaseImpl,
    pub delete: DeleteProductUseCaseImpl,
    pub add_wish: AddWishUseCaseImpl,
    pub remove_wish: RemoveWishUseCaseImpl,
}

pub fn use_cases(store: &InMemoryStore) -> UseCases {
    let products: Arc<dyn ProductRepository> = Arc::new(store.clone());
    let limits = ListingLimits::default();

    UseCases {
        list: ListProductsUseCaseImpl {
            repository: products.clone(),
            limits,
            logger: logger(),
        },
        list_by_user: ListUserProductsUseCaseImpl {
            repository: products.clone(),
            limits,
            logger: logger(),
        },
        list_wished: ListWishedProductsUseCaseImpl {
            repository: products.clone(),
            limits,
            logger: logger(),
        },
        update: UpdateProductUseCaseImpl {
            repository: products.clone(),
            logger: logger(),
        },
        delete: DeleteProductUseCaseImpl {
            repository: products,
            logger: logger(),
        },
        add_wish: AddWishUseCaseImpl {
            repository: Arc::new(store.clone()),
            logger: logger(),
        },
        remove_wish: RemoveWishUseCaseImpl {
            repository: Arc::new(store.clone()),
            logger: logger(),
        },
    }
}

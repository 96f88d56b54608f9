//! Process-local store used when no database is configured, and by tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product};
use business::domain::product::page::{ProductQuery, ProductScope};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;
use business::domain::wish::model::Wish;
use business::domain::wish::repository::WishRepository;

#[derive(Debug, Default)]
struct MemoryState {
    products: BTreeMap<ProductId, Product>,
    wishes: BTreeSet<Wish>,
    last_id: i64,
}

/// Products and wishes behind one lock, so wish uniqueness and the delete
/// cascade hold under concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn wish_count(&self) -> usize {
        self.state.read().await.wishes.len()
    }

    pub async fn product_count(&self) -> usize {
        self.state.read().await.products.len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError> {
        let state = self.state.read().await;
        state
            .products
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let product = product.into_product(ProductId::new(state.last_id));
        state.products.insert(product.id, product.clone());

        tracing::debug!(product_id = %product.id, "Stored product in memory");
        Ok(product)
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        let stored = state
            .products
            .get_mut(&product.id)
            .ok_or(RepositoryError::NotFound)?;
        stored.title = product.title.clone();
        stored.price = product.price;
        stored.category_id = product.category_id;
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if state.products.remove(&id).is_none() {
            return Err(RepositoryError::NotFound);
        }
        state.wishes.retain(|wish| wish.product_id != id);
        Ok(())
    }

    async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>, RepositoryError> {
        let state = self.state.read().await;

        let mut result: Vec<Product> = state
            .products
            .values()
            .filter(|product| match &query.scope {
                ProductScope::WishedBy(user_id) => state
                    .wishes
                    .contains(&Wish::new(user_id.clone(), product.id)),
                _ => true,
            })
            .filter(|product| query.admits(product))
            .cloned()
            .collect();

        result.sort_by(|a, b| query.sort.compare(a, b));
        result.truncate(usize::try_from(query.fetch_limit()).unwrap_or(usize::MAX));
        Ok(result)
    }
}

#[async_trait]
impl WishRepository for InMemoryStore {
    async fn insert(&self, wish: &Wish) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if !state.products.contains_key(&wish.product_id) {
            return Err(RepositoryError::NotFound);
        }
        if !state.wishes.insert(wish.clone()) {
            return Err(RepositoryError::Duplicated);
        }
        Ok(())
    }

    async fn delete(&self, wish: &Wish) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if !state.wishes.remove(wish) {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

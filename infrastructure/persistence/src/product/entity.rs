use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::{ImageRef, Product};
use business::domain::shared::value_objects::{ProductId, UserId};

pub const PRODUCT_COLUMNS: &str =
    "p.id, p.user_id, p.title, p.price, p.category_id, p.images, p.created_at";

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub price: i64,
    pub category_id: Option<i32>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            user_id: UserId::new(self.user_id),
            title: self.title,
            price: self.price,
            category_id: self.category_id,
            images: self.images.into_iter().map(ImageRef::new).collect(),
            created_at: self.created_at,
        }
    }
}

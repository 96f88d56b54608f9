use chrono::{DateTime, Utc};
use poem_openapi::{Multipart, Object, types::multipart::Upload};
use serde::Deserialize;

use business::domain::product::model::{Product, ProductContent};
use business::domain::product::page::Page;
use business::domain::product::storage::ImageUpload;
use business::domain::shared::value_objects::UserId;

/// Multipart body of a new listing: image files plus a JSON product document.
#[derive(Multipart)]
pub struct InsertProductForm {
    /// Product images, at least one
    pub files: Vec<Upload>,
    /// Product document, e.g. `{"userId":"u1","title":"Bike","price":1500,"categoryId":3}`
    pub json: String,
}

/// The `json` part of [`InsertProductForm`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    pub user_id: String,
    pub title: String,
    pub price: i64,
    #[serde(default)]
    pub category_id: Option<i32>,
}

impl ProductDocument {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn content(&self) -> ProductContent {
        ProductContent {
            title: self.title.clone(),
            price: self.price,
            category_id: self.category_id,
        }
    }
}

pub async fn read_upload(upload: Upload) -> std::io::Result<ImageUpload> {
    let file_name = upload.file_name().map(str::to_string);
    let content_type = upload.content_type().map(str::to_string);
    let bytes = upload.into_vec().await?;

    Ok(ImageUpload {
        file_name,
        content_type,
        bytes,
    })
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// Product title (1 to 100 characters)
    pub title: String,
    /// Price, non-negative
    pub price: i64,
    /// Category identifier, positive
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i32>,
}

impl From<UpdateProductRequest> for ProductContent {
    fn from(request: UpdateProductRequest) -> Self {
        Self {
            title: request.title,
            price: request.price,
            category_id: request.category_id,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    /// Owner of the listing
    pub user_id: String,
    pub title: String,
    pub price: i64,
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i32>,
    /// Image URLs, in upload order
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            user_id: product.user_id.to_string(),
            title: product.title,
            price: product.price,
            category_id: product.category_id,
            images: product
                .images
                .iter()
                .map(|image| image.as_str().to_string())
                .collect(),
            created_at: product.created_at,
        }
    }
}

/// One page of products.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductPageResponse {
    /// The page size that was requested
    pub size: i64,
    /// Set on per-user listings
    #[oai(skip_serializing_if_is_none)]
    pub user_id: Option<String>,
    pub products: Vec<ProductResponse>,
    /// Pass as `last` to fetch the following page
    #[oai(skip_serializing_if_is_none)]
    pub next: Option<String>,
    pub has_more: bool,
}

impl ProductPageResponse {
    pub fn from_page(page: Page<Product>, user_id: Option<&UserId>) -> Self {
        Self {
            size: page.size,
            user_id: user_id.map(UserId::to_string),
            products: page.items.into_iter().map(ProductResponse::from).collect(),
            next: page.next,
            has_more: page.has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_camel_case_document() {
        let document =
            ProductDocument::parse(r#"{"userId":"u1","title":"Bike","price":1500,"categoryId":3}"#)
                .unwrap();

        assert_eq!(document.user_id, "u1");
        assert_eq!(
            document.content(),
            ProductContent {
                title: "Bike".to_string(),
                price: 1500,
                category_id: Some(3),
            }
        );
    }

    #[test]
    fn should_allow_missing_category() {
        let document =
            ProductDocument::parse(r#"{"userId":"u1","title":"Bike","price":0}"#).unwrap();

        assert_eq!(document.category_id, None);
    }

    #[test]
    fn should_reject_document_without_owner() {
        assert!(ProductDocument::parse(r#"{"title":"Bike","price":1}"#).is_err());
    }
}

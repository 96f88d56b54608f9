use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::{FieldViolation, ProductError};
use crate::domain::shared::value_objects::{ProductId, UserId};

pub const MAX_TITLE_CHARS: usize = 100;

/// Reference to an image held by the object storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub user_id: UserId,
    pub title: String,
    pub price: i64,
    pub category_id: Option<i32>,
    pub images: Vec<ImageRef>,
    pub created_at: DateTime<Utc>,
}

/// The owner-editable part of a listing. Update replaces all of it at once.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductContent {
    pub title: String,
    pub price: i64,
    pub category_id: Option<i32>,
}

impl ProductContent {
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        let title = self.title.trim();
        if title.is_empty() {
            violations.push(FieldViolation::new("title", "product.title_empty"));
        } else if title.chars().count() > MAX_TITLE_CHARS {
            violations.push(FieldViolation::new("title", "product.title_too_long"));
        }
        if self.price < 0 {
            violations.push(FieldViolation::new("price", "product.price_negative"));
        }
        if matches!(self.category_id, Some(category) if category <= 0) {
            violations.push(FieldViolation::new("categoryId", "product.category_invalid"));
        }
        violations
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ProductError::ValidationFailed(violations))
        }
    }
}

/// A listing that passed validation but has not been assigned an id by the store yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub user_id: UserId,
    pub title: String,
    pub price: i64,
    pub category_id: Option<i32>,
    pub images: Vec<ImageRef>,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    pub fn new(
        user_id: UserId,
        content: ProductContent,
        images: Vec<ImageRef>,
    ) -> Result<Self, ProductError> {
        content.validate()?;
        if images.is_empty() {
            return Err(ProductError::ValidationFailed(vec![FieldViolation::new(
                "files",
                "product.images_required",
            )]));
        }

        Ok(Self {
            user_id,
            title: content.title.trim().to_string(),
            price: content.price,
            category_id: content.category_id,
            images,
            created_at: Utc::now(),
        })
    }

    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            user_id: self.user_id,
            title: self.title,
            price: self.price,
            category_id: self.category_id,
            images: self.images,
            created_at: self.created_at,
        }
    }
}

impl Product {
    /// Full replacement of the editable content. Owner, id, images and
    /// creation time are carried over untouched.
    pub fn with_content(self, content: ProductContent) -> Self {
        Self {
            title: content.title.trim().to_string(),
            price: content.price,
            category_id: content.category_id,
            ..self
        }
    }

    pub fn content(&self) -> ProductContent {
        ProductContent {
            title: self.title.clone(),
            price: self.price,
            category_id: self.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(title: &str, price: i64, category_id: Option<i32>) -> ProductContent {
        ProductContent {
            title: title.to_string(),
            price,
            category_id,
        }
    }

    #[test]
    fn should_build_new_product_when_content_is_valid() {
        let product = NewProduct::new(
            UserId::new("seller"),
            content("  Bicycle ", 12000, Some(3)),
            vec![ImageRef::new("products/a.jpg")],
        )
        .unwrap();

        assert_eq!(product.title, "Bicycle");
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn should_report_every_invalid_field() {
        let violations = content(" ", -1, Some(0)).violations();

        let fields: Vec<&str> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["title", "price", "categoryId"]);
    }

    #[test]
    fn should_reject_title_longer_than_limit() {
        let long_title = "x".repeat(MAX_TITLE_CHARS + 1);
        let violations = content(&long_title, 0, None).violations();

        assert_eq!(
            violations,
            vec![FieldViolation::new("title", "product.title_too_long")]
        );
    }

    #[test]
    fn should_reject_new_product_without_images() {
        let result = NewProduct::new(UserId::new("seller"), content("Lamp", 500, None), vec![]);

        match result {
            Err(ProductError::ValidationFailed(violations)) => {
                assert_eq!(violations[0].field, "files");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn should_replace_content_and_keep_owner_and_images() {
        let product = NewProduct::new(
            UserId::new("seller"),
            content("Lamp", 500, Some(2)),
            vec![ImageRef::new("products/lamp.jpg")],
        )
        .unwrap()
        .into_product(ProductId::new(5));

        let updated = product.clone().with_content(content("Desk lamp", 650, None));

        assert_eq!(updated.id, product.id);
        assert_eq!(updated.user_id, product.user_id);
        assert_eq!(updated.images, product.images);
        assert_eq!(updated.created_at, product.created_at);
        assert_eq!(updated.content(), content("Desk lamp", 650, None));
    }
}

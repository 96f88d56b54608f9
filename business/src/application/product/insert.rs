use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{FieldViolation, ProductError};
use crate::domain::product::model::{ImageRef, NewProduct, Product, ProductContent};
use crate::domain::product::ownership::OwnershipGuard;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::storage::ImageStorage;
use crate::domain::product::use_cases::insert::{InsertProductParams, InsertProductUseCase};
use crate::domain::shared::value_objects::UserId;

pub struct InsertProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub storage: Arc<dyn ImageStorage>,
    pub logger: Arc<dyn Logger>,
}

impl InsertProductUseCaseImpl {
    async fn persist(
        &self,
        owner: UserId,
        content: ProductContent,
        images: Vec<ImageRef>,
    ) -> Result<Product, ProductError> {
        let new_product = NewProduct::new(owner, content, images)?;
        Ok(self.repository.insert(new_product).await?)
    }
}

#[async_trait]
impl InsertProductUseCase for InsertProductUseCaseImpl {
    async fn execute(&self, params: InsertProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Inserting product for user: {}", params.owner));

        if let Err(err) = OwnershipGuard::ensure(&params.actor, &params.owner) {
            self.logger.warn(&format!(
                "User {} tried to insert a product owned by {}",
                params.actor, params.owner
            ));
            return Err(err);
        }

        // Reject before anything is uploaded
        let mut violations = params.content.violations();
        if params.files.is_empty() {
            violations.push(FieldViolation::new("files", "product.images_required"));
        }
        if !violations.is_empty() {
            return Err(ProductError::ValidationFailed(violations));
        }

        let file_count = params.files.len();
        let images = self.storage.store(params.files).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to upload {} product images: {}", file_count, e));
            ProductError::StoreUnavailable(e.to_string())
        })?;

        // Uploaded objects are not removed when the row is rejected
        let uploaded = images
            .iter()
            .map(ImageRef::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let product = match self.persist(params.owner, params.content, images).await {
            Ok(product) => product,
            Err(err) => {
                self.logger.warn(&format!(
                    "Orphaned uploaded images after failed insert ({}): {}",
                    err, uploaded
                ));
                return Err(err);
            }
        };

        self.logger
            .info(&format!("Product inserted: {}", product.id));
        Ok(product)
    }
}

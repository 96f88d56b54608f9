use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::ownership::OwnershipGuard;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        params.content.validate()?;

        let existing = self.repository.get_by_id(params.id).await?;

        if let Err(err) = OwnershipGuard::ensure(&params.actor, &existing.user_id) {
            self.logger.warn(&format!(
                "User {} tried to update product {} owned by {}",
                params.actor, existing.id, existing.user_id
            ));
            return Err(err);
        }

        let updated_product = existing.with_content(params.content);
        self.repository.update(&updated_product).await?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wish::errors::WishError;
use crate::domain::wish::model::Wish;
use crate::domain::wish::repository::WishRepository;
use crate::domain::wish::use_cases::remove::{RemoveWishParams, RemoveWishUseCase};

pub struct RemoveWishUseCaseImpl {
    pub repository: Arc<dyn WishRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveWishUseCase for RemoveWishUseCaseImpl {
    async fn execute(&self, params: RemoveWishParams) -> Result<(), WishError> {
        let wish = Wish::new(params.user_id, params.product_id);
        self.logger.info(&format!(
            "Removing wish: user={} product={}",
            wish.user_id, wish.product_id
        ));

        self.repository.delete(&wish).await?;
        Ok(())
    }
}

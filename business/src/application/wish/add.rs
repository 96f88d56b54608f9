use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wish::errors::WishError;
use crate::domain::wish::model::{AddWishOutcome, Wish};
use crate::domain::wish::repository::WishRepository;
use crate::domain::wish::use_cases::add::{AddWishParams, AddWishUseCase};

pub struct AddWishUseCaseImpl {
    pub repository: Arc<dyn WishRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddWishUseCase for AddWishUseCaseImpl {
    async fn execute(&self, params: AddWishParams) -> Result<AddWishOutcome, WishError> {
        let wish = Wish::new(params.user_id, params.product_id);
        self.logger.info(&format!(
            "Adding wish: user={} product={}",
            wish.user_id, wish.product_id
        ));

        // The store's unique key decides races between identical requests
        match self.repository.insert(&wish).await {
            Ok(()) => Ok(AddWishOutcome::Created),
            Err(RepositoryError::Duplicated) => {
                self.logger.info(&format!(
                    "Wish already exists: user={} product={}",
                    wish.user_id, wish.product_id
                ));
                Ok(AddWishOutcome::AlreadyExists)
            }
            Err(err) => Err(err.into()),
        }
    }
}

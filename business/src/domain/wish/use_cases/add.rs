use async_trait::async_trait;

use crate::domain::shared::value_objects::{ProductId, UserId};
use crate::domain::wish::errors::WishError;
use crate::domain::wish::model::AddWishOutcome;

pub struct AddWishParams {
    pub user_id: UserId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait AddWishUseCase: Send + Sync {
    async fn execute(&self, params: AddWishParams) -> Result<AddWishOutcome, WishError>;
}

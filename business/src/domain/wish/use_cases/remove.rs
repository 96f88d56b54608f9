use async_trait::async_trait;

use crate::domain::shared::value_objects::{ProductId, UserId};
use crate::domain::wish::errors::WishError;

pub struct RemoveWishParams {
    pub user_id: UserId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveWishUseCase: Send + Sync {
    async fn execute(&self, params: RemoveWishParams) -> Result<(), WishError>;
}

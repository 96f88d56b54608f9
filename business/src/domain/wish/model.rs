use crate::domain::shared::value_objects::{ProductId, UserId};

/// A user's favorite. The (user, product) pair is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Wish {
    pub user_id: UserId,
    pub product_id: ProductId,
}

impl Wish {
    pub fn new(user_id: UserId, product_id: ProductId) -> Self {
        Self {
            user_id,
            product_id,
        }
    }
}

/// Result of favoriting a product. A repeated request is not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddWishOutcome {
    Created,
    AlreadyExists,
}

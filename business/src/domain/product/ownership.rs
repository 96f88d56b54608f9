use super::errors::ProductError;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Authorized,
    Forbidden,
}

/// Decides whether an actor may mutate a listing. Reads never go through it.
pub struct OwnershipGuard;

impl OwnershipGuard {
    pub fn check(actor: &UserId, owner: &UserId) -> Authorization {
        if actor == owner {
            Authorization::Authorized
        } else {
            Authorization::Forbidden
        }
    }

    pub fn ensure(actor: &UserId, owner: &UserId) -> Result<(), ProductError> {
        match Self::check(actor, owner) {
            Authorization::Authorized => Ok(()),
            Authorization::Forbidden => Err(ProductError::Forbidden),
        }
    }
}

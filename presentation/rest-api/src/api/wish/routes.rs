use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::{ProductId, UserId};
use business::domain::wish::model::AddWishOutcome;
use business::domain::wish::use_cases::add::{AddWishParams, AddWishUseCase};
use business::domain::wish::use_cases::remove::{RemoveWishParams, RemoveWishUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct WishApi {
    add_use_case: Arc<dyn AddWishUseCase>,
    remove_use_case: Arc<dyn RemoveWishUseCase>,
}

impl WishApi {
    pub fn new(
        add_use_case: Arc<dyn AddWishUseCase>,
        remove_use_case: Arc<dyn RemoveWishUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
        }
    }
}

fn invalid_user_id() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("InvalidArgument", "wish.invalid_user_id"))
}

/// Wishlist API
#[OpenApi]
impl WishApi {
    /// Add a product to a wishlist
    ///
    /// Answers 403 when the product is already wished by this user.
    /// No `X-User-Id` is read: any caller may change any user's wishlist.
    /// Ownership checks apply to product mutations only.
    #[oai(
        path = "/users/:user_id/products/:product_id/wish",
        method = "post",
        tag = "ApiTags::Wishes"
    )]
    async fn add_wish(&self, user_id: Path<String>, product_id: Path<i64>) -> AddWishResponse {
        let Some(user_id) = UserId::parse(&user_id.0) else {
            return AddWishResponse::BadRequest(invalid_user_id());
        };

        match self
            .add_use_case
            .execute(AddWishParams {
                user_id,
                product_id: ProductId::new(product_id.0),
            })
            .await
        {
            Ok(AddWishOutcome::Created) => AddWishResponse::Ok,
            Ok(AddWishOutcome::AlreadyExists) => AddWishResponse::AlreadyExists(Json(
                ErrorResponse::new("AlreadyExists", "wish.already_exists"),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddWishResponse::NotFound(json),
                    _ => AddWishResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from a wishlist
    ///
    /// Like adding, this reads no `X-User-Id` and accepts any caller.
    #[oai(
        path = "/users/:user_id/products/:product_id/wish",
        method = "delete",
        tag = "ApiTags::Wishes"
    )]
    async fn remove_wish(&self, user_id: Path<String>, product_id: Path<i64>) -> RemoveWishResponse {
        let Some(user_id) = UserId::parse(&user_id.0) else {
            return RemoveWishResponse::BadRequest(invalid_user_id());
        };

        match self
            .remove_use_case
            .execute(RemoveWishParams {
                user_id,
                product_id: ProductId::new(product_id.0),
            })
            .await
        {
            Ok(()) => RemoveWishResponse::Ok,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveWishResponse::NotFound(json),
                    _ => RemoveWishResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddWishResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    AlreadyExists(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveWishResponse {
    #[oai(status = 200)]
    Ok,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

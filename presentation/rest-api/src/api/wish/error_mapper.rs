use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wish::errors::WishError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            WishError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "wish.not_found"),
            WishError::StoreUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "wish.store_unavailable",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

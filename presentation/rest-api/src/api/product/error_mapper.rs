use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, FieldErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, response) = match self {
            ProductError::InvalidArgument(code) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("InvalidArgument", code),
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NotFound", "product.not_found"),
            ),
            ProductError::Forbidden => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("Forbidden", "product.forbidden"),
            ),
            ProductError::ValidationFailed(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    details: violations
                        .into_iter()
                        .map(|violation| FieldErrorResponse {
                            field: violation.field.to_string(),
                            code: violation.code.to_string(),
                        })
                        .collect(),
                    ..ErrorResponse::new("ValidationError", "product.validation_failed")
                },
            ),
            ProductError::StoreUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("InternalError", "product.store_unavailable"),
            ),
        };

        (status, Json(response))
    }
}

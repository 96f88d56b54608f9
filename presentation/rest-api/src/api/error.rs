use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// One rejected field of a validation failure.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct FieldErrorResponse {
    pub field: String,
    pub code: String,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    #[oai(default, skip_serializing_if_is_empty)]
    pub details: Vec<FieldErrorResponse>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
            details: Vec::new(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

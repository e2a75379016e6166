use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. `NotFound`
    pub name: String,
    /// Stable i18n code, e.g. `product.not_found`
    pub message: String,
    /// Human-readable explanation
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str, detail: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            detail: detail.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, detail) = match &self {
            ProductError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Unauthenticated",
                "Invalid or missing identity token",
            ),
            ProductError::Forbidden => (
                StatusCode::FORBIDDEN,
                "Forbidden",
                "You do not own this product",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Product not found"),
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Product name must not be empty",
            ),
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Price must be a non-negative number",
            ),
            ProductError::InvalidImage => (
                StatusCode::BAD_REQUEST,
                "InvalidImage",
                "Invalid Base64 image",
            ),
            ProductError::ImageTooLarge => (
                StatusCode::BAD_REQUEST,
                "ImageTooLarge",
                "Image size must be at most 5MB",
            ),
            ProductError::StoreWriteFailed | ProductError::ImageOrphaned { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Failed to save product",
            ),
            ProductError::UpstreamTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "UpstreamTimeout",
                "A backing service did not respond in time",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Failed to read products",
            ),
        };

        (
            status,
            Json(ErrorResponse::new(name, &self.to_string(), detail)),
        )
    }
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::image::errors::ImageError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ImageError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, detail) = match &self {
            ImageError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Image not found"),
            ImageError::InvalidImage => (
                StatusCode::BAD_REQUEST,
                "InvalidImage",
                "Invalid Base64 image",
            ),
            ImageError::ImageTooLarge => (
                StatusCode::BAD_REQUEST,
                "ImageTooLarge",
                "Image size must be at most 5MB",
            ),
            ImageError::Repository(RepositoryError::Timeout) => (
                StatusCode::GATEWAY_TIMEOUT,
                "UpstreamTimeout",
                "Image store did not respond in time",
            ),
            ImageError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "Failed to read image",
            ),
        };

        (
            status,
            Json(ErrorResponse::new(name, &self.to_string(), detail)),
        )
    }
}

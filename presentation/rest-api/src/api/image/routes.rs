use std::sync::Arc;

use poem::Body;
use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Binary, Json},
};

use business::domain::image::use_cases::fetch::{FetchImageParams, FetchImageUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ImageApi {
    fetch_use_case: Arc<dyn FetchImageUseCase>,
}

impl ImageApi {
    pub fn new(fetch_use_case: Arc<dyn FetchImageUseCase>) -> Self {
        Self { fetch_use_case }
    }
}

#[OpenApi]
impl ImageApi {
    /// Fetch a product image
    ///
    /// Serves the stored bytes with their recorded content type. Public.
    #[oai(path = "/images/:file_id", method = "get", tag = "ApiTags::Images")]
    async fn fetch_image(&self, file_id: Path<String>) -> FetchImageResponse {
        let params = FetchImageParams { file_id: file_id.0 };

        match self.fetch_use_case.execute(params).await {
            Ok(blob) => FetchImageResponse::Ok(Binary(Body::from_vec(blob.data)), blob.content_type),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => FetchImageResponse::NotFound(json),
                    504 => FetchImageResponse::GatewayTimeout(json),
                    _ => FetchImageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum FetchImageResponse {
    #[oai(status = 200)]
    Ok(Binary<Body>, #[oai(header = "content-type")] String),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

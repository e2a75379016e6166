use async_trait::async_trait;

use crate::domain::image::errors::ImageError;
use crate::domain::image::model::ImageBlob;

pub struct FetchImageParams {
    pub file_id: String,
}

#[async_trait]
pub trait FetchImageUseCase: Send + Sync {
    async fn execute(&self, params: FetchImageParams) -> Result<ImageBlob, ImageError>;
}

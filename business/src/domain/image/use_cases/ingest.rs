use async_trait::async_trait;

use crate::domain::image::errors::ImageError;

pub struct IngestImageParams {
    /// Base64 payload, optionally behind a data-URI style `<meta>,` prefix.
    pub encoded: String,
    pub name_hint: String,
}

/// Decodes, bounds and stores an image, returning its public URL.
///
/// Every successful call leaves one new permanent blob behind.
#[async_trait]
pub trait IngestImageUseCase: Send + Sync {
    async fn execute(&self, params: IngestImageParams) -> Result<String, ImageError>;
}

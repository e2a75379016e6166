use std::sync::Arc;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use uuid::Uuid;

use crate::domain::image::errors::ImageError;
use crate::domain::image::model::{IMAGE_CONTENT_TYPE, ImageBlob, MAX_IMAGE_BYTES};
use crate::domain::image::store::ImageStore;
use crate::domain::image::use_cases::ingest::{IngestImageParams, IngestImageUseCase};
use crate::domain::logger::Logger;

pub struct IngestImageUseCaseImpl {
    pub store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
    /// Public address of this service, without trailing slash.
    pub public_base_url: String,
}

/// Returns the part of `encoded` after the first comma, or all of it.
pub fn strip_data_uri_prefix(encoded: &str) -> &str {
    match encoded.split_once(',') {
        Some((_, payload)) => payload,
        None => encoded,
    }
}

/// Decodes a base64 image payload. Line breaks and other ASCII whitespace are ignored.
pub fn decode_image_payload(encoded: &str) -> Result<Vec<u8>, ImageError> {
    let payload: String = strip_data_uri_prefix(encoded)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let data = STANDARD
        .decode(payload.as_bytes())
        .map_err(|_| ImageError::InvalidImage)?;

    if data.is_empty() {
        return Err(ImageError::InvalidImage);
    }
    if data.len() > MAX_IMAGE_BYTES {
        return Err(ImageError::ImageTooLarge);
    }

    Ok(data)
}

/// Builds the public URL under which the image fetch route serves a blob.
pub fn image_url(public_base_url: &str, id: Uuid) -> String {
    format!("{}/images/{}", public_base_url.trim_end_matches('/'), id)
}

#[async_trait]
impl IngestImageUseCase for IngestImageUseCaseImpl {
    async fn execute(&self, params: IngestImageParams) -> Result<String, ImageError> {
        let data = decode_image_payload(&params.encoded)?;

        let blob = ImageBlob::new(
            format!("{}.png", params.name_hint),
            IMAGE_CONTENT_TYPE,
            data,
        );
        self.store.save(&blob).await?;

        self.logger.info(&format!(
            "Image stored: {} ({} bytes)",
            blob.id,
            blob.data.len()
        ));
        Ok(image_url(&self.public_base_url, blob.id))
    }
}

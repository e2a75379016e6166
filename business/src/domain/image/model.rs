use uuid::Uuid;

/// Content type recorded for every ingested image.
pub const IMAGE_CONTENT_TYPE: &str = "image/png";

/// Upper bound on the decoded size of an ingested image (inclusive).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Immutable binary content held by the image store.
///
/// A blob is never rewritten: replacing a product image stores a new blob and
/// leaves the previous one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlob {
    pub id: Uuid,
    /// Non-authoritative label derived from the product name.
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageBlob {
    pub fn new(filename: String, content_type: &str, data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            content_type: content_type.to_string(),
            data,
        }
    }

    pub fn from_repository(id: Uuid, filename: String, content_type: String, data: Vec<u8>) -> Self {
        Self {
            id,
            filename,
            content_type,
            data,
        }
    }
}

use sqlx::FromRow;
use uuid::Uuid;

use business::domain::image::model::ImageBlob;

#[derive(FromRow)]
pub struct ImageEntity {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl ImageEntity {
    pub fn into_domain(self) -> ImageBlob {
        ImageBlob::from_repository(self.id, self.filename, self.content_type, self.data)
    }
}

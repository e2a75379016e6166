use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::ImageBlob;

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn save(&self, blob: &ImageBlob) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<ImageBlob, RepositoryError>;
}

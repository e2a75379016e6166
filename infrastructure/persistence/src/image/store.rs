use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::image::model::ImageBlob;
use business::domain::image::store::ImageStore;

use super::entity::ImageEntity;
use crate::db::bounded;

/// Image blobs kept as `BYTEA` rows next to the catalog.
pub struct ImageStorePostgres {
    pool: PgPool,
    timeout: Duration,
}

impl ImageStorePostgres {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl ImageStore for ImageStorePostgres {
    async fn save(&self, blob: &ImageBlob) -> Result<(), RepositoryError> {
        bounded(
            self.timeout,
            sqlx::query(
                "INSERT INTO images (id, filename, content_type, data) VALUES ($1, $2, $3, $4)",
            )
            .bind(blob.id)
            .bind(&blob.filename)
            .bind(&blob.content_type)
            .bind(&blob.data)
            .execute(&self.pool),
            RepositoryError::Persistence,
        )
        .await?;

        tracing::debug!(image_id = %blob.id, bytes = blob.data.len(), "image blob stored");
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ImageBlob, RepositoryError> {
        let entity = bounded(
            self.timeout,
            sqlx::query_as::<_, ImageEntity>(
                "SELECT id, filename, content_type, data FROM images WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(&self.pool),
            RepositoryError::DatabaseError,
        )
        .await?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}

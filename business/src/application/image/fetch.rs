use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::image::errors::ImageError;
use crate::domain::image::model::ImageBlob;
use crate::domain::image::store::ImageStore;
use crate::domain::image::use_cases::fetch::{FetchImageParams, FetchImageUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::parse_store_id;

pub struct FetchImageUseCaseImpl {
    pub store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FetchImageUseCase for FetchImageUseCaseImpl {
    async fn execute(&self, params: FetchImageParams) -> Result<ImageBlob, ImageError> {
        let id = parse_store_id(&params.file_id).ok_or(ImageError::NotFound)?;

        self.logger.debug(&format!("Fetching image: {}", id));

        self.store.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ImageError::NotFound,
            other => ImageError::Repository(other),
        })
    }
}

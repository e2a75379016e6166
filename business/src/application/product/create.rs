use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::identity::verifier::IdentityVerifier;
use crate::domain::image::use_cases::ingest::{IngestImageParams, IngestImageUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product, validate_listing};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub image_ingestion: Arc<dyn IngestImageUseCase>,
    pub logger: Arc<dyn Logger>,
}

/// Treats a blank form field the same as an absent one.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Maps a failed catalog write, reporting the image blob it leaves behind, if any.
///
/// Blobs are written before the catalog record and never rolled back.
pub(crate) fn catalog_write_failed(
    logger: &dyn Logger,
    err: RepositoryError,
    image_url: Option<&str>,
) -> ProductError {
    let Some(url) = image_url else {
        return err.into();
    };

    match err {
        RepositoryError::Timeout => {
            logger.warn(&format!(
                "Catalog write timed out, image may be orphaned: {}",
                url
            ));
            ProductError::UpstreamTimeout
        }
        RepositoryError::NotFound => {
            logger.warn(&format!(
                "Product vanished during write, image orphaned: {}",
                url
            ));
            ProductError::NotFound
        }
        other => {
            logger.error(&format!(
                "Catalog write failed ({}), image orphaned: {}",
                other, url
            ));
            ProductError::ImageOrphaned {
                image_url: url.to_string(),
            }
        }
    }
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let farmer_id = self.verifier.verify(&params.id_token).await?;

        self.logger.info(&format!(
            "Creating product '{}' for farmer {}",
            params.name, farmer_id
        ));

        validate_listing(&params.name, params.price)?;

        let image_url = match non_blank(params.image_base64) {
            Some(encoded) => Some(
                self.image_ingestion
                    .execute(IngestImageParams {
                        encoded,
                        name_hint: params.name.clone(),
                    })
                    .await?,
            ),
            None => None,
        };

        let product = Product::new(NewProductProps {
            farmer_id,
            farmer_name: params.farmer_name,
            name: params.name,
            price: params.price,
            quantity: params.quantity,
            description: params.description,
            image_url,
        })?;

        if let Err(e) = self.repository.insert(&product).await {
            return Err(catalog_write_failed(
                self.logger.as_ref(),
                e,
                product.image_url.as_deref(),
            ));
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use super::create::{catalog_write_failed, non_blank};
use crate::domain::identity::verifier::IdentityVerifier;
use crate::domain::image::use_cases::ingest::{IngestImageParams, IngestImageUseCase};
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, ProductChanges, validate_listing};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::shared::value_objects::parse_store_id;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub image_ingestion: Arc<dyn IngestImageUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let farmer_id = self.verifier.verify(&params.id_token).await?;

        self.logger
            .info(&format!("Updating product: {}", params.id));

        let id = parse_store_id(&params.id).ok_or(ProductError::NotFound)?;
        let existing = self.repository.get_by_id(id).await?;

        if !existing.is_owned_by(&farmer_id) {
            self.logger.warn(&format!(
                "Farmer {} denied update of product {}",
                farmer_id, existing.id
            ));
            return Err(ProductError::Forbidden);
        }

        validate_listing(&params.name, params.price)?;

        // The previous blob, if any, is left in place.
        let new_image_url = match non_blank(params.image_base64) {
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

        let updated = existing.revise(
            ProductChanges {
                farmer_name: params.farmer_name,
                name: params.name,
                price: params.price,
                quantity: params.quantity,
                description: params.description,
            },
            new_image_url.clone(),
        )?;

        if let Err(e) = self.repository.update(&updated).await {
            return Err(catalog_write_failed(
                self.logger.as_ref(),
                e,
                new_image_url.as_deref(),
            ));
        }

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::identity::errors::IdentityError;
    use crate::domain::image::errors::ImageError;
    use crate::domain::shared::value_objects::FarmerId;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_farmer(&self, farmer_id: &FarmerId) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Verifier {}

        #[async_trait]
        impl IdentityVerifier for Verifier {
            async fn verify(&self, id_token: &str) -> Result<FarmerId, IdentityError>;
        }
    }

    mock! {
        pub Ingest {}

        #[async_trait]
        impl IngestImageUseCase for Ingest {
            async fn execute(&self, params: IngestImageParams) -> Result<String, ImageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn verifier_for(subject: &'static str) -> MockVerifier {
        let mut verifier = MockVerifier::new();
        verifier
            .expect_verify()
            .returning(move |_| Ok(FarmerId::new(subject)));
        verifier
    }

    fn stored(id: Uuid, image_url: Option<&str>) -> Product {
        Product::from_repository(
            id,
            FarmerId::new("u1"),
            Some("Green Acres".to_string()),
            "Tomatoes".to_string(),
            2.5,
            10,
            None,
            image_url.map(str::to_string),
        )
    }

    fn params(id: Uuid, image_base64: Option<&str>) -> UpdateProductParams {
        UpdateProductParams {
            id: id.to_string(),
            id_token: "t".to_string(),
            farmer_name: None,
            name: "Heirloom Tomatoes".to_string(),
            price: 3.75,
            quantity: 6,
            description: Some("Mixed colours".to_string()),
            image_base64: image_base64.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn should_replace_fields_and_keep_image_when_none_submitted() {
        let product_id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored(product_id, Some("http://h/images/old"))));
        repo.expect_update()
            .withf(|p| p.image_url.as_deref() == Some("http://h/images/old"))
            .times(1)
            .returning(|_| Ok(()));
        let mut ingest = MockIngest::new();
        ingest.expect_execute().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            verifier: Arc::new(verifier_for("u1")),
            image_ingestion: Arc::new(ingest),
            logger: mock_logger(),
        };

        let updated = use_case.execute(params(product_id, None)).await.unwrap();

        assert_eq!(updated.id, product_id);
        assert_eq!(updated.name, "Heirloom Tomatoes");
        assert_eq!(updated.price, 3.75);
        assert_eq!(updated.quantity, 6);
        assert_eq!(updated.farmer_name, None);
        assert_eq!(updated.description.as_deref(), Some("Mixed colours"));
        assert_eq!(updated.image_url.as_deref(), Some("http://h/images/old"));
    }

    #[tokio::test]
    async fn should_ingest_new_image_when_submitted() {
        let product_id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored(product_id, None)));
        repo.expect_update().returning(|_| Ok(()));
        let mut ingest = MockIngest::new();
        ingest
            .expect_execute()
            .withf(|p| p.name_hint == "Heirloom Tomatoes")
            .times(1)
            .returning(|_| Ok("http://h/images/new".to_string()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            verifier: Arc::new(verifier_for("u1")),
            image_ingestion: Arc::new(ingest),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(params(product_id, Some("QUJD")))
            .await
            .unwrap();

        assert_eq!(updated.image_url.as_deref(), Some("http://h/images/new"));
    }

    #[tokio::test]
    async fn should_never_reassign_owner() {
        let product_id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored(product_id, None)));
        repo.expect_update()
            .withf(|p| p.farmer_id.as_str() == "u1")
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            verifier: Arc::new(verifier_for("u1")),
            image_ingestion: Arc::new(MockIngest::new()),
            logger: mock_logger(),
        };

        let updated = use_case.execute(params(product_id, None)).await.unwrap();
        assert_eq!(updated.farmer_id, FarmerId::new("u1"));
    }

    #[tokio::test]
    async fn should_forbid_update_by_other_farmer_without_ingesting() {
        let product_id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored(product_id, None)));
        repo.expect_update().never();
        let mut ingest = MockIngest::new();
        ingest.expect_execute().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            verifier: Arc::new(verifier_for("u2")),
            image_ingestion: Arc::new(ingest),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(product_id, Some("QUJD"))).await;
        assert!(matches!(result.unwrap_err(), ProductError::Forbidden));
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            verifier: Arc::new(verifier_for("u1")),
            image_ingestion: Arc::new(MockIngest::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Uuid::new_v4(), None)).await;
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_abort_update_when_image_too_large() {
        let product_id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored(product_id, None)));
        repo.expect_update().never();
        let mut ingest = MockIngest::new();
        ingest
            .expect_execute()
            .returning(|_| Err(ImageError::ImageTooLarge));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            verifier: Arc::new(verifier_for("u1")),
            image_ingestion: Arc::new(ingest),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(product_id, Some("QUJD"))).await;
        assert!(matches!(result.unwrap_err(), ProductError::ImageTooLarge));
    }

    #[tokio::test]
    async fn should_reject_blank_name() {
        let product_id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored(product_id, None)));
        repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            verifier: Arc::new(verifier_for("u1")),
            image_ingestion: Arc::new(MockIngest::new()),
            logger: mock_logger(),
        };

        let mut request = params(product_id, None);
        request.name = " ".to_string();

        let result = use_case.execute(request).await;
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_name_orphaned_image_when_update_write_fails() {
        let product_id = Uuid::new_v4();
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored(product_id, None)));
        repo.expect_update()
            .returning(|_| Err(RepositoryError::Persistence));
        let mut ingest = MockIngest::new();
        ingest
            .expect_execute()
            .returning(|_| Ok("http://h/images/lost".to_string()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            verifier: Arc::new(verifier_for("u1")),
            image_ingestion: Arc::new(ingest),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(product_id, Some("QUJD"))).await;
        assert!(matches!(
            result.unwrap_err(),
            ProductError::ImageOrphaned { .. }
        ));
    }
}

use std::sync::Arc;

use anyhow::Context;

use firebase::verifier::FirebaseTokenVerifier;
use logger::TracingLogger;
use persistence::image::store::ImageStorePostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::image::fetch::FetchImageUseCaseImpl;
use business::application::image::ingest::IngestImageUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_mine::GetMyProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::identity::verifier::IdentityVerifier;
use business::domain::image::store::ImageStore;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::Api as HealthApi;
use crate::api::image::routes::ImageApi;
use crate::api::product::routes::ProductApi;
use crate::config::{catalog_config::CatalogConfig, firebase_config::FirebaseConfig};

/// Outbound adapters the catalog use cases run against.
pub struct Ports {
    pub products: Arc<dyn ProductRepository>,
    pub images: Arc<dyn ImageStore>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub logger: Arc<dyn Logger>,
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub image_api: ImageApi,
}

impl DependencyContainer {
    pub fn new(
        pool: sqlx::PgPool,
        catalog: &CatalogConfig,
        firebase: &FirebaseConfig,
    ) -> anyhow::Result<Self> {
        let health_api = HealthApi::new(pool.clone(), catalog.store_timeout);

        let ports = Ports {
            products: Arc::new(ProductRepositoryPostgres::new(
                pool.clone(),
                catalog.store_timeout,
            )),
            images: Arc::new(ImageStorePostgres::new(pool, catalog.store_timeout)),
            verifier: Arc::new(
                FirebaseTokenVerifier::new(firebase.project_id.clone(), catalog.identity_timeout)
                    .context("building the Firebase certificate client")?,
            ),
            logger: Arc::new(TracingLogger),
        };
        let (product_api, image_api) = wire_catalog(ports, &catalog.public_base_url);

        Ok(Self {
            health_api,
            product_api,
            image_api,
        })
    }
}

/// Builds the catalog use cases over `ports` and wraps them in their APIs.
pub fn wire_catalog(ports: Ports, public_base_url: &str) -> (ProductApi, ImageApi) {
    let Ports {
        products,
        images,
        verifier,
        logger,
    } = ports;

    // Image use cases
    let ingest_use_case = Arc::new(IngestImageUseCaseImpl {
        store: images.clone(),
        logger: logger.clone(),
        public_base_url: public_base_url.trim_end_matches('/').to_string(),
    });
    let fetch_use_case = Arc::new(FetchImageUseCaseImpl {
        store: images,
        logger: logger.clone(),
    });

    // Product use cases
    let create_use_case = Arc::new(CreateProductUseCaseImpl {
        repository: products.clone(),
        verifier: verifier.clone(),
        image_ingestion: ingest_use_case.clone(),
        logger: logger.clone(),
    });
    let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
        repository: products.clone(),
        logger: logger.clone(),
    });
    let get_mine_use_case = Arc::new(GetMyProductsUseCaseImpl {
        repository: products.clone(),
        verifier: verifier.clone(),
        logger: logger.clone(),
    });
    let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
        repository: products.clone(),
        verifier: verifier.clone(),
        logger: logger.clone(),
    });
    let update_use_case = Arc::new(UpdateProductUseCaseImpl {
        repository: products.clone(),
        verifier: verifier.clone(),
        image_ingestion: ingest_use_case,
        logger: logger.clone(),
    });
    let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
        repository: products,
        verifier,
        logger,
    });

    let product_api = ProductApi::new(
        create_use_case,
        get_all_use_case,
        get_mine_use_case,
        get_by_id_use_case,
        update_use_case,
        delete_use_case,
    );
    let image_api = ImageApi::new(fetch_use_case);

    (product_api, image_api)
}

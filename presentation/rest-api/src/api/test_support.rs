//! In-memory ports for exercising the HTTP surface end to end.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use poem::{EndpointExt, Route, endpoint::BoxEndpoint, test::TestClient};
use poem_openapi::OpenApiService;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::identity::errors::IdentityError;
use business::domain::identity::verifier::IdentityVerifier;
use business::domain::image::model::ImageBlob;
use business::domain::image::store::ImageStore;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::FarmerId;

use crate::setup::dependency_injection::{Ports, wire_catalog};

pub const BASE_URL: &str = "http://catalog.test";

pub type CatalogClient = TestClient<BoxEndpoint<'static>>;

/// Accepts `token-<uid>` and authenticates it as `<uid>`.
pub struct FakeVerifier;

#[async_trait]
impl IdentityVerifier for FakeVerifier {
    async fn verify(&self, id_token: &str) -> Result<FarmerId, IdentityError> {
        match id_token.strip_prefix("token-") {
            Some(uid) if !uid.is_empty() => Ok(FarmerId::new(uid)),
            _ => Err(IdentityError::Unauthenticated),
        }
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProducts {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_by_farmer(&self, farmer_id: &FarmerId) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| &p.farmer_id == farmer_id)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(RepositoryError::NotFound)?;
        *row = product.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryImages {
    blobs: Mutex<Vec<ImageBlob>>,
}

impl InMemoryImages {
    pub fn count(&self) -> usize {
        self.blobs.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageStore for InMemoryImages {
    async fn save(&self, blob: &ImageBlob) -> Result<(), RepositoryError> {
        self.blobs.lock().unwrap().push(blob.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ImageBlob, RepositoryError> {
        self.blobs
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

pub struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

pub struct Harness {
    pub products: Arc<InMemoryProducts>,
    pub images: Arc<InMemoryImages>,
    pub client: CatalogClient,
}

pub fn harness() -> Harness {
    let products = Arc::new(InMemoryProducts::default());
    let images = Arc::new(InMemoryImages::default());

    let ports = Ports {
        products: products.clone(),
        images: images.clone(),
        verifier: Arc::new(FakeVerifier),
        logger: Arc::new(SilentLogger),
    };
    let (product_api, image_api) = wire_catalog(ports, BASE_URL);
    let service = OpenApiService::new((product_api, image_api), "Farmer Market API", "test");
    let app = Route::new().nest("/", service).boxed();

    Harness {
        products,
        images,
        client: TestClient::new(app),
    }
}

/// Parses a response body as JSON.
pub async fn json_body(resp: poem::test::TestResponse) -> serde_json::Value {
    let raw = resp.0.into_body().into_string().await.unwrap();
    serde_json::from_str(&raw).unwrap()
}

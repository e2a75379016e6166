use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::identity::verifier::IdentityVerifier;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_mine::{GetMyProductsParams, GetMyProductsUseCase};

pub struct GetMyProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMyProductsUseCase for GetMyProductsUseCaseImpl {
    async fn execute(&self, params: GetMyProductsParams) -> Result<Vec<Product>, ProductError> {
        let farmer_id = self.verifier.verify(&params.id_token).await?;

        self.logger
            .info(&format!("Fetching products of farmer {}", farmer_id));

        let products = self.repository.get_by_farmer(&farmer_id).await?;
        Ok(products)
    }
}

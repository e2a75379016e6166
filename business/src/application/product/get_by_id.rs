use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::identity::verifier::IdentityVerifier;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::shared::value_objects::parse_store_id;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        let farmer_id = self.verifier.verify(&params.id_token).await?;

        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        let id = parse_store_id(&params.id).ok_or(ProductError::NotFound)?;
        let product = self.repository.get_by_id(id).await?;

        if !product.is_owned_by(&farmer_id) {
            self.logger.warn(&format!(
                "Farmer {} denied read of product {}",
                farmer_id, product.id
            ));
            return Err(ProductError::Forbidden);
        }

        Ok(product)
    }
}

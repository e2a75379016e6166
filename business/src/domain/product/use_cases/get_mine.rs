use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetMyProductsParams {
    pub id_token: String,
}

#[async_trait]
pub trait GetMyProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetMyProductsParams) -> Result<Vec<Product>, ProductError>;
}

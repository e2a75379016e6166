use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Header, Path},
    payload::Json,
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_mine::{GetMyProductsParams, GetMyProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    DeleteProductPayload, MessageResponse, ProductMessageResponse, ProductPayload, ProductResponse,
};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_mine_use_case: Arc<dyn GetMyProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_mine_use_case: Arc<dyn GetMyProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_mine_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalog API
///
/// Farmers manage their own listings; anyone may browse the full catalog.
#[OpenApi]
impl ProductApi {
    /// Create a product
    ///
    /// The owner is the subject of `id_token`, never a client-supplied value.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, payload: ProductPayload) -> CreateProductResponse {
        let form = match payload.into_fields() {
            Ok(form) => form,
            Err(json) => return CreateProductResponse::BadRequest(json),
        };
        let params = CreateProductParams {
            id_token: form.id_token,
            farmer_name: form.farmer_name,
            name: form.name,
            price: form.price,
            quantity: form.quantity,
            description: form.description,
            image_base64: form.image_base64,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Ok(Json(ProductMessageResponse {
                message: "✅ Product added successfully".to_string(),
                product: product.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    401 => CreateProductResponse::Unauthorized(json),
                    504 => CreateProductResponse::GatewayTimeout(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Public marketplace listing across every farmer, in creation order.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> ListProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                ListProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    504 => ListProductsResponse::GatewayTimeout(json),
                    _ => ListProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// List my products
    ///
    /// Returns the listings owned by the caller, possibly none.
    #[oai(path = "/my-products", method = "get", tag = "ApiTags::Products")]
    async fn get_my_products(&self, id_token: Header<Option<String>>) -> MyProductsResponse {
        let params = GetMyProductsParams {
            id_token: id_token.0.unwrap_or_default(),
        };

        match self.get_mine_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                MyProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => MyProductsResponse::Unauthorized(json),
                    504 => MyProductsResponse::GatewayTimeout(json),
                    _ => MyProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    ///
    /// Only the owning farmer may read a single listing.
    #[oai(path = "/products/:product_id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(
        &self,
        product_id: Path<String>,
        id_token: Header<Option<String>>,
    ) -> GetProductResponse {
        let params = GetProductByIdParams {
            id: product_id.0,
            id_token: id_token.0.unwrap_or_default(),
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(product) => GetProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => GetProductResponse::Unauthorized(json),
                    403 => GetProductResponse::Forbidden(json),
                    404 => GetProductResponse::NotFound(json),
                    504 => GetProductResponse::GatewayTimeout(json),
                    _ => GetProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces the editable fields. Without `image_base64` the current image is kept.
    #[oai(path = "/products/:product_id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        product_id: Path<String>,
        payload: ProductPayload,
    ) -> UpdateProductResponse {
        let form = match payload.into_fields() {
            Ok(form) => form,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };
        let params = UpdateProductParams {
            id: product_id.0,
            id_token: form.id_token,
            farmer_name: form.farmer_name,
            name: form.name,
            price: form.price,
            quantity: form.quantity,
            description: form.description,
            image_base64: form.image_base64,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(ProductMessageResponse {
                message: "✅ Product updated successfully".to_string(),
                product: product.into(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    401 => UpdateProductResponse::Unauthorized(json),
                    403 => UpdateProductResponse::Forbidden(json),
                    404 => UpdateProductResponse::NotFound(json),
                    504 => UpdateProductResponse::GatewayTimeout(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Removes the listing. Its image stays retrievable.
    #[oai(path = "/products/:product_id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(
        &self,
        product_id: Path<String>,
        payload: DeleteProductPayload,
    ) -> DeleteProductResponse {
        let params = DeleteProductParams {
            id: product_id.0,
            id_token: payload.into_id_token(),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteProductResponse::Ok(Json(MessageResponse {
                message: "✅ Product deleted successfully".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => DeleteProductResponse::Unauthorized(json),
                    403 => DeleteProductResponse::Forbidden(json),
                    404 => DeleteProductResponse::NotFound(json),
                    504 => DeleteProductResponse::GatewayTimeout(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductMessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum MyProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductMessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

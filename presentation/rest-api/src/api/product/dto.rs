use poem_openapi::{ApiRequest, Multipart, Object, payload::Form, payload::Json};
use serde::Deserialize;

use business::domain::product::model::Product;

use crate::api::error::ErrorResponse;

/// Multipart variant of the create and update form.
#[derive(Debug, Multipart)]
pub struct ProductMultipart {
    /// Firebase ID token of the acting farmer
    pub id_token: Option<String>,
    /// Product name (cannot be empty)
    pub name: String,
    /// Unit price (non-negative)
    pub price: f64,
    /// Available quantity
    pub quantity: i32,
    pub description: Option<String>,
    /// Base64 image, optionally prefixed `data:image/png;base64,`
    pub image_base64: Option<String>,
    /// Display name of the farmer
    pub farmer_name: Option<String>,
}

/// Urlencoded variant of the create and update form.
///
/// Numbers arrive as text and are parsed in [`ProductPayload::into_fields`].
#[derive(Debug, Deserialize, Object)]
pub struct ProductUrlEncoded {
    pub id_token: Option<String>,
    pub name: String,
    pub price: String,
    pub quantity: String,
    pub description: Option<String>,
    pub image_base64: Option<String>,
    pub farmer_name: Option<String>,
}

/// Create and update accept either form encoding.
#[derive(Debug, ApiRequest)]
pub enum ProductPayload {
    Multipart(ProductMultipart),
    Form(Form<ProductUrlEncoded>),
}

/// Form fields after decoding, whatever the encoding was.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub id_token: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub image_base64: Option<String>,
    pub farmer_name: Option<String>,
}

impl ProductPayload {
    /// A missing `id_token` becomes empty and is rejected by the verifier.
    pub fn into_fields(self) -> Result<ProductFields, Json<ErrorResponse>> {
        match self {
            ProductPayload::Multipart(form) => Ok(ProductFields {
                id_token: form.id_token.unwrap_or_default(),
                name: form.name,
                price: form.price,
                quantity: form.quantity,
                description: form.description,
                image_base64: form.image_base64,
                farmer_name: form.farmer_name,
            }),
            ProductPayload::Form(Form(form)) => Ok(ProductFields {
                id_token: form.id_token.unwrap_or_default(),
                price: parse_field(&form.price, "price")?,
                quantity: parse_field(&form.quantity, "quantity")?,
                name: form.name,
                description: form.description,
                image_base64: form.image_base64,
                farmer_name: form.farmer_name,
            }),
        }
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, field: &str) -> Result<T, Json<ErrorResponse>> {
    raw.trim().parse().map_err(|_| {
        Json(ErrorResponse::new(
            "ValidationError",
            "form.invalid_number",
            &format!("`{field}` must be a number"),
        ))
    })
}

#[derive(Debug, Multipart)]
pub struct DeleteProductMultipart {
    /// Firebase ID token of the acting farmer
    pub id_token: Option<String>,
}

#[derive(Debug, Deserialize, Object)]
pub struct DeleteProductUrlEncoded {
    pub id_token: Option<String>,
}

#[derive(Debug, ApiRequest)]
pub enum DeleteProductPayload {
    Multipart(DeleteProductMultipart),
    Form(Form<DeleteProductUrlEncoded>),
}

impl DeleteProductPayload {
    pub fn into_id_token(self) -> String {
        match self {
            DeleteProductPayload::Multipart(form) => form.id_token,
            DeleteProductPayload::Form(Form(form)) => form.id_token,
        }
        .unwrap_or_default()
    }
}

/// Serialized listing. Absent optional fields are rendered as `null`.
#[derive(Debug, Clone, PartialEq, Object)]
pub struct ProductResponse {
    pub id: String,
    pub farmer_id: String,
    pub farmer_name: Option<String>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            farmer_id: product.farmer_id.as_str().to_string(),
            farmer_name: product.farmer_name,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            description: product.description,
            image_url: product.image_url,
        }
    }
}

#[derive(Debug, Object)]
pub struct ProductMessageResponse {
    pub message: String,
    pub product: ProductResponse,
}

#[derive(Debug, Object)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urlencoded(price: &str, quantity: &str) -> ProductPayload {
        ProductPayload::Form(Form(ProductUrlEncoded {
            id_token: None,
            name: "Tomatoes".to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
            description: None,
            image_base64: None,
            farmer_name: None,
        }))
    }

    #[test]
    fn should_parse_numbers_from_urlencoded_fields() {
        let fields = urlencoded(" 2.5 ", "10").into_fields().unwrap();

        assert_eq!(fields.price, 2.5);
        assert_eq!(fields.quantity, 10);
        assert_eq!(fields.id_token, "");
    }

    #[test]
    fn should_reject_non_numeric_urlencoded_quantity() {
        let err = urlencoded("2.5", "ten").into_fields().unwrap_err();

        assert_eq!(err.0.name, "ValidationError");
        assert_eq!(err.0.message, "form.invalid_number");
        assert!(err.0.detail.contains("quantity"));
    }

    #[test]
    fn should_default_missing_delete_token_to_empty() {
        let payload =
            DeleteProductPayload::Form(Form(DeleteProductUrlEncoded { id_token: None }));
        assert_eq!(payload.into_id_token(), "");
    }
}

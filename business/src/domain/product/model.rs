use uuid::Uuid;

use super::errors::ProductError;
use crate::domain::shared::value_objects::FarmerId;

/// A listing published by a farmer.
///
/// `id` and `farmer_id` are fixed at creation; everything else is replaced
/// wholesale by an update, except `image_url` which only changes when a new
/// image is ingested.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub farmer_id: FarmerId,
    pub farmer_name: Option<String>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

pub struct NewProductProps {
    pub farmer_id: FarmerId,
    pub farmer_name: Option<String>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Client-editable fields of a listing.
pub struct ProductChanges {
    pub farmer_name: Option<String>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
}

/// Checks the fields a client controls, before anything is written.
pub fn validate_listing(name: &str, price: f64) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice);
    }
    Ok(())
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_listing(&props.name, props.price)?;

        Ok(Self {
            id: Uuid::new_v4(),
            farmer_id: props.farmer_id,
            farmer_name: props.farmer_name,
            name: props.name,
            price: props.price,
            quantity: props.quantity,
            description: props.description,
            image_url: props.image_url,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        farmer_id: FarmerId,
        farmer_name: Option<String>,
        name: String,
        price: f64,
        quantity: i32,
        description: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            farmer_id,
            farmer_name,
            name,
            price,
            quantity,
            description,
            image_url,
        }
    }

    pub fn is_owned_by(&self, farmer_id: &FarmerId) -> bool {
        &self.farmer_id == farmer_id
    }

    /// Applies an update. `new_image_url` of `None` keeps the current image.
    pub fn revise(self, changes: ProductChanges, new_image_url: Option<String>) -> Result<Self, ProductError> {
        validate_listing(&changes.name, changes.price)?;

        Ok(Self {
            id: self.id,
            farmer_id: self.farmer_id,
            farmer_name: changes.farmer_name,
            name: changes.name,
            price: changes.price,
            quantity: changes.quantity,
            description: changes.description,
            image_url: new_image_url.or(self.image_url),
        })
    }
}

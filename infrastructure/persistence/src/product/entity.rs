use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::shared::value_objects::FarmerId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub farmer_id: String,
    pub farmer_name: Option<String>,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            FarmerId::new(self.farmer_id),
            self.farmer_name,
            self.name,
            self.price,
            self.quantity,
            self.description,
            self.image_url,
        )
    }
}

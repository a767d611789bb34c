use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub uom: String,
    pub hazard_class: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.sku,
            self.name,
            self.uom,
            self.hazard_class,
            self.created_at,
            self.updated_at,
        )
    }
}

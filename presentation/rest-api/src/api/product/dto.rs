use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Stock keeping unit, unique across the catalog
    pub sku: String,
    pub name: String,
    /// Unit of measure, "EA" when omitted
    pub uom: Option<String>,
    pub hazard_class: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub uom: String,
    pub hazard_class: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku,
            name: product.name,
            uom: product.uom,
            hazard_class: product.hazard_class,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

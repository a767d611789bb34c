use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::supplier::model::Supplier;

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SupplierRequest {
    /// Supplier name (cannot be empty)
    pub name: String,
    /// Country code or name
    #[oai(default)]
    pub country: String,
    /// Inactive suppliers never take part in best-price selection
    #[oai(default = "default_active")]
    pub active: bool,
    /// Wins price ties against non-preferred suppliers
    #[oai(default)]
    pub preferred: bool,
    /// Delivery lead time in days (non-negative)
    pub lead_time_days: i32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SupplierResponse {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub active: bool,
    pub preferred: bool,
    pub lead_time_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            country: supplier.country,
            active: supplier.active,
            preferred: supplier.preferred,
            lead_time_days: supplier.lead_time_days,
            created_at: supplier.created_at,
            updated_at: supplier.updated_at,
        }
    }
}

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::supplier::model::Supplier;

#[derive(Debug, FromRow)]
pub struct SupplierEntity {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub active: bool,
    pub preferred: bool,
    pub lead_time_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupplierEntity {
    pub fn into_domain(self) -> Supplier {
        Supplier::from_repository(
            self.id,
            self.name,
            self.country,
            self.active,
            self.preferred,
            self.lead_time_days,
            self.created_at,
            self.updated_at,
        )
    }
}

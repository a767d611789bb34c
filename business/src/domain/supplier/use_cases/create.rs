use async_trait::async_trait;

use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;

pub struct CreateSupplierParams {
    pub name: String,
    pub country: String,
    pub active: bool,
    pub preferred: bool,
    pub lead_time_days: i32,
}

#[async_trait]
pub trait CreateSupplierUseCase: Send + Sync {
    async fn execute(&self, params: CreateSupplierParams) -> Result<Supplier, SupplierError>;
}

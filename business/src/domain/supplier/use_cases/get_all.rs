use async_trait::async_trait;

use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;

#[async_trait]
pub trait GetAllSuppliersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Supplier>, SupplierError>;
}

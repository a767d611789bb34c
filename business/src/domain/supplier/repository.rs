use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewSupplier, Supplier};

#[async_trait]
pub trait SupplierRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<Supplier, RepositoryError>;
    /// Persists a new supplier and returns it with its store-assigned id.
    async fn create(&self, supplier: &NewSupplier) -> Result<Supplier, RepositoryError>;
    async fn update(&self, supplier: &Supplier) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

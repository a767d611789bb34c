use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::{Supplier, SupplierProps};
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::update::{UpdateSupplierParams, UpdateSupplierUseCase};

pub struct UpdateSupplierUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateSupplierUseCase for UpdateSupplierUseCaseImpl {
    async fn execute(&self, params: UpdateSupplierParams) -> Result<Supplier, SupplierError> {
        self.logger
            .info(&format!("Updating supplier: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SupplierError::NotFound,
                other => SupplierError::Repository(other),
            })?;

        let updated = existing.with_changes(SupplierProps {
            name: params.name,
            country: params.country,
            active: params.active,
            preferred: params.preferred,
            lead_time_days: params.lead_time_days,
        })?;

        self.repository.update(&updated).await?;

        self.logger
            .info(&format!("Supplier updated: {}", updated.id));
        Ok(updated)
    }
}

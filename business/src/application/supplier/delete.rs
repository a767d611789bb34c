use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::delete::{DeleteSupplierParams, DeleteSupplierUseCase};

pub struct DeleteSupplierUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteSupplierUseCase for DeleteSupplierUseCaseImpl {
    async fn execute(&self, params: DeleteSupplierParams) -> Result<(), SupplierError> {
        self.logger
            .info(&format!("Deleting supplier: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SupplierError::NotFound,
                other => SupplierError::Repository(other),
            })?;

        // Price entries cascade with their supplier in the store.
        self.repository.delete(params.id).await?;

        self.logger.info(&format!("Supplier deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::supplier::model::{NewSupplier, Supplier};
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub SupplierRepo {}

        #[async_trait]
        impl SupplierRepository for SupplierRepo {
            async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError>;
            async fn get_by_id(&self, id: i32) -> Result<Supplier, RepositoryError>;
            async fn create(&self, supplier: &NewSupplier) -> Result<Supplier, RepositoryError>;
            async fn update(&self, supplier: &Supplier) -> Result<(), RepositoryError>;
            async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_supplier_when_exists() {
        let now = Utc::now();
        let mut mock_repo = MockSupplierRepo::new();
        mock_repo.expect_get_by_id().returning(move |id| {
            Ok(Supplier::from_repository(id, "Acme".to_string(), "DE".to_string(), true, false, 7, now, now))
        });
        mock_repo
            .expect_delete()
            .withf(|id| *id == 4)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteSupplierUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteSupplierParams { id: 4 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_supplier() {
        let mut mock_repo = MockSupplierRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteSupplierUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteSupplierParams { id: 4 }).await;

        assert!(matches!(result, Err(SupplierError::NotFound)));
    }
}

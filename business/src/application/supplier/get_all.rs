use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::Supplier;
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::get_all::GetAllSuppliersUseCase;

pub struct GetAllSuppliersUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllSuppliersUseCase for GetAllSuppliersUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Supplier>, SupplierError> {
        self.logger.info("Getting all suppliers");

        let suppliers = self.repository.get_all().await?;

        self.logger
            .info(&format!("Found {} suppliers", suppliers.len()));
        Ok(suppliers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::supplier::model::NewSupplier;
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
    async fn should_return_all_suppliers() {
        let now = Utc::now();
        let mut mock_repo = MockSupplierRepo::new();
        mock_repo.expect_get_all().returning(move || {
            Ok(vec![
                Supplier::from_repository(1, "Acme".to_string(), "DE".to_string(), true, false, 7, now, now),
                Supplier::from_repository(2, "Lusa".to_string(), "PT".to_string(), false, true, 3, now, now),
            ])
        });

        let use_case = GetAllSuppliersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[1].name, "Lusa");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_suppliers() {
        let mut mock_repo = MockSupplierRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllSuppliersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockSupplierRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllSuppliersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(SupplierError::Repository(_))));
    }
}

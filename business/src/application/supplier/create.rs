use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supplier::errors::SupplierError;
use crate::domain::supplier::model::{NewSupplier, Supplier, SupplierProps};
use crate::domain::supplier::repository::SupplierRepository;
use crate::domain::supplier::use_cases::create::{CreateSupplierParams, CreateSupplierUseCase};

pub struct CreateSupplierUseCaseImpl {
    pub repository: Arc<dyn SupplierRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateSupplierUseCase for CreateSupplierUseCaseImpl {
    async fn execute(&self, params: CreateSupplierParams) -> Result<Supplier, SupplierError> {
        self.logger
            .info(&format!("Creating supplier: {}", params.name));

        let supplier = NewSupplier::new(SupplierProps {
            name: params.name,
            country: params.country,
            active: params.active,
            preferred: params.preferred,
            lead_time_days: params.lead_time_days,
        })?;

        let created = self.repository.create(&supplier).await?;

        self.logger
            .info(&format!("Supplier created with id: {}", created.id));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
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

    fn params(name: &str, lead_time_days: i32) -> CreateSupplierParams {
        CreateSupplierParams {
            name: name.to_string(),
            country: "PT".to_string(),
            active: true,
            preferred: true,
            lead_time_days,
        }
    }

    #[tokio::test]
    async fn should_create_supplier_when_params_valid() {
        let mut mock_repo = MockSupplierRepo::new();
        mock_repo
            .expect_create()
            .withf(|s| s.name == "Lusa Foods" && s.preferred && s.lead_time_days == 5)
            .times(1)
            .returning(|s| Ok(Supplier::from_new(42, s.clone())));

        let use_case = CreateSupplierUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(" Lusa Foods ", 5)).await.unwrap();

        assert_eq!(result.id, 42);
        assert_eq!(result.name, "Lusa Foods");
        assert_eq!(result.country, "PT");
    }

    #[tokio::test]
    async fn should_fail_when_name_is_blank() {
        let mut mock_repo = MockSupplierRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateSupplierUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("  ", 5)).await;

        assert!(matches!(result, Err(SupplierError::NameEmpty)));
    }

    #[tokio::test]
    async fn should_fail_when_lead_time_negative() {
        let mut mock_repo = MockSupplierRepo::new();
        mock_repo.expect_create().never();

        let use_case = CreateSupplierUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Lusa Foods", -2)).await;

        assert!(matches!(result, Err(SupplierError::NegativeLeadTime)));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockSupplierRepo::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateSupplierUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Lusa Foods", 5)).await;

        assert!(matches!(
            result,
            Err(SupplierError::Repository(RepositoryError::DatabaseError))
        ));
    }
}

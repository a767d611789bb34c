use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_list::errors::PriceListError;
use crate::domain::price_list::model::{Page, PriceEntry, PriceFilter, PriceFilterProps};
use crate::domain::price_list::repository::PriceListRepository;
use crate::domain::price_list::use_cases::list::{ListPriceEntriesParams, ListPriceEntriesUseCase};

pub struct ListPriceEntriesUseCaseImpl {
    pub repository: Arc<dyn PriceListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListPriceEntriesUseCase for ListPriceEntriesUseCaseImpl {
    async fn execute(
        &self,
        params: ListPriceEntriesParams,
    ) -> Result<Page<PriceEntry>, PriceListError> {
        let filter = PriceFilter::new(PriceFilterProps {
            sku: params.sku,
            valid_on: params.valid_on,
            currency: params.currency,
            supplier_id: params.supplier_id,
            page: params.page,
            page_size: params.page_size,
        })?;

        self.logger.info(&format!(
            "Listing price entries (page {} of size {})",
            filter.page, filter.page_size
        ));

        let page = self.repository.list(&filter).await?;

        self.logger.debug(&format!(
            "Returning {} of {} matching entries",
            page.items.len(),
            page.total
        ));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::price_list::model::{DEFAULT_PAGE_SIZE, NewPriceEntry};
    use crate::domain::pricing::model::Candidate;
    use crate::domain::shared::value_objects::ValidityWindow;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use mockall::mock;

    mock! {
        pub PriceListRepo {}

        #[async_trait]
        impl PriceListRepository for PriceListRepo {
            async fn get_candidates(&self, sku: &str, quantity: i32, date: NaiveDate) -> Result<Vec<Candidate>, RepositoryError>;
            async fn has_overlap(&self, supplier_id: i32, sku: &str, window: ValidityWindow) -> Result<bool, RepositoryError>;
            async fn add_batch(&self, entries: &[NewPriceEntry]) -> Result<(), RepositoryError>;
            async fn list(&self, filter: &PriceFilter) -> Result<Page<PriceEntry>, RepositoryError>;
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

    fn params() -> ListPriceEntriesParams {
        ListPriceEntriesParams {
            sku: None,
            valid_on: None,
            currency: None,
            supplier_id: None,
            page: None,
            page_size: None,
        }
    }

    #[tokio::test]
    async fn should_pass_filter_with_default_paging_to_repository() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_list()
            .withf(|f| {
                f.sku.as_deref() == Some("ABC123")
                    && f.page == 1
                    && f.page_size == DEFAULT_PAGE_SIZE
            })
            .times(1)
            .returning(|f| {
                let day = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
                Ok(Page {
                    page: f.page,
                    page_size: f.page_size,
                    total: 1,
                    items: vec![PriceEntry::from_repository(
                        1,
                        1,
                        "ABC123".to_string(),
                        ValidityWindow::from_repository(day, day),
                        "EUR".to_string(),
                        BigDecimal::from(3),
                        1,
                    )],
                })
            });

        let use_case = ListPriceEntriesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(ListPriceEntriesParams {
                sku: Some("ABC123".to_string()),
                ..params()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].sku, "ABC123");
    }

    #[tokio::test]
    async fn should_reject_invalid_paging_before_querying() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_list().never();

        let use_case = ListPriceEntriesUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListPriceEntriesParams {
                page: Some(0),
                ..params()
            })
            .await;

        assert!(matches!(result, Err(PriceListError::InvalidPage)));
    }
}

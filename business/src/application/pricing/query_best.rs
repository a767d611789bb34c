use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_list::repository::PriceListRepository;
use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::{BestPriceQuery, BestPriceResult};
use crate::domain::pricing::selector::BestPriceSelector;
use crate::domain::pricing::services::RateProvider;
use crate::domain::pricing::use_cases::query_best::QueryBestPriceUseCase;

pub struct QueryBestPriceUseCaseImpl {
    pub repository: Arc<dyn PriceListRepository>,
    pub rates: Arc<dyn RateProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl QueryBestPriceUseCase for QueryBestPriceUseCaseImpl {
    async fn execute(
        &self,
        query: BestPriceQuery,
    ) -> Result<Option<BestPriceResult>, PricingError> {
        if query.sku.trim().is_empty() {
            return Err(PricingError::SkuEmpty);
        }
        if query.quantity <= 0 {
            return Err(PricingError::InvalidQuantity);
        }

        self.logger.info(&format!(
            "Querying best price: sku={} qty={} currency={} date={}",
            query.sku, query.quantity, query.currency, query.date
        ));

        let candidates = self
            .repository
            .get_candidates(&query.sku, query.quantity, query.date)
            .await?;
        self.logger
            .debug(&format!("Found {} candidate offers", candidates.len()));

        let selector = BestPriceSelector::new(self.rates.clone());
        let best = selector.select_best(&query, candidates).inspect_err(|e| {
            if let PricingError::UnknownCurrency(code) = e {
                self.logger
                    .warn(&format!("Best price query hit unknown currency: {}", code));
            }
        })?;

        match &best {
            Some(result) => self.logger.info(&format!(
                "Best price for {}: supplier {} at {} {}",
                result.sku, result.supplier_id, result.unit_price, result.currency
            )),
            None => self
                .logger
                .info(&format!("No eligible offer for {}", query.sku)),
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::price_list::model::{NewPriceEntry, Page, PriceEntry, PriceFilter};
    use crate::domain::pricing::model::{Candidate, SupplierOffer};
    use crate::domain::pricing::rate_converter::{RateConverter, RateTable};
    use crate::domain::shared::value_objects::ValidityWindow;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;
    use mockall::mock;
    use std::str::FromStr;

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

    fn rates() -> Arc<dyn RateProvider> {
        let table = RateTable::parse("EUR", "EUR=1,USD=0.92,GBP=1.17").unwrap();
        Arc::new(RateConverter::new(table))
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn query(quantity: i32, currency: &str) -> BestPriceQuery {
        BestPriceQuery {
            sku: "ABC123".to_string(),
            quantity,
            currency: currency.to_string(),
            date: date(2025, 9, 1),
        }
    }

    fn candidate(
        id: i32,
        supplier_id: i32,
        currency: &str,
        price: &str,
        min_qty: i32,
        preferred: bool,
        lead_time_days: i32,
    ) -> Candidate {
        Candidate {
            entry: PriceEntry::from_repository(
                id,
                supplier_id,
                "ABC123".to_string(),
                ValidityWindow::from_repository(date(2025, 7, 1), date(2025, 12, 31)),
                currency.to_string(),
                BigDecimal::from_str(price).unwrap(),
                min_qty,
            ),
            supplier: SupplierOffer {
                supplier_id,
                preferred,
                lead_time_days,
                active: true,
            },
        }
    }

    #[tokio::test]
    async fn should_pick_lowest_converted_unit_price_then_tie_breakers() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_get_candidates()
            .withf(|sku, quantity, day| {
                sku == "ABC123" && *quantity == 120 && *day == date(2025, 9, 1)
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(vec![
                    candidate(11, 1, "EUR", "9.50", 100, false, 7),
                    candidate(22, 2, "USD", "10.00", 50, true, 5),
                    candidate(33, 3, "EUR", "9.50", 100, true, 10),
                ])
            });

        let use_case = QueryBestPriceUseCaseImpl {
            repository: Arc::new(repo),
            rates: rates(),
            logger: mock_logger(),
        };

        let result = use_case.execute(query(120, "EUR")).await.unwrap().unwrap();

        assert_eq!(result.supplier_id, 2);
        assert_eq!(result.unit_price, BigDecimal::from_str("9.20").unwrap());
        assert_eq!(result.total_price, BigDecimal::from_str("1104.00").unwrap());
    }

    #[tokio::test]
    async fn should_return_none_when_store_has_no_candidates() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_get_candidates().returning(|_, _, _| Ok(vec![]));

        let use_case = QueryBestPriceUseCaseImpl {
            repository: Arc::new(repo),
            rates: rates(),
            logger: mock_logger(),
        };

        let result = use_case.execute(query(10, "EUR")).await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn should_propagate_unknown_currency() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_get_candidates()
            .returning(|_, _, _| Ok(vec![candidate(1, 1, "EUR", "1.00", 1, false, 1)]));

        let use_case = QueryBestPriceUseCaseImpl {
            repository: Arc::new(repo),
            rates: rates(),
            logger: mock_logger(),
        };

        let result = use_case.execute(query(10, "JPY")).await;

        assert!(matches!(result, Err(PricingError::UnknownCurrency(code)) if code == "JPY"));
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity_without_querying_store() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_get_candidates().never();

        let use_case = QueryBestPriceUseCaseImpl {
            repository: Arc::new(repo),
            rates: rates(),
            logger: mock_logger(),
        };

        let result = use_case.execute(query(0, "EUR")).await;

        assert!(matches!(result, Err(PricingError::InvalidQuantity)));
    }

    #[tokio::test]
    async fn should_reject_blank_sku() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_get_candidates().never();

        let use_case = QueryBestPriceUseCaseImpl {
            repository: Arc::new(repo),
            rates: rates(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(BestPriceQuery {
                sku: " ".to_string(),
                ..query(1, "EUR")
            })
            .await;

        assert!(matches!(result, Err(PricingError::SkuEmpty)));
    }

    #[tokio::test]
    async fn should_map_store_failure_to_repository_error() {
        let mut repo = MockPriceListRepo::new();
        repo.expect_get_candidates()
            .returning(|_, _, _| Err(RepositoryError::DatabaseError));

        let use_case = QueryBestPriceUseCaseImpl {
            repository: Arc::new(repo),
            rates: rates(),
            logger: mock_logger(),
        };

        let result = use_case.execute(query(1, "EUR")).await;

        assert!(matches!(
            result,
            Err(PricingError::Repository(RepositoryError::DatabaseError))
        ));
    }
}

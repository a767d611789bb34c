use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::price_list::errors::PriceListError;
use crate::domain::price_list::ingestion::{IngestionOutcome, IngestionValidator};
use crate::domain::price_list::model::UploadResult;
use crate::domain::price_list::repository::PriceListRepository;
use crate::domain::price_list::use_cases::upload::{UploadPriceListParams, UploadPriceListUseCase};

pub struct UploadPriceListUseCaseImpl {
    pub repository: Arc<dyn PriceListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UploadPriceListUseCase for UploadPriceListUseCaseImpl {
    async fn execute(&self, params: UploadPriceListParams) -> Result<UploadResult, PriceListError> {
        self.logger.info(&format!(
            "Validating price list upload ({} bytes)",
            params.csv.len()
        ));

        let validator = IngestionValidator::new(self.repository.as_ref());
        let entries = match validator.validate(&params.csv).await? {
            IngestionOutcome::Accepted(entries) => entries,
            IngestionOutcome::Rejected(rejection) => {
                self.logger.warn(&format!(
                    "Price list rejected: {} ({})",
                    rejection.detail(),
                    rejection.title()
                ));
                return Ok(UploadResult::Rejected(rejection));
            }
        };

        if entries.is_empty() {
            self.logger.info("Price list contained no data rows");
            return Ok(UploadResult::Accepted { rows: 0 });
        }

        self.repository
            .add_batch(&entries)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Failed to store price list batch: {}", e))
            })?;

        self.logger
            .info(&format!("Price list accepted: {} rows stored", entries.len()));
        Ok(UploadResult::Accepted {
            rows: entries.len(),
        })
    }
}

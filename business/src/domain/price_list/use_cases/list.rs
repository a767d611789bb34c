use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::price_list::errors::PriceListError;
use crate::domain::price_list::model::{Page, PriceEntry};

pub struct ListPriceEntriesParams {
    pub sku: Option<String>,
    pub valid_on: Option<NaiveDate>,
    pub currency: Option<String>,
    pub supplier_id: Option<i32>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[async_trait]
pub trait ListPriceEntriesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListPriceEntriesParams,
    ) -> Result<Page<PriceEntry>, PriceListError>;
}

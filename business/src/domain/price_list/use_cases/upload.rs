use async_trait::async_trait;

use crate::domain::price_list::errors::PriceListError;
use crate::domain::price_list::model::UploadResult;

pub struct UploadPriceListParams {
    /// Raw CSV text, header line first.
    pub csv: String,
}

#[async_trait]
pub trait UploadPriceListUseCase: Send + Sync {
    async fn execute(&self, params: UploadPriceListParams) -> Result<UploadResult, PriceListError>;
}

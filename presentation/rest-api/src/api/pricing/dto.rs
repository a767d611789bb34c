use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::pricing::model::BestPriceResult;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BestPriceResponse {
    pub sku: String,
    pub quantity: i32,
    /// Currency both prices are expressed in
    pub currency: String,
    pub date: NaiveDate,
    pub supplier_id: i32,
    /// Converted unit price, two decimals
    pub unit_price: String,
    /// Unit price times quantity, two decimals
    pub total_price: String,
    /// Which ranking rules decided the winner
    pub reason: String,
}

impl From<BestPriceResult> for BestPriceResponse {
    fn from(result: BestPriceResult) -> Self {
        Self {
            sku: result.sku,
            quantity: result.quantity,
            currency: result.currency,
            date: result.date,
            supplier_id: result.supplier_id,
            unit_price: result.unit_price.to_string(),
            total_price: result.total_price.to_string(),
            reason: result.reason,
        }
    }
}

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::domain::price_list::model::PriceEntry;

/// Supplier attributes that take part in best-price ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierOffer {
    pub supplier_id: i32,
    pub preferred: bool,
    pub lead_time_days: i32,
    pub active: bool,
}

/// A price entry paired with the supplier offering it.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub entry: PriceEntry,
    pub supplier: SupplierOffer,
}

/// The full tuple a best-price lookup is keyed by.
#[derive(Debug, Clone, PartialEq)]
pub struct BestPriceQuery {
    pub sku: String,
    pub quantity: i32,
    pub currency: String,
    pub date: NaiveDate,
}

impl BestPriceQuery {
    pub fn cache_key(&self) -> String {
        format!(
            "best:{}:{}:{}:{}",
            self.sku,
            self.quantity,
            self.currency,
            self.date.format("%Y%m%d")
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BestPriceResult {
    pub sku: String,
    pub quantity: i32,
    pub currency: String,
    pub date: NaiveDate,
    pub supplier_id: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
    pub reason: String,
}

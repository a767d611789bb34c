use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use sqlx::FromRow;

use business::domain::price_list::model::PriceEntry;
use business::domain::pricing::model::{Candidate, SupplierOffer};
use business::domain::shared::value_objects::ValidityWindow;

#[derive(Debug, FromRow)]
pub struct PriceEntryEntity {
    pub id: i32,
    pub supplier_id: i32,
    pub sku: String,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub currency: String,
    pub price_per_uom: BigDecimal,
    pub min_qty: i32,
}

impl PriceEntryEntity {
    pub fn into_domain(self) -> PriceEntry {
        PriceEntry::from_repository(
            self.id,
            self.supplier_id,
            self.sku,
            ValidityWindow::from_repository(self.valid_from, self.valid_to),
            self.currency,
            self.price_per_uom,
            self.min_qty,
        )
    }
}

/// A price entry row joined with the ranking columns of its supplier.
#[derive(Debug, FromRow)]
pub struct CandidateEntity {
    #[sqlx(flatten)]
    pub entry: PriceEntryEntity,
    pub preferred: bool,
    pub lead_time_days: i32,
    pub active: bool,
}

impl CandidateEntity {
    pub fn into_domain(self) -> Candidate {
        let supplier = SupplierOffer {
            supplier_id: self.entry.supplier_id,
            preferred: self.preferred,
            lead_time_days: self.lead_time_days,
            active: self.active,
        };
        Candidate {
            entry: self.entry.into_domain(),
            supplier,
        }
    }
}

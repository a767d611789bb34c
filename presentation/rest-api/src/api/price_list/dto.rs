use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};

use business::domain::price_list::ingestion::RowRejection;
use business::domain::price_list::model::{Page, PriceEntry};

#[derive(Debug, Multipart)]
pub struct UploadPriceListForm {
    /// CSV with header `SupplierId,Sku,ValidFrom,ValidTo,Currency,PricePerUom,MinQty`
    pub file: Option<Upload>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UploadAcceptedResponse {
    pub accepted: bool,
    /// Number of data rows stored
    pub rows: u64,
}

/// Problem report for a refused upload.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProblemResponse {
    pub title: String,
    pub detail: String,
}

impl From<RowRejection> for ProblemResponse {
    fn from(rejection: RowRejection) -> Self {
        Self {
            title: rejection.title().to_string(),
            detail: rejection.detail(),
        }
    }
}

/// Drops the store's padding zeros but keeps cents, so `9.500000` reads `9.50`.
fn price_text(value: &BigDecimal) -> String {
    let trimmed = value.normalized();
    let (_, scale) = trimmed.as_bigint_and_exponent();
    if scale < 2 {
        trimmed.with_scale(2).to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PriceEntryResponse {
    pub id: i32,
    pub supplier_id: i32,
    pub sku: String,
    pub valid_from: NaiveDate,
    pub valid_to: NaiveDate,
    pub currency: String,
    /// Decimal string with at least two fraction digits
    pub price_per_uom: String,
    pub min_qty: i32,
}

impl From<PriceEntry> for PriceEntryResponse {
    fn from(entry: PriceEntry) -> Self {
        Self {
            id: entry.id,
            supplier_id: entry.supplier_id,
            sku: entry.sku,
            valid_from: entry.window.from(),
            valid_to: entry.window.to(),
            currency: entry.currency,
            price_per_uom: price_text(&entry.price_per_unit),
            min_qty: entry.min_qty,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PriceEntryPageResponse {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub items: Vec<PriceEntryResponse>,
}

impl From<Page<PriceEntry>> for PriceEntryPageResponse {
    fn from(page: Page<PriceEntry>) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            total: page.total,
            items: page.items.into_iter().map(PriceEntryResponse::from).collect(),
        }
    }
}

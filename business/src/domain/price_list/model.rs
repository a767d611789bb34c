use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use super::errors::PriceListError;
use super::ingestion::RowRejection;
use crate::domain::shared::value_objects::ValidityWindow;

/// A validated price list entry that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPriceEntry {
    pub supplier_id: i32,
    pub sku: String,
    pub window: ValidityWindow,
    pub currency: String,
    pub price_per_unit: BigDecimal,
    pub min_qty: i32,
}

impl NewPriceEntry {
    /// True when both entries price the same SKU for the same supplier on at least one common day.
    pub fn conflicts_with(&self, other: &NewPriceEntry) -> bool {
        self.supplier_id == other.supplier_id
            && self.sku == other.sku
            && self.window.overlaps(&other.window)
    }
}

/// A price list entry as stored, with its store-assigned identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEntry {
    pub id: i32,
    pub supplier_id: i32,
    pub sku: String,
    pub window: ValidityWindow,
    pub currency: String,
    pub price_per_unit: BigDecimal,
    pub min_qty: i32,
}

impl PriceEntry {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i32,
        supplier_id: i32,
        sku: String,
        window: ValidityWindow,
        currency: String,
        price_per_unit: BigDecimal,
        min_qty: i32,
    ) -> Self {
        Self {
            id,
            supplier_id,
            sku,
            window,
            currency,
            price_per_unit,
            min_qty,
        }
    }

    pub fn from_new(id: i32, entry: NewPriceEntry) -> Self {
        Self::from_repository(
            id,
            entry.supplier_id,
            entry.sku,
            entry.window,
            entry.currency,
            entry.price_per_unit,
            entry.min_qty,
        )
    }
}

/// Outcome of a price list upload.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadResult {
    /// Every row passed and the batch was stored.
    Accepted { rows: usize },
    /// The first failing row; nothing was stored.
    Rejected(RowRejection),
}

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 200;

/// Criteria for browsing stored price list entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFilter {
    pub sku: Option<String>,
    pub valid_on: Option<NaiveDate>,
    pub currency: Option<String>,
    pub supplier_id: Option<i32>,
    pub page: u32,
    pub page_size: u32,
}

pub struct PriceFilterProps {
    pub sku: Option<String>,
    pub valid_on: Option<NaiveDate>,
    pub currency: Option<String>,
    pub supplier_id: Option<i32>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl PriceFilter {
    pub fn new(props: PriceFilterProps) -> Result<Self, PriceListError> {
        let page = props.page.unwrap_or(1);
        let page_size = props.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if page == 0 || page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(PriceListError::InvalidPage);
        }

        Ok(Self {
            sku: non_blank(props.sku),
            valid_on: props.valid_on,
            currency: non_blank(props.currency),
            supplier_id: props.supplier_id,
            page,
            page_size,
        })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub fn matches(&self, entry: &PriceEntry) -> bool {
        self.sku.as_ref().is_none_or(|sku| &entry.sku == sku)
            && self.valid_on.is_none_or(|d| entry.window.contains(d))
            && self
                .currency
                .as_ref()
                .is_none_or(|c| &entry.currency == c)
            && self.supplier_id.is_none_or(|id| entry.supplier_id == id)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub items: Vec<T>,
}

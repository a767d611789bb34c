use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::errors::RepositoryError;
use crate::domain::pricing::model::Candidate;
use crate::domain::shared::value_objects::ValidityWindow;

use super::model::{NewPriceEntry, Page, PriceEntry, PriceFilter};

#[async_trait]
pub trait PriceListRepository: Send + Sync {
    /// Entries for `sku` valid on `date` with `min_qty <= quantity`, joined to active suppliers.
    /// No ordering is guaranteed.
    async fn get_candidates(
        &self,
        sku: &str,
        quantity: i32,
        date: NaiveDate,
    ) -> Result<Vec<Candidate>, RepositoryError>;

    /// True when a stored entry for the same supplier and SKU overlaps `window`.
    async fn has_overlap(
        &self,
        supplier_id: i32,
        sku: &str,
        window: ValidityWindow,
    ) -> Result<bool, RepositoryError>;

    /// Stores the whole batch or nothing.
    async fn add_batch(&self, entries: &[NewPriceEntry]) -> Result<(), RepositoryError>;

    async fn list(&self, filter: &PriceFilter) -> Result<Page<PriceEntry>, RepositoryError>;
}

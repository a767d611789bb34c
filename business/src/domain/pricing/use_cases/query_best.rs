use async_trait::async_trait;

use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::{BestPriceQuery, BestPriceResult};

/// Best-price lookup. `Ok(None)` means no supplier can serve the query.
///
/// Implemented both by the direct computation and by its caching decorator,
/// so callers pick the composition at wiring time.
#[async_trait]
pub trait QueryBestPriceUseCase: Send + Sync {
    async fn execute(&self, query: BestPriceQuery)
    -> Result<Option<BestPriceResult>, PricingError>;
}

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::model::{BestPriceQuery, BestPriceResult};
use crate::domain::pricing::use_cases::query_best::QueryBestPriceUseCase;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(120);

struct CachedResult {
    value: Option<BestPriceResult>,
    stored_at: Instant,
}

/// Memoizes best-price answers per query tuple for a fixed time window.
///
/// "No eligible supplier" is remembered like any other answer. Errors are never stored.
/// Two concurrent misses on the same key may both reach the wrapped lookup; the later
/// write wins.
pub struct CachedQueryBestPriceUseCase {
    inner: Arc<dyn QueryBestPriceUseCase>,
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedResult>>,
    logger: Arc<dyn Logger>,
}

impl CachedQueryBestPriceUseCase {
    pub fn new(
        inner: Arc<dyn QueryBestPriceUseCase>,
        ttl: Duration,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            inner,
            ttl,
            entries: RwLock::new(HashMap::new()),
            logger,
        }
    }

    fn lookup(&self, key: &str) -> Option<Option<BestPriceResult>> {
        let entries = match self.entries.read() {
            Ok(entries) => entries,
            Err(e) => {
                self.logger
                    .warn(&format!("pricing.cache_read_failed: {e}"));
                return None;
            }
        };

        entries
            .get(key)
            .filter(|cached| cached.stored_at.elapsed() < self.ttl)
            .map(|cached| cached.value.clone())
    }

    fn store(&self, key: String, value: Option<BestPriceResult>) {
        let mut entries = match self.entries.write() {
            Ok(entries) => entries,
            Err(e) => {
                self.logger
                    .warn(&format!("pricing.cache_write_failed: {e}"));
                return;
            }
        };

        let ttl = self.ttl;
        entries.retain(|_, cached| cached.stored_at.elapsed() < ttl);
        entries.insert(
            key,
            CachedResult {
                value,
                stored_at: Instant::now(),
            },
        );
    }
}

#[async_trait]
impl QueryBestPriceUseCase for CachedQueryBestPriceUseCase {
    async fn execute(
        &self,
        query: BestPriceQuery,
    ) -> Result<Option<BestPriceResult>, PricingError> {
        let key = query.cache_key();

        if let Some(hit) = self.lookup(&key) {
            self.logger.debug(&format!("Cache hit for {}", key));
            return Ok(hit);
        }

        self.logger.debug(&format!("Cache miss for {}", key));
        let result = self.inner.execute(query).await?;
        self.store(key, result.clone());

        Ok(result)
    }
}

use std::env;
use std::time::Duration;

use anyhow::Context;
use business::domain::pricing::rate_converter::RateTable;

const DEFAULT_BASE_CURRENCY: &str = "EUR";
const DEFAULT_RATES: &str = "EUR=1,USD=0.92,GBP=1.17";
const DEFAULT_CACHE_TTL_SECS: u64 = 120;

/// Conversion table and cache window for best-price lookups.
///
/// Environment variables:
/// - PRICING_BASE_CURRENCY: currency every rate converts into (default: "EUR")
/// - PRICING_RATES: `CODE=RATE` pairs, comma separated (default: "EUR=1,USD=0.92,GBP=1.17")
/// - PRICING_CACHE_TTL_SECS: how long an answer is reused, 0 disables reuse (default: 120)
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub rates: RateTable,
    pub cache_ttl: Duration,
}

impl PricingConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("PRICING_BASE_CURRENCY").ok(),
            env::var("PRICING_RATES").ok(),
            env::var("PRICING_CACHE_TTL_SECS").ok(),
        )
    }

    pub fn from_values(
        base: Option<String>,
        rates: Option<String>,
        cache_ttl_secs: Option<String>,
    ) -> anyhow::Result<Self> {
        let base = base.unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string());
        let rates = rates.unwrap_or_else(|| DEFAULT_RATES.to_string());
        let table = RateTable::parse(&base, &rates)
            .with_context(|| format!("invalid PRICING_RATES '{rates}' for base '{base}'"))?;

        let cache_ttl_secs = match cache_ttl_secs {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid PRICING_CACHE_TTL_SECS '{raw}'"))?,
            None => DEFAULT_CACHE_TTL_SECS,
        };

        Ok(Self {
            rates: table,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }
}

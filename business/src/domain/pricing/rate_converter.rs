use std::collections::HashMap;
use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::{One, Zero};

use super::errors::{PricingError, RateTableError};
use super::services::RateProvider;

/// Decimal places kept after a currency conversion.
pub const CONVERSION_SCALE: i64 = 4;

/// Rounds to `scale` decimal places, moving ties away from zero.
pub fn round_half_away_from_zero(value: &BigDecimal, scale: i64) -> BigDecimal {
    value.with_scale_round(scale, RoundingMode::HalfUp)
}

/// Fixed conversion rates from each supported currency to a single base currency.
///
/// Codes are matched case-insensitively. The base currency always has a rate of exactly one.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, BigDecimal>,
}

impl RateTable {
    pub fn new<I, S>(base: &str, rates: I) -> Result<Self, RateTableError>
    where
        I: IntoIterator<Item = (S, BigDecimal)>,
        S: AsRef<str>,
    {
        let base = normalize(base)?;
        let mut table = HashMap::new();

        for (code, rate) in rates {
            let code = normalize(code.as_ref())?;
            if rate <= BigDecimal::zero() {
                return Err(RateTableError::NonPositiveRate(code));
            }
            if code == base && rate != BigDecimal::one() {
                return Err(RateTableError::BaseRateNotOne(code));
            }
            table.insert(code, rate);
        }

        table
            .entry(base.clone())
            .or_insert_with(BigDecimal::one);

        Ok(Self { base, rates: table })
    }

    /// Parses a `CODE=RATE` list separated by commas, e.g. `EUR=1,USD=0.92`.
    pub fn parse(base: &str, pairs: &str) -> Result<Self, RateTableError> {
        let mut rates = Vec::new();
        for pair in pairs.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (code, rate) = pair
                .split_once('=')
                .ok_or_else(|| RateTableError::InvalidEntry(pair.to_string()))?;
            let rate = BigDecimal::from_str(rate.trim())
                .map_err(|_| RateTableError::InvalidEntry(pair.to_string()))?;
            rates.push((code.trim().to_string(), rate));
        }
        Self::new(base, rates)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn rate_to_base(&self, currency: &str) -> Option<&BigDecimal> {
        self.rates.get(&currency.trim().to_ascii_uppercase())
    }

    pub fn supports(&self, currency: &str) -> bool {
        self.rate_to_base(currency).is_some()
    }
}

fn normalize(code: &str) -> Result<String, RateTableError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(RateTableError::EmptyCurrency);
    }
    Ok(code.to_ascii_uppercase())
}

/// Converts amounts through the base currency of a [`RateTable`].
pub struct RateConverter {
    table: RateTable,
}

impl RateConverter {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    fn rate_for(&self, currency: &str) -> Result<&BigDecimal, PricingError> {
        self.table
            .rate_to_base(currency)
            .ok_or_else(|| PricingError::UnknownCurrency(currency.to_string()))
    }
}

impl RateProvider for RateConverter {
    fn convert(
        &self,
        amount: &BigDecimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<BigDecimal, PricingError> {
        // Same currency is returned untouched, without rounding.
        if from_currency.eq_ignore_ascii_case(to_currency) {
            return Ok(amount.clone());
        }

        let from_rate = self.rate_for(from_currency)?;
        let to_rate = self.rate_for(to_currency)?;

        let in_base = amount * from_rate;
        let in_target = &in_base / to_rate;

        Ok(round_half_away_from_zero(&in_target, CONVERSION_SCALE))
    }
}

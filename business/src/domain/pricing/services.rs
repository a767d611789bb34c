use bigdecimal::BigDecimal;

use super::errors::PricingError;

/// Service port for converting amounts between currencies.
pub trait RateProvider: Send + Sync {
    fn convert(
        &self,
        amount: &BigDecimal,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<BigDecimal, PricingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("pricing.unknown_currency")]
    UnknownCurrency(String),
    #[error("pricing.invalid_quantity")]
    InvalidQuantity,
    #[error("pricing.sku_empty")]
    SkuEmpty,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

/// Errors raised while building a rate table from configuration.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RateTableError {
    #[error("rate_table.empty_currency")]
    EmptyCurrency,
    #[error("rate_table.invalid_entry")]
    InvalidEntry(String),
    #[error("rate_table.non_positive_rate")]
    NonPositiveRate(String),
    #[error("rate_table.base_rate_not_one")]
    BaseRateNotOne(String),
}

use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.sku_empty")]
    SkuEmpty,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.sku_taken")]
    SkuTaken,
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// A lookup by id that found nothing.
    pub fn from_lookup(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }

    /// A write refused by the store: the SKU already belongs to another product.
    pub fn from_write(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Conflict => ProductError::SkuTaken,
            other => Self::from_lookup(other),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PriceListError {
    #[error("price_list.invalid_page")]
    InvalidPage,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product, ProductProps};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger.info(&format!("Creating product: {}", params.sku));

        let product = NewProduct::new(ProductProps {
            sku: params.sku,
            name: params.name,
            uom: params.uom,
            hazard_class: params.hazard_class,
        })?;

        let created = self
            .repository
            .create(&product)
            .await
            .map_err(ProductError::from_write)?;

        self.logger
            .info(&format!("Product {} created with id: {}", created.sku, created.id));
        Ok(created)
    }
}

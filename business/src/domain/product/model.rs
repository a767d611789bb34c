use chrono::{DateTime, Utc};

use super::errors::ProductError;

/// Unit of measure used when none is given.
pub const DEFAULT_UOM: &str = "EA";

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub sku: String,
    pub name: String,
    pub uom: String,
    pub hazard_class: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct ProductProps {
    pub sku: String,
    pub name: String,
    pub uom: Option<String>,
    pub hazard_class: Option<String>,
}

/// Trimmed fields ready to store, after the checks a product must pass.
struct CleanProps {
    sku: String,
    name: String,
    uom: String,
    hazard_class: String,
}

impl ProductProps {
    fn clean(self) -> Result<CleanProps, ProductError> {
        let sku = self.sku.trim().to_string();
        if sku.is_empty() {
            return Err(ProductError::SkuEmpty);
        }
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProductError::NameEmpty);
        }

        let uom = self
            .uom
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_UOM.to_string());
        let hazard_class = self
            .hazard_class
            .map(|h| h.trim().to_string())
            .unwrap_or_default();

        Ok(CleanProps {
            sku,
            name,
            uom,
            hazard_class,
        })
    }
}

/// A validated catalog product waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub uom: String,
    pub hazard_class: String,
    pub created_at: DateTime<Utc>,
}

impl NewProduct {
    pub fn new(props: ProductProps) -> Result<Self, ProductError> {
        let clean = props.clean()?;

        Ok(Self {
            sku: clean.sku,
            name: clean.name,
            uom: clean.uom,
            hazard_class: clean.hazard_class,
            created_at: Utc::now(),
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i32,
        sku: String,
        name: String,
        uom: String,
        hazard_class: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sku,
            name,
            uom,
            hazard_class,
            created_at,
            updated_at,
        }
    }

    pub fn from_new(id: i32, product: NewProduct) -> Self {
        Self::from_repository(
            id,
            product.sku,
            product.name,
            product.uom,
            product.hazard_class,
            product.created_at,
            product.created_at,
        )
    }

    pub fn with_changes(&self, props: ProductProps) -> Result<Self, ProductError> {
        let clean = props.clean()?;

        Ok(Self {
            id: self.id,
            sku: clean.sku,
            name: clean.name,
            uom: clean.uom,
            hazard_class: clean.hazard_class,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}

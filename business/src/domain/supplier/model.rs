use chrono::{DateTime, Utc};

use super::errors::SupplierError;
use crate::domain::pricing::model::SupplierOffer;

#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub active: bool,
    pub preferred: bool,
    pub lead_time_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct SupplierProps {
    pub name: String,
    pub country: String,
    pub active: bool,
    pub preferred: bool,
    pub lead_time_days: i32,
}

impl SupplierProps {
    fn validate(&self) -> Result<(), SupplierError> {
        if self.name.trim().is_empty() {
            return Err(SupplierError::NameEmpty);
        }
        if self.lead_time_days < 0 {
            return Err(SupplierError::NegativeLeadTime);
        }
        Ok(())
    }
}

/// A validated supplier waiting for the store to assign its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSupplier {
    pub name: String,
    pub country: String,
    pub active: bool,
    pub preferred: bool,
    pub lead_time_days: i32,
    pub created_at: DateTime<Utc>,
}

impl NewSupplier {
    pub fn new(props: SupplierProps) -> Result<Self, SupplierError> {
        props.validate()?;

        Ok(Self {
            name: props.name.trim().to_string(),
            country: props.country.trim().to_string(),
            active: props.active,
            preferred: props.preferred,
            lead_time_days: props.lead_time_days,
            created_at: Utc::now(),
        })
    }
}

impl Supplier {
    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i32,
        name: String,
        country: String,
        active: bool,
        preferred: bool,
        lead_time_days: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            country,
            active,
            preferred,
            lead_time_days,
            created_at,
            updated_at,
        }
    }

    pub fn from_new(id: i32, supplier: NewSupplier) -> Self {
        Self::from_repository(
            id,
            supplier.name,
            supplier.country,
            supplier.active,
            supplier.preferred,
            supplier.lead_time_days,
            supplier.created_at,
            supplier.created_at,
        )
    }

    /// Returns a copy carrying `props`, keeping identity and creation time.
    pub fn with_changes(&self, props: SupplierProps) -> Result<Self, SupplierError> {
        props.validate()?;

        Ok(Self {
            id: self.id,
            name: props.name.trim().to_string(),
            country: props.country.trim().to_string(),
            active: props.active,
            preferred: props.preferred,
            lead_time_days: props.lead_time_days,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    /// The attributes best-price selection ranks on.
    pub fn offer(&self) -> SupplierOffer {
        SupplierOffer {
            supplier_id: self.id,
            preferred: self.preferred,
            lead_time_days: self.lead_time_days,
            active: self.active,
        }
    }
}

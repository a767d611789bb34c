use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::supplier::model::{NewSupplier, Supplier};
use business::domain::supplier::repository::SupplierRepository;

use super::entity::SupplierEntity;

const SUPPLIER_COLUMNS: &str =
    "id, name, country, active, preferred, lead_time_days, created_at, updated_at";

pub struct SupplierRepositoryPostgres {
    pool: PgPool,
}

impl SupplierRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Supplier query failed: {}", e);
    RepositoryError::DatabaseError
}

#[async_trait]
impl SupplierRepository for SupplierRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Supplier>, RepositoryError> {
        let entities = sqlx::query_as::<_, SupplierEntity>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Supplier, RepositoryError> {
        let entity = sqlx::query_as::<_, SupplierEntity>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn create(&self, supplier: &NewSupplier) -> Result<Supplier, RepositoryError> {
        let entity = sqlx::query_as::<_, SupplierEntity>(&format!(
            r#"INSERT INTO suppliers (name, country, active, preferred, lead_time_days, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING {SUPPLIER_COLUMNS}"#
        ))
        .bind(&supplier.name)
        .bind(&supplier.country)
        .bind(supplier.active)
        .bind(supplier.preferred)
        .bind(supplier.lead_time_days)
        .bind(supplier.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, supplier: &Supplier) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE suppliers SET
                name = $2,
                country = $3,
                active = $4,
                preferred = $5,
                lead_time_days = $6,
                updated_at = $7
            WHERE id = $1"#,
        )
        .bind(supplier.id)
        .bind(&supplier.name)
        .bind(&supplier.country)
        .bind(supplier.active)
        .bind(supplier.preferred)
        .bind(supplier.lead_time_days)
        .bind(supplier.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

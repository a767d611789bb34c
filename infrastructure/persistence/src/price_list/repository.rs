use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::price_list::model::{NewPriceEntry, Page, PriceEntry, PriceFilter};
use business::domain::price_list::repository::PriceListRepository;
use business::domain::pricing::model::Candidate;
use business::domain::shared::value_objects::ValidityWindow;

use super::entity::{CandidateEntity, PriceEntryEntity};

const EXCLUSION_VIOLATION: &str = "23P01";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";

const ENTRY_COLUMNS: &str =
    "id, supplier_id, sku, valid_from, valid_to, currency, price_per_uom, min_qty";

pub struct PriceListRepositoryPostgres {
    pool: PgPool,
}

impl PriceListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("Price list query failed: {}", e);
    RepositoryError::DatabaseError
}

/// Constraint violations on insert mean the batch clashes with what is already stored.
fn write_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e
        && let Some(code) = db.code()
        && matches!(
            code.as_ref(),
            EXCLUSION_VIOLATION | FOREIGN_KEY_VIOLATION | CHECK_VIOLATION
        )
    {
        tracing::warn!("Price list batch refused by store constraint: {}", db);
        return RepositoryError::Conflict;
    }
    database_error(e)
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &PriceFilter) {
    builder.push(" WHERE TRUE");
    if let Some(sku) = &filter.sku {
        builder.push(" AND sku = ").push_bind(sku.clone());
    }
    if let Some(day) = filter.valid_on {
        builder
            .push(" AND valid_from <= ")
            .push_bind(day)
            .push(" AND valid_to >= ")
            .push_bind(day);
    }
    if let Some(currency) = &filter.currency {
        builder.push(" AND currency = ").push_bind(currency.clone());
    }
    if let Some(supplier_id) = filter.supplier_id {
        builder.push(" AND supplier_id = ").push_bind(supplier_id);
    }
}

#[async_trait]
impl PriceListRepository for PriceListRepositoryPostgres {
    async fn get_candidates(
        &self,
        sku: &str,
        quantity: i32,
        date: NaiveDate,
    ) -> Result<Vec<Candidate>, RepositoryError> {
        let entities = sqlx::query_as::<_, CandidateEntity>(
            r#"SELECT e.id, e.supplier_id, e.sku, e.valid_from, e.valid_to, e.currency,
                e.price_per_uom, e.min_qty, s.preferred, s.lead_time_days, s.active
            FROM price_list_entries e
            JOIN suppliers s ON s.id = e.supplier_id
            WHERE e.sku = $1
                AND e.valid_from <= $2
                AND e.valid_to >= $2
                AND e.min_qty <= $3
                AND s.active"#,
        )
        .bind(sku)
        .bind(date)
        .bind(quantity)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn has_overlap(
        &self,
        supplier_id: i32,
        sku: &str,
        window: ValidityWindow,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS (
                SELECT 1 FROM price_list_entries
                WHERE supplier_id = $1
                    AND sku = $2
                    AND valid_from <= $4
                    AND $3 <= valid_to
            )"#,
        )
        .bind(supplier_id)
        .bind(sku)
        .bind(window.from())
        .bind(window.to())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)
    }

    async fn add_batch(&self, entries: &[NewPriceEntry]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        for entry in entries {
            sqlx::query(
                r#"INSERT INTO price_list_entries
                    (supplier_id, sku, valid_from, valid_to, currency, price_per_uom, min_qty)
                VALUES ($1, $2, $3, $4, $5, $6, $7)"#,
            )
            .bind(entry.supplier_id)
            .bind(&entry.sku)
            .bind(entry.window.from())
            .bind(entry.window.to())
            .bind(&entry.currency)
            .bind(&entry.price_per_unit)
            .bind(entry.min_qty)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;
        }

        tx.commit().await.map_err(write_error)?;
        tracing::info!("Stored {} price list entries", entries.len());
        Ok(())
    }

    async fn list(&self, filter: &PriceFilter) -> Result<Page<PriceEntry>, RepositoryError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM price_list_entries");
        push_filters(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        let mut rows = QueryBuilder::<Postgres>::new(format!(
            "SELECT {ENTRY_COLUMNS} FROM price_list_entries"
        ));
        push_filters(&mut rows, filter);
        rows.push(" ORDER BY sku, supplier_id, valid_from, id LIMIT ")
            .push_bind(i64::from(filter.page_size))
            .push(" OFFSET ")
            .push_bind(filter.offset() as i64);

        let entities = rows
            .build_query_as::<PriceEntryEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(Page {
            page: filter.page,
            page_size: filter.page_size,
            total: total.max(0) as u64,
            items: entities.into_iter().map(|e| e.into_domain()).collect(),
        })
    }
}

use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Where the price store lives.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (optional, the in-memory store is used without it)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 10)
/// - MIGRATIONS_PATH: directory of SQL migrations (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        Self {
            url: env::var("DATABASE_URL").ok().filter(|u| !u.trim().is_empty()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            migrations_path: env::var("MIGRATIONS_PATH")
                .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string()),
        }
    }
}

/// Connects and migrates when a database is configured; `None` selects the in-memory store.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<Option<PgPool>> {
    let Some(url) = &settings.url else {
        tracing::warn!("DATABASE_URL not set, prices are kept in memory only");
        return Ok(None);
    };

    let config = DatabaseConfig::new(url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(Some(pool))
}

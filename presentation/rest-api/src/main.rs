use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Supplier pricing service entry point.
///
/// - config/: environment driven settings (server, CORS, database, pricing)
/// - setup/: dependency wiring and the HTTP server
/// - api/: routes, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        "Pricing in base {} with cache TTL {:?}",
        config.pricing.rates.base(),
        config.pricing.cache_ttl
    );

    let pool = database_config::init_database(&config.database).await?;
    let container = DependencyContainer::new(pool, config.pricing.clone());

    Server::run(config, container).await?;

    Ok(())
}

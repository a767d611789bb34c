use super::{
    cors_config, database_config::DatabaseSettings, pricing_config::PricingConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Fails when the pricing variables are present but malformed.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env(),
            pricing: PricingConfig::from_env()?,
        })
    }
}

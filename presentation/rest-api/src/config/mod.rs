pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod pricing_config;
pub mod server_config;

pub mod app_config;
pub mod config;
pub mod message;
pub mod model;

pub use app_config::{AppConfig, CsvSchema, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use message::{ScrapeRequest, ScrapeResponse, ScrapeResult, SCRAPE_ORDERS};
pub use model::{LineItem, OrderRecord, OrderStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

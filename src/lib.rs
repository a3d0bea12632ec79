//! Health probe and platform configuration for the Medusa commerce deployment.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod server;

pub use config::{load_config, AppEnv, ConfigLoader};
pub use error::ConfigError;
pub use models::MedusaConfig;

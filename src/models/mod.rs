pub mod health;
pub mod project;

pub use health::{HealthResponse, RootResponse};
pub use project::{DatabaseExtra, DatabaseType, MedusaConfig, Plugin, ProjectConfig, SslOptions};

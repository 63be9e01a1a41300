pub mod cardanoscan;
pub mod config;
pub mod errors;
pub mod ingestion;
pub mod models;
pub mod site;

pub use config::AppConfig;
pub use errors::PoolDataError;
pub use models::PoolSnapshot;

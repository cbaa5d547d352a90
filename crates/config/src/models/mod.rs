mod api;
mod app_config;
mod database;
mod dispatcher;

pub use api::ApiConfig;
pub use app_config::AppConfig;
pub use database::DatabaseConfig;
pub use dispatcher::DispatcherConfig;

pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod queries;
pub mod reports;
pub mod routes;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{AppError, Result};

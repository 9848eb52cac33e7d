//! HTTP catalog of games and genres backed by SQLite.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod validation;

use sqlx::SqlitePool;

pub use config::Config;
pub use error::CatalogError;
pub use routes::create_routes;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

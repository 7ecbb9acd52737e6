//! Bakery API: read-only REST endpoints over bakeries and baked goods.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use models::{BakedGood, BakedGoodSummary, Bakery, BakeryWithGoods};
pub use routes::{app_router, bakery_routes, common_routes};
pub use seed::seed_if_empty;
pub use service::{BakedGoodService, BakeryService};
pub use state::AppState;
pub use store::{connect, ensure_tables};

//! Router assembly.

pub mod bakery;
pub mod common;

pub use bakery::bakery_routes;
pub use common::common_routes;

use crate::error::AppError;
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

async fn not_found() -> AppError {
    AppError::NotFound("Not found".into())
}

/// Full application: bakery routes, common routes, JSON 404 fallback, request tracing.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(bakery_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

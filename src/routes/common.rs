//! Common routes: health, readiness, version.

use crate::response::PrettyJson;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
}

async fn health() -> PrettyJson<HealthBody> {
    PrettyJson(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, PrettyJson<ReadyBody>) {
    if let Err(e) = sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        tracing::warn!(error = %e, "readiness check failed");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            PrettyJson(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        );
    }
    (
        StatusCode::OK,
        PrettyJson(ReadyBody {
            status: "ok",
            database: "ok",
        }),
    )
}

async fn version() -> PrettyJson<VersionBody> {
    PrettyJson(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /health, /ready (runs `SELECT 1`), /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}

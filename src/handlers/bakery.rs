//! Index and bakery handlers.

use crate::error::AppError;
use crate::response::{html, ok};
use crate::service::BakeryService;
use crate::state::AppState;
use axum::extract::{rejection::PathRejection, Path, State};
use axum::response::IntoResponse;

pub const INDEX_HTML: &str = "<h1>Bakery GET API</h1>";

pub async fn index() -> impl IntoResponse {
    html(INDEX_HTML)
}

pub async fn list_bakeries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bakeries = BakeryService::list(&state.pool).await?;
    Ok(ok(bakeries))
}

/// A non-integer id is treated as an unmatched route, not as a missing bakery.
pub async fn get_bakery(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(%rejection, "bakery id did not parse");
        AppError::NotFound("Not found".into())
    })?;
    let bakery = BakeryService::find_with_goods(&state.pool, id)
        .await?
        .ok_or_else(AppError::bakery_not_found)?;
    Ok(ok(bakery))
}

//! Baked good handlers.

use crate::error::AppError;
use crate::response::ok;
use crate::service::BakedGoodService;
use crate::state::AppState;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn baked_goods_by_price(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let goods = BakedGoodService::list_by_price_desc(&state.pool).await?;
    Ok(ok(goods))
}

/// 404 when there are no baked goods at all.
pub async fn most_expensive_baked_good(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let good = BakedGoodService::most_expensive(&state.pool)
        .await?
        .ok_or_else(AppError::baked_good_not_found)?;
    Ok(ok(good))
}

//! Bakery API routes.

use crate::handlers::{
    baked_goods_by_price, get_bakery, index, list_bakeries, most_expensive_baked_good,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn bakery_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/bakeries", get(list_bakeries))
        .route("/bakeries/:id", get(get_bakery))
        .route("/baked_goods/by_price", get(baked_goods_by_price))
        .route("/baked_goods/most_expensive", get(most_expensive_baked_good))
        .with_state(state)
}

//! Router for the restaurant info API

use std::sync::{Arc, RwLock};

use anyhow::anyhow;
use axum::{Json, Router, extract::State, routing::get};

use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::script::RestaurantInfo;

type SharedState = Arc<RwLock<AppState>>;

async fn restaurant_info(
    State(state): State<SharedState>,
) -> Result<Json<RestaurantInfo>, ApiError> {
    let info = state
        .read()
        .map_err(|_| anyhow!("Unable to read shared state"))?
        .restaurant
        .clone();
    Ok(Json(info))
}

/// Create the restaurant router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(restaurant_info))
}

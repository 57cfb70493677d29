//! API routes module

pub mod chat;
pub mod restaurant;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Scripted assistant replies
        .nest("/chat", chat::router())
        // Restaurant info panel
        .nest("/restaurant", restaurant::router())
}

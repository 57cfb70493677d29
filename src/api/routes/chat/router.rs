//! Router for the chat API

use std::sync::{Arc, RwLock};

use anyhow::Context;
use axum::{Json, Router, body::Bytes, routing::post};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::responder;

type SharedState = Arc<RwLock<AppState>>;

/// Reply to the latest caller utterance in the posted history.
///
/// The body is parsed by hand so that a malformed request is reported
/// like any other failure instead of as an extractor rejection.
async fn chat_handler(body: Bytes) -> Result<Json<public::ChatResponse>, ApiError> {
    let payload: public::ChatRequest =
        serde_json::from_slice(&body).context("Failed to parse chat request")?;

    tracing::debug!("Responding to history of {} messages", payload.messages.len());
    let reply = responder::respond(&payload.messages);

    Ok(Json(public::ChatResponse::new(&reply)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}

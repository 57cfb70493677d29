//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::responder::ChatMessage;

/// Full conversation history, oldest first.
#[derive(Serialize, Deserialize, Debug)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub message: String,
}

impl ChatResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
    // Anything else a client sends. Kept so an odd role doesn't
    // reject the whole history; the responder ignores it.
    #[serde(rename = "unknown", other)]
    Unknown,
}

/// One `{role, content}` entry of the history posted to the responder.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: &str) -> Self {
        Self {
            role,
            content: content.to_string(),
        }
    }
}

//! Keyword responder. Picks the assistant's next line from the
//! restaurant script by matching the caller's latest utterance
//! against an ordered rule table.

mod models;
mod rules;

pub use models::{ChatMessage, Role};
pub use rules::{Intent, classify};

/// Produce the assistant's reply for a conversation history.
///
/// Only the most recent `user` entry is inspected. A history with no
/// user entry, or an empty one, gets the fallback reply. This never
/// fails.
pub fn respond(messages: &[ChatMessage]) -> String {
    let last_user_text = messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map(|m| m.content.as_str())
        .unwrap_or_default();

    let intent = classify(last_user_text);
    tracing::debug!("Classified caller utterance as {:?}", intent);
    intent.reply()
}

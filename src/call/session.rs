//! Call state machine driven by the operator.
//!
//! Idle until a call starts, then in a call, possibly awaiting the
//! assistant's reply. Only one reply can be outstanding; submissions
//! made while waiting are dropped.

use std::time::Duration;

use anyhow::Result;
use thiserror::Error;

use super::models::{Archive, Conversation, Speaker, Turn};
use super::transport::ReplyTransport;
use crate::responder::ChatMessage;
use crate::script;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallError {
    #[error("A call is already in progress")]
    AlreadyInCall,
}

/// History to send to the responder for one submission.
#[derive(Debug, Clone)]
pub struct PendingReply {
    pub call_id: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Default)]
pub struct CallSession {
    current: Option<Conversation>,
    awaiting_reply: bool,
    listening: bool,
    // Draft text in the input field
    input: String,
    archive: Archive,
}

impl CallSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Conversation> {
        self.current.as_ref()
    }

    pub fn in_call(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Answer a new call. The assistant greets the caller right away.
    pub fn start_call(&mut self) -> Result<&Conversation, CallError> {
        if self.current.is_some() {
            return Err(CallError::AlreadyInCall);
        }
        let mut conversation = Conversation::new();
        conversation.push(Turn::new(Speaker::Assistant, script::WELCOME_MESSAGE));
        tracing::debug!("Started call {}", conversation.id);
        Ok(&*self.current.insert(conversation))
    }

    /// Record the caller's utterance and hand back the history to send.
    ///
    /// Returns `None` without touching any state when there is no
    /// call, the text is blank, or a reply is still outstanding.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() || self.awaiting_reply {
            return None;
        }
        let conversation = self.current.as_mut()?;
        conversation.push(Turn::new(Speaker::User, text));
        self.input.clear();
        self.awaiting_reply = true;

        Some(PendingReply {
            call_id: conversation.id.clone(),
            messages: conversation.to_messages(),
        })
    }

    /// Settle the outstanding reply for `call_id`. A failed exchange
    /// becomes a fixed apology. Replies for a call that has ended, or
    /// with nothing outstanding, are dropped and leave the awaiting
    /// flag alone. Returns whether a turn was appended.
    pub fn complete(&mut self, call_id: &str, result: Result<String>) -> bool {
        let conversation = match self.current.as_mut() {
            Some(c) if self.awaiting_reply && c.id == call_id => c,
            _ => {
                tracing::debug!("Dropping reply for call {} with nothing outstanding", call_id);
                return false;
            }
        };
        self.awaiting_reply = false;

        let text = match result {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Reply failed: {}. Root cause: {}", e, e.root_cause());
                script::APOLOGY_MESSAGE.to_string()
            }
        };
        conversation.push(Turn::new(Speaker::Assistant, &text));
        true
    }

    /// Submit the text and wait for the transport's reply. Returns
    /// whether the submission was accepted.
    pub async fn send(&mut self, text: &str, transport: &dyn ReplyTransport) -> bool {
        let Some(pending) = self.submit(text) else {
            return false;
        };
        let result = transport.reply(&pending.messages).await;
        self.complete(&pending.call_id, result);
        true
    }

    /// Hang up. A call with any turns moves to the front of the
    /// archive. Returns whether something was archived.
    pub fn end_call(&mut self) -> bool {
        self.input.clear();
        self.awaiting_reply = false;

        let Some(conversation) = self.current.take() else {
            return false;
        };
        let id = conversation.id.clone();
        let archived = self.archive.archive(conversation);
        tracing::debug!("Ended call {} (archived: {})", id, archived);
        archived
    }

    /// Stand-in for speech capture: "listens" for `delay` then fills
    /// the input with a canned sentence. No audio is recorded.
    pub async fn simulate_voice_input(&mut self, delay: Duration) -> &str {
        self.listening = true;
        tokio::time::sleep(delay).await;
        self.listening = false;
        self.input = script::VOICE_SAMPLE.to_string();
        &self.input
    }
}

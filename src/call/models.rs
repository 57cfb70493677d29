use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::responder::{ChatMessage, Role};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

impl From<Speaker> for Role {
    fn from(speaker: Speaker) -> Self {
        match speaker {
            Speaker::User => Role::User,
            Speaker::Assistant => Role::Assistant,
        }
    }
}

/// A single utterance. Never modified after it is created.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    pub fn new(speaker: Speaker, text: &str) -> Self {
        Self {
            speaker,
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }
}

impl From<&Turn> for ChatMessage {
    fn from(turn: &Turn) -> Self {
        ChatMessage::new(turn.speaker.into(), &turn.text)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    Active,
    Completed,
}

/// One call, from greeting to hang up.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Conversation {
    pub id: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: CallStatus,
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            ended_at: None,
            status: CallStatus::Active,
            turns: Vec::new(),
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// History in the `{role, content}` shape the responder expects.
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        self.turns.iter().map(ChatMessage::from).collect()
    }

    /// Text of the caller's first utterance, for the call log.
    pub fn preview(&self) -> &str {
        self.turns
            .iter()
            .find(|t| t.speaker == Speaker::User)
            .map(|t| t.text.as_str())
            .unwrap_or("No messages")
    }

    fn complete(mut self) -> Self {
        self.status = CallStatus::Completed;
        self.ended_at = Some(Utc::now());
        self
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Finished calls for this session, newest first.
#[derive(Clone, Debug, Default)]
pub struct Archive {
    calls: Vec<Conversation>,
}

impl Archive {
    /// Mark the conversation completed and put it at the front. Calls
    /// with no turns are dropped. Returns whether it was archived.
    pub fn archive(&mut self, conversation: Conversation) -> bool {
        if conversation.is_empty() {
            return false;
        }
        self.calls.insert(0, conversation.complete());
        true
    }

    pub fn calls(&self) -> &[Conversation] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

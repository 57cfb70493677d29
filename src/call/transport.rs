use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;

use crate::api::public::chat::{ChatRequest, ChatResponse};
use crate::responder::{self, ChatMessage};

/// Where the operator console gets the assistant's next line from.
#[async_trait]
pub trait ReplyTransport: Send + Sync {
    async fn reply(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Posts the history to a running server's `/api/chat`.
pub struct HttpTransport {
    api_base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ReplyTransport for HttpTransport {
    async fn reply(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/api/chat", self.api_base_url);
        let payload = ChatRequest {
            messages: messages.to_vec(),
        };

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Chat request failed with {}: {}", status, body));
        }

        let data: ChatResponse = resp
            .json()
            .await
            .with_context(|| "Attempted to parse chat response from json")?;

        Ok(data.message)
    }
}

/// Answers in-process without a server.
#[derive(Default)]
pub struct LocalTransport;

#[async_trait]
impl ReplyTransport for LocalTransport {
    async fn reply(&self, messages: &[ChatMessage]) -> Result<String> {
        Ok(responder::respond(messages))
    }
}

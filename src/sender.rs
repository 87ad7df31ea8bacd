//! Message sender — posts one random message to a chatroom.
//!
//! A send is a `POST /api/v2/messages/send/{chatroom_id}` carrying the
//! chosen message, a fixed `"message"` kind tag, and a fresh 13-digit
//! `message_ref`. Exactly HTTP 200 counts as sent; any other status is a
//! rejection (logged, not an error). Only transport failures surface as
//! [`SendError`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::client::KICK_BASE_URL;
use crate::utils::random::RandomSource;

/// Outcome of one send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub sent: bool,
    /// The message that went out; `None` when the send was rejected.
    pub chosen_message: Option<String>,
}

impl SendResult {
    pub fn sent(message: impl Into<String>) -> Self {
        Self {
            sent: true,
            chosen_message: Some(message.into()),
        }
    }

    pub fn rejected() -> Self {
        Self {
            sent: false,
            chosen_message: None,
        }
    }
}

/// Transport failure while posting. Maps to the error wait tier.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("send request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Message-posting seam; the monitor only sees this trait.
#[async_trait]
pub trait Sender: Send + Sync {
    async fn send(&self, chatroom_id: &str) -> Result<SendResult, SendError>;
}

/// Request body for the send endpoint.
#[derive(Debug, Serialize)]
struct SendPayload<'a> {
    content: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    message_ref: String,
}

impl<'a> SendPayload<'a> {
    fn new(content: &'a str, message_ref: String) -> Self {
        Self {
            content,
            kind: "message",
            message_ref,
        }
    }
}

/// Sender backed by the Kick messages API.
pub struct KickSender {
    client: reqwest::Client,
    base_url: String,
    authorization: String,
    messages: Vec<String>,
    random: Arc<dyn RandomSource>,
}

impl KickSender {
    pub fn new(
        client: reqwest::Client,
        authorization: String,
        messages: Vec<String>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self::with_base_url(client, KICK_BASE_URL, authorization, messages, random)
    }

    pub fn with_base_url(
        client: reqwest::Client,
        base_url: impl Into<String>,
        authorization: String,
        messages: Vec<String>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            authorization,
            messages,
            random,
        }
    }

    fn choose_message(&self) -> &str {
        &self.messages[self.random.pick_index(self.messages.len())]
    }
}

#[async_trait]
impl Sender for KickSender {
    async fn send(&self, chatroom_id: &str) -> Result<SendResult, SendError> {
        let message = self.choose_message();
        let payload = SendPayload::new(message, self.random.message_ref());
        let url = format!("{}/api/v2/messages/send/{}", self.base_url, chatroom_id);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.authorization)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 200 {
            Ok(SendResult::sent(message))
        } else {
            warn!(
                chatroom_id,
                status = status.as_u16(),
                message,
                "send rejected"
            );
            Ok(SendResult::rejected())
        }
    }
}

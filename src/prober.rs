//! Channel prober — determines liveness and resolves the chatroom id.
//!
//! One probe is a `GET /api/v2/channels/{channel}`. Liveness is signaled
//! by the presence of a non-null `livestream` field; the send target is
//! the nested `chatroom.id`. "Not live" is a normal outcome, never an
//! error; only transport or parse failures surface as [`ProbeError`].

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::client::KICK_BASE_URL;

/// Outcome of one liveness probe.
///
/// Invariant: `chatroom_id` is `Some` if and only if `is_live` is true.
/// A live broadcast without a resolvable chatroom id is reported as not
/// live — the monitor must never attempt a send without a valid target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub is_live: bool,
    pub chatroom_id: Option<String>,
}

impl ProbeResult {
    pub fn offline() -> Self {
        Self {
            is_live: false,
            chatroom_id: None,
        }
    }

    pub fn live(chatroom_id: impl Into<String>) -> Self {
        Self {
            is_live: true,
            chatroom_id: Some(chatroom_id.into()),
        }
    }
}

/// Transport or parse failure while probing. Maps to the error wait tier.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("probe request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unparseable channel response: {0}")]
    Malformed(String),
}

/// Liveness-probing seam; the monitor only sees this trait.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, channel: &str) -> Result<ProbeResult, ProbeError>;
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// The parts of `GET /api/v2/channels/{channel}` this tool reads.
#[derive(Debug, Deserialize)]
struct ChannelPayload {
    /// Null or absent when the channel is offline.
    #[serde(default)]
    livestream: Option<serde_json::Value>,
    #[serde(default)]
    chatroom: Option<ChatroomPayload>,
}

#[derive(Debug, Deserialize)]
struct ChatroomPayload {
    /// Numeric in the live API; tolerate strings as well.
    #[serde(default)]
    id: Option<serde_json::Value>,
}

fn interpret(payload: ChannelPayload) -> ProbeResult {
    let live = payload
        .livestream
        .map(|v| !v.is_null())
        .unwrap_or(false);
    if !live {
        return ProbeResult::offline();
    }

    let chatroom_id = payload.chatroom.and_then(|c| c.id).and_then(|id| match id {
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    });

    match chatroom_id {
        Some(id) => ProbeResult::live(id),
        // Live but no send target: conservatively report offline.
        None => ProbeResult::offline(),
    }
}

// ---------------------------------------------------------------------------
// KickProber
// ---------------------------------------------------------------------------

/// Prober backed by the Kick channels API.
pub struct KickProber {
    client: reqwest::Client,
    base_url: String,
}

impl KickProber {
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_base_url(client, KICK_BASE_URL)
    }

    pub fn with_base_url(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Prober for KickProber {
    async fn probe(&self, channel: &str) -> Result<ProbeResult, ProbeError> {
        let url = format!("{}/api/v2/channels/{}", self.base_url, channel);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        let payload: ChannelPayload = serde_json::from_str(&body).map_err(|e| {
            ProbeError::Malformed(format!("HTTP {}: {}", status.as_u16(), e))
        })?;

        let result = interpret(payload);
        debug!(
            channel,
            is_live = result.is_live,
            chatroom_id = result.chatroom_id.as_deref().unwrap_or(""),
            "probe completed"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: serde_json::Value) -> ProbeResult {
        interpret(serde_json::from_value(raw).unwrap())
    }

    #[test]
    fn test_offline_when_livestream_null() {
        let result = parse(json!({
            "livestream": null,
            "chatroom": { "id": 42 }
        }));
        assert_eq!(result, ProbeResult::offline());
    }

    #[test]
    fn test_offline_when_livestream_absent() {
        let result = parse(json!({ "chatroom": { "id": 42 } }));
        assert_eq!(result, ProbeResult::offline());
    }

    #[test]
    fn test_live_with_numeric_chatroom_id() {
        let result = parse(json!({
            "livestream": { "is_live": true, "viewer_count": 1200 },
            "chatroom": { "id": 123456 }
        }));
        assert_eq!(result, ProbeResult::live("123456"));
    }

    #[test]
    fn test_live_with_string_chatroom_id() {
        let result = parse(json!({
            "livestream": {},
            "chatroom": { "id": "987" }
        }));
        assert_eq!(result, ProbeResult::live("987"));
    }

    #[test]
    fn test_live_but_missing_chatroom_reported_offline() {
        let result = parse(json!({ "livestream": {} }));
        assert_eq!(result, ProbeResult::offline());
    }

    #[test]
    fn test_live_but_empty_chatroom_id_reported_offline() {
        let result = parse(json!({
            "livestream": {},
            "chatroom": { "id": "" }
        }));
        assert_eq!(result, ProbeResult::offline());

        let result = parse(json!({
            "livestream": {},
            "chatroom": { "id": null }
        }));
        assert_eq!(result, ProbeResult::offline());
    }

    #[test]
    fn test_probe_result_invariant() {
        let live = ProbeResult::live("1");
        assert!(live.is_live && live.chatroom_id.is_some());
        let offline = ProbeResult::offline();
        assert!(!offline.is_live && offline.chatroom_id.is_none());
    }

    #[test]
    fn test_malformed_body_is_distinct_error() {
        let err: Result<ChannelPayload, _> = serde_json::from_str("<html>challenge</html>");
        assert!(err.is_err());
        let probe_err = ProbeError::Malformed("HTTP 403: expected value".to_string());
        assert!(probe_err.to_string().contains("unparseable"));
    }
}

//! Shared HTTP client for the Kick API.
//!
//! Kick sits behind an anti-bot layer that challenges clients which don't
//! look like a browser. One client instance is built at startup and cloned
//! into every monitor (reqwest clients are internally reference-counted and
//! safe for concurrent use): browser-equivalent default headers, a cookie
//! store so challenge cookies persist across requests, and a bounded
//! timeout so a hung request cannot wedge a channel loop.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};

use crate::error::Result;

/// Base URL for the Kick API. Overridable in probers/senders for tests.
pub const KICK_BASE_URL: &str = "https://kick.com";

/// Per-request timeout. No retry logic lives here; the monitor's wait
/// tiers are the retry cadence.
const REQUEST_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Build the shared client used by all channel monitors.
pub fn build_client() -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .cookie_store(true)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        // Probers/senders join paths with a leading slash.
        assert!(!KICK_BASE_URL.ends_with('/'));
    }
}

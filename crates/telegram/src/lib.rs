//! Telegram crate: Bot API `sendMessage` integration.

use std::time::Duration;

use eyre::Result;
use reqwest::Client as HttpClient;
use serde::Serialize;
use url::Url;

/// Telegram Bot API host.
const API_BASE: &str = "https://api.telegram.org";

/// Timeout applied to every delivery request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Payload for the `sendMessage` bot method.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SendMessage<'a> {
    /// Recipient chat identifier.
    pub chat_id: &'a str,
    /// Message text.
    pub text: &'a str,
}

/// Client for delivering notifications through the Telegram Bot API.
#[derive(Debug, Clone)]
pub struct Notifier {
    http: HttpClient,
    token: String,
    chat_id: String,
    base_url: String,
}

impl Notifier {
    /// Create a new notifier for `chat_id`, authorized by the bot `token`.
    pub fn new(token: String, chat_id: String) -> Result<Self> {
        Self::with_base_url(token, chat_id, Url::parse(API_BASE)?)
    }

    /// Create a notifier that talks to `base_url` instead of the Telegram API.
    pub fn with_base_url(token: String, chat_id: String, base_url: Url) -> Result<Self> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.as_str().trim_end_matches('/').to_owned();
        Ok(Self { http, token, chat_id, base_url })
    }

    /// Send `text` to the configured chat.
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let body = SendMessage { chat_id: &self.chat_id, text };
        self.http.post(&url).json(&body).send().await?.error_for_status()?;
        Ok(())
    }
}

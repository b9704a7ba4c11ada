use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;

/// Timeout applied to every status request, so a hung endpoint cannot stall
/// the whole process.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Practicum homework statuses API.
#[derive(Debug, Clone)]
pub struct StatusClient {
    http: HttpClient,
    token: String,
    endpoint: Url,
}

impl StatusClient {
    /// Create a new status client for `endpoint`, authorized by `token`.
    pub fn new(token: String, endpoint: Url) -> eyre::Result<Self> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, token, endpoint })
    }

    /// Fetch homework statuses changed since `from_date` (Unix seconds).
    ///
    /// Only an HTTP 200 with a JSON body counts as success; anything else
    /// maps to its own [`Error`] kind. No retry happens here, recovery is
    /// the watcher's next tick.
    pub async fn homework_statuses(&self, from_date: u64) -> Result<Value, Error> {
        let resp = self
            .http
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|source| Error::Unreachable {
                endpoint: self.endpoint.clone(),
                from_date,
                source,
            })?;

        let status = resp.status();
        debug!(%status, endpoint = %self.endpoint, from_date, "GET request sent to homework status API");

        if status != StatusCode::OK {
            return Err(Error::BadStatus { endpoint: self.endpoint.clone(), from_date, status });
        }

        resp.json::<Value>().await.map_err(|source| Error::NotJson { source })
    }
}

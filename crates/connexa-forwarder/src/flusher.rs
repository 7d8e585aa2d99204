//! Envelope encoding and HTTP submission to the log intake.
//!
//! Each bundle chunk becomes one POST: a JSON array of per-entry envelopes
//! in the Datadog-style batch format the intake accepts. A 2xx response is
//! success; any other response, including network-level failures, is fatal
//! for the invocation.

use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::constants::LOG_SOURCE;
use crate::error::ForwarderError;

const INTAKE_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-entry envelope in the intake's batch format.
#[derive(Debug, Serialize)]
struct LogEntry<'a> {
    ddsource: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ddtags: Option<&'a str>,
    message: &'a str,
}

/// Submitter for one intake endpoint.
///
/// Holds the resolved auth token and reuses a single HTTP client across
/// submissions within the invocation.
#[derive(Debug)]
pub struct Flusher {
    client: reqwest::Client,
    url: String,
    auth_token: String,
    customer_code: String,
    tags: Option<String>,
}

impl Flusher {
    #[must_use]
    pub fn new(config: &Config, auth_token: String) -> Self {
        Flusher {
            client: intake_client(),
            url: config.graylog_url.clone(),
            auth_token,
            customer_code: config.customer_code.clone(),
            tags: config.tags.clone(),
        }
    }

    /// Submits one chunk of entries as a single POST.
    pub async fn submit(&self, entries: &[String]) -> Result<(), ForwarderError> {
        if entries.is_empty() {
            return Ok(());
        }

        let body = self.encode(entries)?;
        info!(
            "Sending {} log entries ({} bytes) to Graylog",
            entries.len(),
            body.len()
        );
        debug!("Outgoing payload: {}", String::from_utf8_lossy(&body));

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("AUTH", &self.auth_token)
            .header("customer_code", &self.customer_code)
            .body(body)
            .send()
            .await
            .map_err(|e| ForwarderError::Submission(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("Successfully sent {} logs to Graylog", entries.len());
            return Ok(());
        }

        error!("Failed to send logs to Graylog. Status code: {}", status);
        let body = response.text().await.unwrap_or_default();
        if !body.is_empty() {
            error!("Response body: {}", body);
        }
        Err(ForwarderError::Submission(format!(
            "Unexpected response status {status}"
        )))
    }

    fn encode(&self, entries: &[String]) -> Result<Vec<u8>, ForwarderError> {
        let tags = self.tags.as_deref().filter(|tags| !tags.is_empty());
        let envelopes: Vec<LogEntry<'_>> = entries
            .iter()
            .map(|message| LogEntry {
                ddsource: LOG_SOURCE,
                ddtags: tags,
                message,
            })
            .collect();
        Ok(serde_json::to_vec(&envelopes)?)
    }
}

/// HTTP client for the intake endpoint with connect/request timeouts.
///
/// Falls back to client defaults if the builder fails; the failure then
/// surfaces at submission time.
fn intake_client() -> reqwest::Client {
    match reqwest::Client::builder()
        .connect_timeout(INTAKE_TIMEOUT)
        .timeout(INTAKE_TIMEOUT)
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build HTTP client: {}, using defaults", e);
            reqwest::Client::new()
        }
    }
}

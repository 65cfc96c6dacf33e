//! Submission backends — the one network call of the signup flow.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::SubmitError;
use crate::form::state::FormState;
use crate::submit::payload::application_form;

/// Path of the application endpoint, joined onto the configured base URL.
pub const AGENT_APPLICATION_ENDPOINT: &str = "/v1/agents/applications/";

/// Simulated latency of the mock backend.
pub const MOCK_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// One-shot remote registration.
///
/// Implementations attempt the call exactly once — no retry, no
/// cancellation. The flow's phase guard prevents concurrent calls.
#[async_trait]
pub trait ApplicationBackend: Send + Sync {
    /// Attempt the registration.
    async fn submit(&self, state: &FormState) -> Result<(), SubmitError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Real backend: POSTs the multipart application to the API.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{AGENT_APPLICATION_ENDPOINT}",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl ApplicationBackend for HttpBackend {
    async fn submit(&self, state: &FormState) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.endpoint())
            .multipart(application_form(state))
            .send()
            .await
            .map_err(SubmitError::Network)?;

        let status = response.status();
        if status.is_success() {
            // Body is ignored on success.
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "application rejected");
        Err(SubmitError::Rejected {
            status,
            message: rejection_message(&body),
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Extract a human-readable message from an error body.
///
/// A top-level string `message` field is used verbatim; anything else
/// (non-JSON body, missing or non-string field) falls back to the
/// generic failure text.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| SubmitError::GENERIC_MESSAGE.to_string())
}

/// Development backend: never calls the network, always succeeds after
/// a fixed delay.
pub struct MockBackend {
    delay: Duration,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            delay: MOCK_SUBMIT_DELAY,
        }
    }

    /// Override the delay (tests).
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplicationBackend for MockBackend {
    async fn submit(&self, _state: &FormState) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Select the backend the configuration asks for.
pub fn backend_for(config: &Config) -> Arc<dyn ApplicationBackend> {
    if config.use_mock_api {
        Arc::new(MockBackend::new())
    } else {
        Arc::new(HttpBackend::new(config.api_base_url.clone()))
    }
}

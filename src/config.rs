//! Configuration types.

use std::path::PathBuf;

/// Default API base URL (local-development placeholder).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Client configuration.
///
/// Loading is infallible: unset or unparseable environment values fall
/// back to the defaults below.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the agent-application API.
    pub api_base_url: String,
    /// When true, submissions never touch the network and always
    /// succeed after a fixed delay.
    pub use_mock_api: bool,
    /// Directory receipt PDFs are written into.
    pub receipt_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// - `AGENT_ENROLL_API_BASE_URL` — API base URL.
    /// - `AGENT_ENROLL_USE_MOCK_API` — mock mode iff exactly `"true"`.
    /// - `AGENT_ENROLL_RECEIPT_DIR` — receipt output directory.
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("AGENT_ENROLL_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let use_mock_api = std::env::var("AGENT_ENROLL_USE_MOCK_API")
            .map(|v| v == "true")
            .unwrap_or(false);
        let receipt_dir = std::env::var("AGENT_ENROLL_RECEIPT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            api_base_url,
            use_mock_api,
            receipt_dir,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            use_mock_api: false,
            receipt_dir: PathBuf::from("."),
        }
    }
}

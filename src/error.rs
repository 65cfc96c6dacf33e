//! Error types for agent-enroll.

use std::path::PathBuf;

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Submission error: {0}")]
    Submit(#[from] SubmitError),

    #[error("Receipt error: {0}")]
    Receipt(#[from] ReceiptError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
}

/// Submission failures.
///
/// `Display` is exactly the message surfaced in the form's general
/// error slot — raw transport detail never reaches the user, only the
/// log (via `source`).
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The server answered with a non-success status. `message` is the
    /// server's own, or the generic fallback when the body had none.
    #[error("{message}")]
    Rejected {
        status: reqwest::StatusCode,
        message: String,
    },

    /// The request never completed (DNS, connect, timeout, ...).
    #[error("Registration failed. Please try again.")]
    Network(#[source] reqwest::Error),
}

impl SubmitError {
    /// Fallback shown when no server-provided message is available.
    pub const GENERIC_MESSAGE: &str = "Registration failed. Please try again.";
}

/// Receipt generation failures.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("Failed to render receipt: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application manifest loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read attachment {path}: {source}")]
    Attachment {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

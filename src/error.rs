//! Error types for the GlobalIdentity client.

use thiserror::Error;

/// Errors that can occur when using the GlobalIdentity client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// GlobalIdentity reported the operation as failed.
    ///
    /// Carries the `OperationReport` messages returned by the service.
    #[error("operation rejected: {}", format_report(.report))]
    Rejected {
        /// Failure messages from the service.
        report: Vec<String>,
    },

    /// Failed to deserialize response.
    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

fn format_report(report: &[String]) -> String {
    if report.is_empty() {
        "no report returned".to_string()
    } else {
        report.join("; ")
    }
}

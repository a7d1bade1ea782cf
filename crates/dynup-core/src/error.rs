//! Error types for the update client
//!
//! Every failure a run can hit is a variant here. Errors are surfaced
//! immediately and terminate the run; nothing is retried or swallowed.

use thiserror::Error;

/// Result type alias for dynup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the update client
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file path does not reference an existing file
    #[error("config file not found: {0}")]
    NotFound(String),

    /// Configuration file exists but could not be opened or read
    #[error("config i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration contents could not be decoded
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Transport-level failure, including the update request timeout
    #[error("network error: {0}")]
    Network(reqwest::Error),

    /// A response body could not be read in full
    #[error("failed to read response body: {0}")]
    BodyRead(reqwest::Error),

    /// The lookup service answered with an empty body
    #[error("lookup service did not return an address")]
    EmptyIp,

    /// The lookup body is not shaped like a dotted-quad IPv4 address
    #[error("invalid or unknown ip format: {0:?}")]
    InvalidIpFormat(String),

    /// The update request could not be constructed
    #[error("failed to build update request: {0}")]
    RequestBuild(reqwest::Error),

    /// The update endpoint rejected the submitted address
    #[error("update failed: status {status}, body {body:?}")]
    UpdateFailed {
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Response body text, verbatim
        body: String,
    },
}

use thiserror::Error;

/// Application-level errors using thiserror for structured error handling.
///
/// Network failures never escape the wizard: the cuisine loader folds them
/// into a fixed message and the recipe client into the result text. They are
/// typed here so both sides can log and describe them consistently.

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("{0}")]
    Transport(String),

    /// Server answered with a non-2xx status
    #[error("Status {status}")]
    Status { status: u16 },

    /// Response body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// The worker running the request stopped without reporting a result
    #[error("Request aborted before completion")]
    Aborted,
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => FetchError::Status { status },
            ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration from {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration from {path}")]
    ParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

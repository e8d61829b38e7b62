//! Error types for the update flow.
//!
//! One variant per failure class the run distinguishes: configuration
//! problems surface before any network activity, transport failures abort
//! the run wherever they occur, and `Decode` is matched by the engine to
//! tolerate unreadable per-record update responses.

use thiserror::Error;

/// Result type alias for update operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the updater
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Failure to reach the IP service or the DNS API (connection, DNS
    /// resolution, TLS, timeout, or reading the body)
    #[error("transport error: {0}")]
    Transport(String),

    /// A response body that could not be decoded as JSON
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// IP lookup answered but not usefully (e.g. non-2xx status)
    #[error("IP source error: {0}")]
    IpSource(String),

    /// Provider-level failure outside a decodable response envelope
    #[error("provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an IP source error
    pub fn ip_source(msg: impl Into<String>) -> Self {
        Self::IpSource(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Whether this error is an undecodable response body
    ///
    /// The update loop treats these as per-record failures instead of
    /// aborting the run.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

//! Error types for the Spotify catalog client.
//!
//! The taxonomy separates "the client is broken" (every variant here) from
//! "the catalog has nothing for this request". The latter is never an error:
//! lookups and searches answer a non-2xx status with an empty mapping.

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Errors raised by the catalog client.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Client id or secret is missing, or a configured URL is unusable.
    ///
    /// Raised before any network call is made.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The token endpoint refused the client credentials, or a renewal
    /// produced a token that is already stale.
    #[error("{message}")]
    Authentication {
        /// HTTP status returned by the token endpoint, if one was received.
        status: Option<u16>,
        message: String,
    },

    /// A search was issued without a query.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx response carried a body that could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A credential or token could not be carried in an HTTP header.
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl CatalogError {
    pub(crate) fn authentication(status: Option<u16>) -> Self {
        CatalogError::Authentication {
            status,
            message: "could not authenticate client".to_string(),
        }
    }

    /// Returns `true` for errors raised by the token endpoint handshake.
    pub fn is_authentication(&self) -> bool {
        matches!(self, CatalogError::Authentication { .. })
    }
}

/// Convenience alias for `Result<T, CatalogError>`.
pub type Result<T> = std::result::Result<T, CatalogError>;

use base64::{Engine, engine::general_purpose::STANDARD};
use tracing::debug;

use crate::{
    config,
    error::{CatalogError, Result},
};

/// Client id and secret of a registered Spotify application.
///
/// Both values are validated on construction and never change afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Validates and stores the client credentials.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Configuration`] if either value is absent or empty.
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Result<Self> {
        let client_id = require("client id", client_id)?;
        let client_secret = require("client secret", client_secret)?;
        Ok(Credentials {
            client_id,
            client_secret,
        })
    }

    /// Reads `SPOTIFY_API_AUTH_CLIENT_ID` and `SPOTIFY_API_AUTH_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::new(
            config::spotify_client_id(),
            config::spotify_client_secret(),
        )
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Base64 form of `client_id:client_secret`, ready for a Basic auth header.
    pub fn encode(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));
        debug!(client_id = %self.client_id, "client credentials encoded");
        encoded
    }
}

// Keeps the secret out of debug output and logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Encodes a client id and secret as the base64 text of `"{id}:{secret}"`.
///
/// The result is printable text meant for an `Authorization: Basic` header.
///
/// # Errors
///
/// Returns [`CatalogError::Configuration`] if either value is absent or empty.
///
/// # Example
///
/// ```
/// let encoded = encode_credentials(Some("id1"), Some("secret1"))?;
/// assert_eq!(encoded, "aWQxOnNlY3JldDE=");
/// ```
pub fn encode_credentials(client_id: Option<&str>, client_secret: Option<&str>) -> Result<String> {
    let credentials = Credentials::new(
        client_id.map(str::to_string),
        client_secret.map(str::to_string),
    )?;
    Ok(credentials.encode())
}

fn require(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CatalogError::Configuration(format!(
            "you must set the {name} before authenticating"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secret() {
        let creds = Credentials::new(Some("id".into()), Some("hunter2".into())).unwrap();
        let printed = format!("{creds:?}");
        assert!(printed.contains("id"));
        assert!(!printed.contains("hunter2"));
    }
}

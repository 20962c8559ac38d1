//! Configuration management for the Spotify catalog client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The core client never reads the environment on its
//! own; the values collected here are handed to it through [`ClientConfig`].
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::{error::Result, spotify::Credentials};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotcat/.env`. Variables already present in the
/// process environment are not overridden.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotcat/.env`
/// - macOS: `~/Library/Application Support/spotcat/.env`
/// - Windows: `%LOCALAPPDATA%/spotcat/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
///
/// A missing `.env` file is not an error; the process environment still applies.
pub async fn load_env() -> std::result::Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcat/.env");
    path
}

/// Returns the Spotify API client ID, if set.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_ID`, the client ID obtained when registering
/// the application with Spotify's developer platform. Absence is reported as a
/// configuration error once credentials are built from it.
pub fn spotify_client_id() -> Option<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").ok()
}

/// Returns the Spotify API client secret, if set.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_SECRET`.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Option<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET").ok()
}

/// Returns the Spotify Web API base URL, without a trailing slash.
///
/// Reads `SPOTIFY_API_URL` and falls back to `https://api.spotify.com`. The
/// API version is not part of the base; it is added per lookup.
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the client-credentials token endpoint.
///
/// Reads `SPOTIFY_API_TOKEN_URL` and falls back to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the HTTP timeout from `SPOTCAT_HTTP_TIMEOUT_SECS`.
///
/// Unset or unparsable values mean no timeout.
pub fn http_timeout() -> Option<Duration> {
    env::var("SPOTCAT_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|secs| secs.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Everything the catalog client needs at construction time.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub api_url: String,
    pub token_url: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Config pointing at the public Spotify endpoints.
    pub fn new(credentials: Credentials) -> Self {
        ClientConfig {
            credentials,
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: None,
        }
    }

    /// Builds the config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the client id or secret is missing.
    pub fn from_env() -> Result<Self> {
        Ok(ClientConfig {
            credentials: Credentials::from_env()?,
            api_url: spotify_api_url(),
            token_url: spotify_token_url(),
            timeout: http_timeout(),
        })
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

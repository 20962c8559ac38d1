//! # CLI Module
//!
//! This module provides the command-line interface layer for spotcat, a small
//! client for the Spotify catalog. It turns parsed arguments into calls on
//! [`SpotifyClient`] and renders the answers for a terminal.
//!
//! ## Command Categories
//!
//! - [`lookup`] - Fetches a single album, artist or track by id
//! - [`search`] - Searches the catalog by free text or `field:value` filters
//! - [`token`] - Authenticates and reports the token's expiry
//!
//! ## Error Handling
//!
//! Configuration and authentication failures terminate the program with an
//! error message. A lookup or search that finds nothing is only a warning.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotcat artist 4tZwfgrHOc3mvqYlEYSvVi
//! spotcat lookup 4aawyAB9vmqN3uQ7FjRGTy --kind albums --api-version v1
//! spotcat search --field artist="Daft Punk" --field year=2001 --type album
//! spotcat search "daft punk" --operator not --clause "remix" --type track
//! spotcat token
//! ```

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::ClientConfig, error, spotify::SpotifyClient};

mod lookup;
mod search;
mod token;

pub use lookup::lookup;
pub use search::search;
pub use token::token;

/// Builds a client from the environment or exits with an error message.
fn client() -> SpotifyClient {
    match ClientConfig::from_env().and_then(SpotifyClient::from_config) {
        Ok(client) => client,
        Err(e) => error!(
            "Cannot create Spotify client. Set SPOTIFY_API_AUTH_CLIENT_ID and SPOTIFY_API_AUTH_CLIENT_SECRET.\n Error: {}",
            e
        ),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

fn print_json(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Cannot render response as JSON. Err: {}", e),
    }
}

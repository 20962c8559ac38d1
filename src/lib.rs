//! Spotify Catalog Client Library
//!
//! This library provides client-credentials access to the Spotify catalog:
//! it authenticates as the application, caches and renews the bearer token,
//! and exposes typed lookup and search operations for albums, artists and
//! tracks.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by all operations
//! - `management` - Token lifecycle management
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Rendering helpers and argument parsers
//!
//! # Example
//!
//! ```
//! use spotcat::{config::ClientConfig, spotify::{Query, SpotifyClient}};
//!
//! #[tokio::main]
//! async fn main() -> spotcat::Result<()> {
//!     let client = SpotifyClient::from_config(ClientConfig::from_env()?)?;
//!     let album = client.get_album("4aawyAB9vmqN3uQ7FjRGTy").await?;
//!     let found = client
//!         .search(Some(&Query::fields([("artist", "Daft Punk")])), None, None, "artist")
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{CatalogError, Result};

/// Prints a status line prefixed with a blue `o`.
///
/// Accepts the same arguments as `println!`.
///
/// ```
/// info!("Found {} albums", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a confirmation line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` and exits with status 1.
///
/// Only the command-line layer uses this; library code returns
/// [`CatalogError`] instead. The macro diverges, so it can stand in for a
/// value in a `match` arm:
///
/// ```
/// let client = match ClientConfig::from_env() {
///     Ok(config) => config,
///     Err(e) => error!("Cannot load configuration. Err: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!`.
///
/// Used for outcomes that are not failures, such as a lookup that found
/// nothing.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

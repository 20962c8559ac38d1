use chrono::Utc;

use crate::{error, info, success};

/// Authenticates with the client credentials and prints the token's lifetime.
///
/// The token itself is shortened to its first characters.
pub async fn token() {
    let client = super::client();
    let tokens = client.token_manager();

    let pb = super::spinner("Requesting access token...");
    let result = tokens.get_valid_token().await;
    pb.finish_and_clear();

    let token = match result {
        Ok(t) => t,
        Err(e) => error!("Authentication failed. Err: {}", e),
    };

    let state = tokens.snapshot().await;
    let remaining = state.expires_at - Utc::now();

    success!("Authentication successful!");
    info!("Client: {}", tokens.credentials().client_id());
    info!("Token: {}…", token.chars().take(8).collect::<String>());
    info!(
        "Expires at {} (in {} minutes)",
        state.expires_at.format("%Y-%m-%d %H:%M:%S UTC"),
        remaining.num_minutes()
    );
}

use tracing::debug;

use crate::{
    error::{CatalogError, Result},
    spotify::{Credentials, Transport, headers},
    types::TokenResponse,
};

/// Form body of the OAuth2 client-credentials grant.
pub const CLIENT_CREDENTIALS_GRANT: [(&str, &str); 1] = [("grant_type", "client_credentials")];

/// Exchanges the client credentials for an access token.
///
/// POSTs `grant_type=client_credentials` to `token_url` with an
/// `Authorization: Basic <base64(id:secret)>` header and parses the
/// `access_token` / `expires_in` pair from the JSON answer.
///
/// # Arguments
///
/// * `transport` - HTTP capability used for the POST
/// * `token_url` - Token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `credentials` - Client id and secret of the registered application
///
/// # Errors
///
/// - [`CatalogError::Authentication`] if the endpoint answers outside 200..=299
/// - [`CatalogError::Json`] if a 2xx body lacks `access_token` or `expires_in`
/// - [`CatalogError::Http`] if the request never completed
///
/// Authentication failures are not retried here.
pub async fn request_client_token<T: Transport>(
    transport: &T,
    token_url: &str,
    credentials: &Credentials,
) -> Result<TokenResponse> {
    let headers = headers::basic_auth_headers(credentials)?;
    debug!(url = token_url, "requesting client-credentials token");

    let res = transport
        .post_form(token_url, &CLIENT_CREDENTIALS_GRANT, headers)
        .await?;

    if !res.is_success() {
        debug!(status = res.status.as_u16(), "token endpoint refused client");
        return Err(CatalogError::authentication(Some(res.status.as_u16())));
    }

    let token: TokenResponse = serde_json::from_value(res.body)?;
    debug!(expires_in = token.expires_in, "access token received");
    Ok(token)
}

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::{
    error::Result,
    management::TokenManager,
    spotify::{Credentials, Transport},
};

/// `Authorization: Basic <base64(id:secret)>`, used only for the token endpoint.
pub fn basic_auth_headers(credentials: &Credentials) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Basic {}", credentials.encode()))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

/// `Authorization: Bearer <token>` for resource and search calls.
///
/// Always goes through [`TokenManager::get_valid_token`], so every authorized
/// call is preceded by a freshness check and, if needed, a renewal.
pub async fn bearer_headers<T: Transport>(tokens: &TokenManager<T>) -> Result<HeaderMap> {
    let token = tokens.get_valid_token().await?;
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

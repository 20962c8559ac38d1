use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::{
    error::{CatalogError, Result},
    management::{Clock, SystemClock},
    spotify::{Credentials, Transport, auth},
    types::{Freshness, TokenState},
};

/// Renewals a single `get_valid_token` call may perform.
const MAX_RENEWALS_PER_CALL: usize = 1;

/// Owns the client-credentials token and its renewal protocol.
///
/// The token slot sits behind an async mutex that is held for the whole
/// check-expiry / authenticate / re-check sequence, so concurrent callers
/// sharing one manager never run two renewals against each other.
pub struct TokenManager<T: Transport> {
    transport: Arc<T>,
    credentials: Credentials,
    token_url: String,
    clock: Arc<dyn Clock>,
    state: Mutex<TokenState>,
}

impl<T: Transport> TokenManager<T> {
    pub fn new(transport: Arc<T>, credentials: Credentials, token_url: impl Into<String>) -> Self {
        Self::with_clock(transport, credentials, token_url, Arc::new(SystemClock))
    }

    pub fn with_clock(
        transport: Arc<T>,
        credentials: Credentials,
        token_url: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let state = TokenState::new(clock.now());
        TokenManager {
            transport,
            credentials,
            token_url: token_url.into(),
            clock,
            state: Mutex::new(state),
        }
    }

    /// Performs the client-credentials grant and replaces the cached token.
    ///
    /// Returns `Ok(true)` once a token has been stored. On any failure the
    /// cached token is left exactly as it was.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Authentication`] if the token endpoint answers with a
    /// non-2xx status. The call is not retried.
    pub async fn authenticate(&self) -> Result<bool> {
        let mut state = self.state.lock().await;
        self.renew(&mut state).await?;
        Ok(true)
    }

    /// Returns a token that is fresh at the time of the call.
    ///
    /// A stale or missing token triggers one renewal, after which freshness is
    /// checked again from scratch rather than trusting the new token. A fresh
    /// token is returned without any network traffic.
    ///
    /// # Errors
    ///
    /// Authentication errors propagate unchanged. If the renewed token is
    /// already stale, an authentication error is returned instead of renewing
    /// again.
    pub async fn get_valid_token(&self) -> Result<String> {
        let mut state = self.state.lock().await;

        for _ in 0..MAX_RENEWALS_PER_CALL {
            match state.freshness(self.clock.now()) {
                Freshness::Fresh(token) => return Ok(token.to_string()),
                Freshness::Expired => {
                    debug!(expires_at = %state.expires_at, "token is expired, requesting a new one")
                }
                Freshness::Missing => debug!("token is undefined, requesting a new one"),
            }
            self.renew(&mut state).await?;
        }

        if let Freshness::Fresh(token) = state.freshness(self.clock.now()) {
            return Ok(token.to_string());
        }

        Err(CatalogError::Authentication {
            status: None,
            message: "token endpoint issued an already expired token".to_string(),
        })
    }

    /// Copy of the current token slot, for diagnostics.
    pub async fn snapshot(&self) -> TokenState {
        self.state.lock().await.clone()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn renew(&self, state: &mut TokenState) -> Result<()> {
        let token =
            auth::request_client_token(self.transport.as_ref(), &self.token_url, &self.credentials)
                .await?;

        *state = TokenState::issued(token.access_token, token.expires_in, self.clock.now());
        debug!(expires_at = %state.expires_at, "authorization successful");
        Ok(())
    }
}

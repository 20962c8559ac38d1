use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::Result,
    management::TokenManager,
    spotify::{
        ReqwestTransport, Transport, headers,
        search::{self, Query},
    },
    types::ResourceKind,
};

pub const DEFAULT_API_VERSION: &str = "v1";

/// A JSON object returned by the catalog. Empty means "nothing for this request".
pub type Mapping = Map<String, Value>;

/// Lookup and search client for the Spotify catalog.
///
/// Every call is Bearer-authorized through the embedded [`TokenManager`]. A
/// response outside 200..=299 is answered with an empty [`Mapping`], never an
/// error: an empty mapping means "not found or declined", an `Err` means the
/// client itself is broken (bad credentials, network failure, bad payload).
pub struct SpotifyClient<T: Transport = ReqwestTransport> {
    transport: Arc<T>,
    tokens: TokenManager<T>,
    api_url: String,
}

impl SpotifyClient<ReqwestTransport> {
    /// Builds a client on a fresh reqwest transport.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::with_timeout(config.timeout)?);
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> SpotifyClient<T> {
    pub fn with_transport(transport: Arc<T>, config: ClientConfig) -> Self {
        let tokens = TokenManager::new(Arc::clone(&transport), config.credentials, config.token_url);
        Self::with_token_manager(transport, tokens, config.api_url)
    }

    /// Assembles a client around an existing token manager.
    ///
    /// The manager should share `transport`.
    pub fn with_token_manager(
        transport: Arc<T>,
        tokens: TokenManager<T>,
        api_url: impl Into<String>,
    ) -> Self {
        SpotifyClient {
            transport,
            tokens,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn token_manager(&self) -> &TokenManager<T> {
        &self.tokens
    }

    /// Fetches `GET {api_url}/{version}/{kind}/{id}`.
    ///
    /// # Returns
    ///
    /// The resource as a JSON object, or an empty mapping if the API answered
    /// outside 200..=299.
    ///
    /// # Errors
    ///
    /// Authentication and transport failures propagate.
    pub async fn lookup(&self, id: &str, kind: ResourceKind, version: &str) -> Result<Mapping> {
        let endpoint = format!(
            "{base}/{version}/{kind}/{id}",
            base = self.api_url,
            kind = kind.as_path()
        );
        let headers = headers::bearer_headers(&self.tokens).await?;

        debug!(%endpoint, "looking up resource");
        let res = self.transport.get(&endpoint, headers).await?;
        if !res.is_success() {
            warn!(status = res.status.as_u16(), %endpoint, "lookup returned no resource");
            return Ok(Mapping::new());
        }

        into_mapping(res.body)
    }

    pub async fn get_album(&self, id: &str) -> Result<Mapping> {
        self.lookup(id, ResourceKind::Albums, DEFAULT_API_VERSION).await
    }

    pub async fn get_artist(&self, id: &str) -> Result<Mapping> {
        self.lookup(id, ResourceKind::Artists, DEFAULT_API_VERSION).await
    }

    pub async fn get_track(&self, id: &str) -> Result<Mapping> {
        self.lookup(id, ResourceKind::Tracks, DEFAULT_API_VERSION).await
    }

    /// Runs `GET {api_url}/v1/search?{query_params}` with already-encoded params.
    pub async fn base_search(&self, query_params: &str) -> Result<Mapping> {
        let headers = headers::bearer_headers(&self.tokens).await?;
        let lookup_url = format!(
            "{base}/{DEFAULT_API_VERSION}/search?{query_params}",
            base = self.api_url
        );

        debug!(%lookup_url, "sending search request");
        let res = self.transport.get(&lookup_url, headers).await?;
        if !res.is_success() {
            warn!(status = res.status.as_u16(), "search returned no results");
            return Ok(Mapping::new());
        }

        into_mapping(res.body)
    }

    /// Compiles the query (see [`search::compile`]) and runs it.
    ///
    /// # Errors
    ///
    /// [`CatalogError::InvalidQuery`](crate::error::CatalogError::InvalidQuery)
    /// before any network call if `query` is `None`; authentication and
    /// transport failures otherwise.
    pub async fn search(
        &self,
        query: Option<&Query>,
        operator: Option<&str>,
        operator_clause: Option<&Value>,
        search_type: &str,
    ) -> Result<Mapping> {
        let query_params = search::compile(query, operator, operator_clause, search_type)?;
        self.base_search(&query_params).await
    }
}

// 204 and other empty 2xx bodies count as "nothing".
fn into_mapping(body: Value) -> Result<Mapping> {
    match body {
        Value::Null => Ok(Mapping::new()),
        other => Ok(serde_json::from_value(other)?),
    }
}

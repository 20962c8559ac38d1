//! # Spotify Integration Module
//!
//! This module is the protocol layer between spotcat and the Spotify Web API.
//! It implements the client-credentials handshake, the headers that carry it,
//! the search query compiler, and the lookup/search client built on top.
//!
//! ## Architecture
//!
//! ```text
//! CLI (cli)
//!          ↓
//! Resource Client (catalog)  ── Search Query Compiler (search)
//!          ↓
//! Authorized Request Builder (headers)
//!          ↓
//! Token Manager (management::TokenManager)
//!          ↓
//! Token Endpoint (auth) ── Credential Encoder (credentials)
//!          ↓
//! HTTP capability (transport)
//! ```
//!
//! ## Authentication Strategy
//!
//! The client authenticates as the application itself (OAuth 2.0 client
//! credentials), so there is no user, no browser and no refresh token:
//!
//! 1. **Encode**: `client_id:client_secret` is base64-encoded for a Basic header
//! 2. **Grant**: `grant_type=client_credentials` is POSTed to the token endpoint
//! 3. **Cache**: The access token and its expiry are kept in memory only
//! 4. **Renew**: A stale token is replaced transparently before the next call
//!
//! ## Error Handling
//!
//! - **Token endpoint non-2xx**: `CatalogError::Authentication`, never retried here
//! - **Lookup/search non-2xx**: an empty mapping, with the status logged
//! - **Missing credentials / query**: rejected before any network traffic
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Client-credentials grant
//! - `GET /{version}/{albums|artists|tracks}/{id}` - Resource lookup
//! - `GET /v1/search?q=...&type=...` - Catalog search

pub mod auth;
pub mod catalog;
pub mod credentials;
pub mod headers;
pub mod search;
pub mod transport;

pub use catalog::{DEFAULT_API_VERSION, Mapping, SpotifyClient};
pub use credentials::{Credentials, encode_credentials};
pub use search::{CompiledQuery, Operator, OperatorOutcome, Query};
pub use transport::{HttpResponse, ReqwestTransport, Transport};

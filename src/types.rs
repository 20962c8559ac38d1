use std::{fmt, str::FromStr};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// In-memory slot for the client-credentials bearer token.
///
/// Starts out empty with `expires_at` set to the creation instant, so the very
/// first freshness check already sees it as stale. Only the token manager
/// replaces it, and only after a fully parsed token response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenState {
    pub access_token: Option<String>,
    pub expires_at: DateTime<Utc>,
    /// Snapshot taken when the token was issued. Never recomputed, so it is
    /// diagnostic only; freshness is always checked against the clock.
    pub is_expired: bool,
}

impl TokenState {
    pub fn new(now: DateTime<Utc>) -> Self {
        TokenState {
            access_token: None,
            expires_at: now,
            is_expired: true,
        }
    }

    /// Builds the state for a token issued at `now` that lives `expires_in` seconds.
    pub fn issued(access_token: String, expires_in: u64, now: DateTime<Utc>) -> Self {
        let expires_at = i64::try_from(expires_in)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        TokenState {
            access_token: Some(access_token),
            expires_at,
            is_expired: expires_at < now,
        }
    }

    /// Classifies the slot against the wall clock reading `now`.
    ///
    /// Expiry is checked before presence: a token whose `expires_at` is at or
    /// before `now` is stale even if a token string is cached.
    pub fn freshness(&self, now: DateTime<Utc>) -> Freshness<'_> {
        if self.expires_at <= now {
            return Freshness::Expired;
        }

        match self.access_token.as_deref() {
            Some(token) => Freshness::Fresh(token),
            None => Freshness::Missing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness<'a> {
    Expired,
    Missing,
    Fresh(&'a str),
}

/// Body returned by the client-credentials token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Catalog entity category, addressed by its plural path segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    #[default]
    Albums,
    Artists,
    Tracks,
}

impl ResourceKind {
    pub fn as_path(&self) -> &'static str {
        match self {
            ResourceKind::Albums => "albums",
            ResourceKind::Artists => "artists",
            ResourceKind::Tracks => "tracks",
        }
    }

    /// Singular form used as the `type` parameter of a search.
    pub fn search_type(&self) -> &'static str {
        match self {
            ResourceKind::Albums => "album",
            ResourceKind::Artists => "artist",
            ResourceKind::Tracks => "track",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "album" | "albums" => Ok(ResourceKind::Albums),
            "artist" | "artists" => Ok(ResourceKind::Artists),
            "track" | "tracks" => Ok(ResourceKind::Tracks),
            other => Err(format!(
                "unknown resource kind '{other}', expected one of: albums, artists, tracks"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub album_type: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackSummary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SimplifiedArtist>,
    #[serde(default)]
    pub album: Option<AlbumSummary>,
    #[serde(default)]
    pub duration_ms: u64,
}

/// One result page inside a search response, e.g. the `artists` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub artists: Option<Paging<ArtistSummary>>,
    #[serde(default)]
    pub albums: Option<Paging<AlbumSummary>>,
    #[serde(default)]
    pub tracks: Option<Paging<TrackSummary>>,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub genres: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    pub date: String,
    pub name: String,
    pub artists: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub length: String,
    pub id: String,
}

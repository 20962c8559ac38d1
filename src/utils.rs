use serde_json::Value;

use crate::{
    spotify::Mapping,
    types::{
        AlbumSummary, AlbumTableRow, ArtistSummary, ArtistTableRow, SearchResults,
        SimplifiedArtist, TrackSummary, TrackTableRow,
    },
};

/// clap value parser for `--field key=value`.
///
/// `key:value` is accepted as well, matching how fields appear in a query.
pub fn parse_field(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .or_else(|| s.split_once(':'))
        .ok_or_else(|| format!("invalid field '{s}', expected key=value"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid field '{s}', key must not be empty"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Formats milliseconds as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn join_artist_names(artists: &[SimplifiedArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Leniently reads the search pages out of a raw search mapping.
///
/// Pages that fail to parse are treated as absent.
pub fn search_results(mapping: &Mapping) -> SearchResults {
    let page = |key: &str| mapping.get(key).cloned().unwrap_or(Value::Null);
    SearchResults {
        artists: serde_json::from_value(page("artists")).ok(),
        albums: serde_json::from_value(page("albums")).ok(),
        tracks: serde_json::from_value(page("tracks")).ok(),
    }
}

pub fn artist_rows(artists: Vec<ArtistSummary>) -> Vec<ArtistTableRow> {
    artists
        .into_iter()
        .map(|a| ArtistTableRow {
            name: a.name,
            genres: a
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
            id: a.id,
        })
        .collect()
}

pub fn album_rows(albums: Vec<AlbumSummary>) -> Vec<AlbumTableRow> {
    albums
        .into_iter()
        .map(|a| AlbumTableRow {
            date: a.release_date,
            artists: join_artist_names(&a.artists),
            name: a.name,
            id: a.id,
        })
        .collect()
}

pub fn track_rows(tracks: Vec<TrackSummary>) -> Vec<TrackTableRow> {
    tracks
        .into_iter()
        .map(|t| TrackTableRow {
            artists: join_artist_names(&t.artists),
            album: t.album.map(|a| a.name).unwrap_or_default(),
            length: format_duration(t.duration_ms),
            name: t.name,
            id: t.id,
        })
        .collect()
}

/// Number of items across all pages of a search mapping.
pub fn count_search_items(results: &SearchResults) -> usize {
    results.artists.as_ref().map_or(0, |p| p.items.len())
        + results.albums.as_ref().map_or(0, |p| p.items.len())
        + results.tracks.as_ref().map_or(0, |p| p.items.len())
}

use serde::de::DeserializeOwned;
use serde_json::Value;
use tabled::Table;

use crate::{
    error,
    spotify::Mapping,
    types::{AlbumSummary, ArtistSummary, ResourceKind, TrackSummary},
    utils, warning,
};

/// Looks up one catalog resource and prints it.
///
/// An empty answer (unknown id, or any non-2xx status) is reported as a
/// warning. Authentication and network failures terminate the program.
///
/// # Arguments
///
/// * `id` - Spotify id of the resource
/// * `kind` - Which collection to look in
/// * `version` - API version path segment, usually `v1`
/// * `json` - Print the raw JSON object instead of a table
pub async fn lookup(id: String, kind: ResourceKind, version: String, json: bool) {
    let client = super::client();

    let pb = super::spinner(&format!("Looking up {} {}...", kind.search_type(), id));
    let result = client.lookup(&id, kind, &version).await;
    pb.finish_and_clear();

    let mapping = match result {
        Ok(m) => m,
        Err(e) => error!("Lookup failed. Err: {}", e),
    };

    if mapping.is_empty() {
        warning!("Nothing found for {} {}.", kind.search_type(), id);
        return;
    }

    if json {
        super::print_json(&mapping);
        return;
    }

    let table = match kind {
        ResourceKind::Albums => Table::new(utils::album_rows(vec![summary::<AlbumSummary>(mapping)])),
        ResourceKind::Artists => {
            Table::new(utils::artist_rows(vec![summary::<ArtistSummary>(mapping)]))
        }
        ResourceKind::Tracks => Table::new(utils::track_rows(vec![summary::<TrackSummary>(mapping)])),
    };
    println!("{}", table);
}

fn summary<T: DeserializeOwned + Default>(mapping: Mapping) -> T {
    serde_json::from_value(Value::Object(mapping)).unwrap_or_default()
}

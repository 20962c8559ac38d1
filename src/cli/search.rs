use serde_json::Value;
use tabled::Table;

use crate::{error, info, spotify::Query, utils, warning};

/// Searches the catalog and prints one table per result page.
///
/// Either `query` (used verbatim) or `fields` (`key:value` filters, in the
/// order given) is used; fields win if both are present. The operator and
/// clause are passed through untouched, so an unknown operator is silently
/// dropped from the query exactly as the library does it.
pub async fn search(
    query: Option<String>,
    fields: Vec<(String, String)>,
    operator: Option<String>,
    clause: Option<String>,
    search_type: String,
    json: bool,
) {
    let query = if fields.is_empty() {
        query.map(Query::Text)
    } else {
        Some(Query::fields(fields))
    };
    let clause = clause.map(Value::String);

    let client = super::client();

    let pb = super::spinner("Searching catalog...");
    let result = client
        .search(
            query.as_ref(),
            operator.as_deref(),
            clause.as_ref(),
            &search_type,
        )
        .await;
    pb.finish_and_clear();

    let mapping = match result {
        Ok(m) => m,
        Err(e) => error!("Search failed. Err: {}", e),
    };

    if json {
        super::print_json(&mapping);
        return;
    }

    let results = utils::search_results(&mapping);
    if utils::count_search_items(&results) == 0 {
        warning!("Nothing found.");
        return;
    }

    if let Some(page) = results.artists.filter(|p| !p.items.is_empty()) {
        info!("Artists ({} total)", page.total.unwrap_or(page.items.len() as u64));
        println!("{}", Table::new(utils::artist_rows(page.items)));
    }
    if let Some(page) = results.albums.filter(|p| !p.items.is_empty()) {
        info!("Albums ({} total)", page.total.unwrap_or(page.items.len() as u64));
        println!("{}", Table::new(utils::album_rows(page.items)));
    }
    if let Some(page) = results.tracks.filter(|p| !p.items.is_empty()) {
        info!("Tracks ({} total)", page.total.unwrap_or(page.items.len() as u64));
        println!("{}", Table::new(utils::track_rows(page.items)));
    }
}

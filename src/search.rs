use tracing::{debug, info, warn};

use crate::{
    error::SearchError,
    itunes::{ItunesClient, ItunesPodcast},
    models::{NewPodcast, SearchOutcome, SkippedPodcast},
    store::PodcastStore,
};

/// Searches iTunes for `term` and saves every match that is not stored yet.
///
/// The term is forwarded and echoed exactly as given; only an absent or empty
/// term is rejected. Items are decoded and persisted one at a time. A failure
/// on one item is logged and recorded in `skipped`; only a missing term or a
/// failed upstream call aborts the search, and neither touches the store.
pub async fn search_and_persist(
    itunes: &ItunesClient,
    store: &PodcastStore,
    term: Option<&str>,
) -> Result<SearchOutcome, SearchError> {
    let term = term.filter(|t| !t.is_empty()).ok_or(SearchError::MissingTerm)?;

    info!(term = %term, "searching podcasts");

    let resp = itunes.search(term).await?;

    info!(term = %term, result_count = resp.result_count, "itunes returned results");

    let mut outcome =
        SearchOutcome { term: term.to_string(), saved: Vec::new(), skipped: Vec::new() };

    for value in resp.results {
        let raw_id = value.get("collectionId").and_then(serde_json::Value::as_i64);
        let item: ItunesPodcast = match serde_json::from_value(value) {
            Ok(item) => item,
            Err(err) => {
                warn!(collection_id = ?raw_id, error = %err, "skipping malformed result");
                outcome
                    .skipped
                    .push(SkippedPodcast { collection_id: raw_id, reason: err.to_string() });
                continue;
            },
        };

        let Some(new) = NewPodcast::from_result(&item) else {
            warn!(term = %term, "skipping result without collection id");
            outcome.skipped.push(SkippedPodcast {
                collection_id: None,
                reason: "missing collectionId".to_string(),
            });
            continue;
        };

        let collection_id = new.collection_id;
        match store.upsert(new).await {
            Ok(podcast) => {
                debug!(collection_id, id = podcast.id, "podcast saved");
                outcome.saved.push(podcast);
            },
            Err(err) => {
                warn!(collection_id, error = %err, "failed to save podcast");
                outcome.skipped.push(SkippedPodcast {
                    collection_id: Some(collection_id),
                    reason: err.to_string(),
                });
            },
        }
    }

    info!(
        term = %term,
        saved = outcome.saved.len(),
        skipped = outcome.skipped.len(),
        "saved podcasts to database"
    );

    Ok(outcome)
}

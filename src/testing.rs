//! Fixtures shared by the unit tests.

use std::{sync::Arc, time::Duration};

use sea_orm::{ConnectionTrait, Statement};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use crate::{AppState, itunes::ItunesClient, store::PodcastStore};

pub fn sqlite_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("podsearch.db").display())
}

/// A migrated store in a fresh temp dir. Keep the `TempDir` alive for the
/// duration of the test.
pub async fn temp_store() -> (TempDir, PodcastStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = PodcastStore::open(&sqlite_url(&dir)).await.unwrap();
    (dir, store)
}

/// Installs a trigger that aborts any insert of `collection_id`.
pub async fn reject_inserts_of(store: &PodcastStore, collection_id: i64) {
    let db = store.db();
    let sql = format!(
        "CREATE TRIGGER reject_{collection_id} BEFORE INSERT ON podcasts \
         WHEN NEW.collection_id = {collection_id} \
         BEGIN SELECT RAISE(ABORT, 'insert rejected'); END"
    );
    db.execute(Statement::from_string(db.get_database_backend(), sql)).await.unwrap();
}

pub fn itunes_client(server: &MockServer) -> ItunesClient {
    ItunesClient::new(reqwest::Client::new(), server.uri(), Duration::from_millis(500))
}

pub fn itunes_result(collection_id: i64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "collectionId": collection_id,
        "trackName": name,
        "collectionName": name,
        "artistName": "Formula 1",
        "artworkUrl100": format!("https://example.com/{collection_id}.jpg"),
        "trackViewUrl": format!("https://podcasts.apple.com/p/{collection_id}"),
        "primaryGenreName": "Motorsport"
    })
}

/// Mounts a `/search` mock for `term` answering with `results`.
pub async fn mock_search(server: &MockServer, term: &str, results: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("term", term))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultCount": results.len(),
            "results": results,
        })))
        .mount(server)
        .await;
}

pub fn formula_one_results() -> Vec<serde_json::Value> {
    vec![
        itunes_result(1_001, "F1: Beyond The Grid"),
        itunes_result(1_002, "The F1 Show"),
        itunes_result(1_003, "Formula 1 Daily"),
    ]
}

pub fn app_state(server: &MockServer, store: PodcastStore) -> Arc<AppState> {
    Arc::new(AppState {
        itunes: Arc::new(itunes_client(server)),
        store,
    })
}

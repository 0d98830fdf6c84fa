use std::time::Duration;

use serde::Deserialize;

/// Number of matches requested per search.
pub const SEARCH_LIMIT: u32 = 5;

pub struct ItunesClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ItunesClient {
    pub fn new(client: reqwest::Client, base_url: String, timeout: Duration) -> Self {
        Self { client, base_url, timeout }
    }

    /// Looks up podcasts matching `term`. Any failure, including a timeout or
    /// a non-2xx status, is returned as the underlying `reqwest::Error`.
    pub async fn search(&self, term: &str) -> Result<ItunesSearchResponse, reqwest::Error> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));

        self.client
            .get(url)
            .query(&[("term", term), ("media", "podcast"), ("entity", "podcast")])
            .query(&[("limit", SEARCH_LIMIT)])
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

/// Results stay untyped so one malformed record cannot fail the whole response;
/// each is decoded into an [`ItunesPodcast`] on its own.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItunesSearchResponse {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItunesPodcast {
    pub collection_id: Option<i64>,
    pub track_name: Option<String>,
    pub collection_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url100: Option<String>,
    pub track_view_url: Option<String>,
    pub primary_genre_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::*;

    fn client(server: &MockServer, timeout: Duration) -> ItunesClient {
        ItunesClient::new(reqwest::Client::new(), server.uri(), timeout)
    }

    #[tokio::test]
    async fn sends_podcast_filters_and_parses_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("term", "Formula 1"))
            .and(query_param("media", "podcast"))
            .and(query_param("entity", "podcast"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "resultCount": 1,
                "results": [{
                    "wrapperType": "track",
                    "collectionId": 1_234,
                    "trackName": "F1: Beyond The Grid",
                    "artistName": "Formula 1",
                    "artworkUrl100": "https://example.com/art.jpg",
                    "primaryGenreName": "Motorsport"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let resp = client(&server, Duration::from_secs(5)).search("Formula 1").await.unwrap();

        assert_eq!(resp.result_count, 1);
        let first: ItunesPodcast = serde_json::from_value(resp.results[0].clone()).unwrap();
        assert_eq!(first.collection_id, Some(1_234));
        assert_eq!(first.artwork_url100.as_deref(), Some("https://example.com/art.jpg"));
        assert_eq!(first.track_view_url, None);
    }

    #[tokio::test]
    async fn tolerates_missing_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let resp = client(&server, Duration::from_secs(5)).search("nothing").await.unwrap();
        assert_eq!(resp.result_count, 0);
        assert!(resp.results.is_empty());
    }

    #[tokio::test]
    async fn malformed_record_does_not_fail_the_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "resultCount": 2,
                "results": [
                    { "collectionId": 1, "trackName": "Fine" },
                    { "collectionId": 2, "artworkUrl100": 123 }
                ]
            })))
            .mount(&server)
            .await;

        let resp = client(&server, Duration::from_secs(5)).search("x").await.unwrap();

        assert_eq!(resp.results.len(), 2);
        assert!(serde_json::from_value::<ItunesPodcast>(resp.results[0].clone()).is_ok());
        assert!(serde_json::from_value::<ItunesPodcast>(resp.results[1].clone()).is_err());
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server, Duration::from_secs(5)).search("x").await.unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn error_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server, Duration::from_secs(5)).search("x").await.unwrap_err();
        assert!(err.is_status());
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "resultCount": 0, "results": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let err = client(&server, Duration::from_millis(100)).search("x").await.unwrap_err();
        assert!(err.is_timeout());
    }
}

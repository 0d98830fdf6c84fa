use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{entities::podcast, error::AppError, itunes::ItunesPodcast};

pub const UNKNOWN_TITLE: &str = "Unknown";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// A podcast as stored locally, in the shape the JSON API returns.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Podcast {
    pub id: i32,
    pub collection_id: i64,
    pub track_name: String,
    pub artist_name: String,
    pub artwork_url100: Option<String>,
    pub track_view_url: Option<String>,
    pub primary_genre_name: Option<String>,
    pub created_at: Timestamp,
}

impl TryFrom<podcast::Model> for Podcast {
    type Error = AppError;

    fn try_from(row: podcast::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            collection_id: row.collection_id,
            track_name: row.track_name,
            artist_name: row.artist_name,
            artwork_url100: row.artwork_url100,
            track_view_url: row.track_view_url,
            primary_genre_name: row.primary_genre_name,
            created_at: Timestamp::from_second(row.created_at)?,
        })
    }
}

/// Insert payload for a podcast seen for the first time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPodcast {
    pub collection_id: i64,
    pub track_name: String,
    pub artist_name: String,
    pub artwork_url100: Option<String>,
    pub track_view_url: Option<String>,
    pub primary_genre_name: Option<String>,
}

impl NewPodcast {
    /// Applies the display defaults to an upstream record.
    ///
    /// Title is the first non-empty of `trackName`, `collectionName`, then
    /// [`UNKNOWN_TITLE`]. Publisher is a non-empty `artistName`, else
    /// [`UNKNOWN_ARTIST`]. Records without a `collectionId` cannot be keyed
    /// and are rejected with `None`.
    pub fn from_result(item: &ItunesPodcast) -> Option<Self> {
        let collection_id = item.collection_id?;

        let track_name =
            first_present([item.track_name.as_deref(), item.collection_name.as_deref()])
                .unwrap_or(UNKNOWN_TITLE);
        let artist_name = first_present([item.artist_name.as_deref()]).unwrap_or(UNKNOWN_ARTIST);

        Some(Self {
            collection_id,
            track_name: track_name.to_string(),
            artist_name: artist_name.to_string(),
            artwork_url100: item.artwork_url100.clone(),
            track_view_url: item.track_view_url.clone(),
            primary_genre_name: item.primary_genre_name.clone(),
        })
    }
}

fn first_present<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// An upstream record that did not make it into the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedPodcast {
    pub collection_id: Option<i64>,
    pub reason: String,
}

#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub term: String,
    pub saved: Vec<Podcast>,
    pub skipped: Vec<SkippedPodcast>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub term: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Podcast>,
    pub search_term: String,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            success: true,
            count: outcome.saved.len(),
            data: outcome.saved,
            search_term: outcome.term,
        }
    }
}

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::types::{SavedTrackItem, TrackArtist, TrackRecord};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Joins multi-artist credits the way the snapshot stores them.
pub fn join_artists(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Projects a saved-track API item into a snapshot row.
pub fn project_record(item: &SavedTrackItem) -> TrackRecord {
    let track = &item.track;

    TrackRecord {
        track_name: track.name.clone(),
        artist_names: join_artists(&track.artists),
        album: Some(track.album.name.clone()),
        added_at: Some(item.added_at.clone()),
        release_date: track.album.release_date.clone(),
        duration_ms: track.duration_ms,
        explicit: track.explicit,
        popularity: track.popularity,
        spotify_id: Some(track.id.clone()),
        spotify_uri: Some(track.uri.clone()),
        spotify_url: track.external_urls.spotify.clone(),
    }
}

/// How a snapshot row maps onto a track URI.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The row already carries a URI; no search call needed.
    Direct(String),
    /// The row has to be resolved through a search with this query.
    Search(String),
}

/// Decides how a row gets resolved: an embedded URI wins, otherwise a
/// title-plus-artists search query is formed.
pub fn plan_resolution(record: &TrackRecord) -> Resolution {
    match &record.spotify_uri {
        Some(uri) if !uri.trim().is_empty() => Resolution::Direct(uri.clone()),
        _ => Resolution::Search(search_query(record)),
    }
}

pub fn search_query(record: &TrackRecord) -> String {
    format!("{} {}", record.track_name, record.artist_names)
}

/// The human-readable form a row takes in the unresolved report.
pub fn unresolved_label(record: &TrackRecord) -> String {
    format!("{} by {}", record.track_name, record.artist_names)
}

/// Default timestamped snapshot filename, e.g. `liked_songs_20240131_093000.csv`.
pub fn default_snapshot_name(now: DateTime<Utc>) -> String {
    format!("liked_songs_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

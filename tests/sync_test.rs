use std::time::Duration;

use likedcli::sync::{self, FetchPage, SearchTracks};
use likedcli::types::TrackRecord;

fn create_test_record(name: &str, artists: &str) -> TrackRecord {
    TrackRecord {
        track_name: name.to_string(),
        artist_names: artists.to_string(),
        album: None,
        added_at: None,
        release_date: None,
        duration_ms: None,
        explicit: None,
        popularity: None,
        spotify_id: None,
        spotify_uri: None,
        spotify_url: None,
    }
}

fn create_test_record_with_uri(name: &str, artists: &str, uri: &str) -> TrackRecord {
    TrackRecord {
        spotify_uri: Some(uri.to_string()),
        ..create_test_record(name, artists)
    }
}

// In-memory saved-tracks collection that counts page requests
struct FakeLibrary {
    tracks: Vec<String>,
    requests: u64,
    fail_at_offset: Option<u64>,
}

impl FakeLibrary {
    fn new(count: usize) -> Self {
        FakeLibrary {
            tracks: (0..count).map(|i| format!("track-{}", i)).collect(),
            requests: 0,
            fail_at_offset: None,
        }
    }
}

impl FetchPage for FakeLibrary {
    type Item = String;
    type Error = String;

    async fn fetch(&mut self, offset: u64, limit: u32) -> Result<Vec<String>, String> {
        self.requests += 1;
        if self.fail_at_offset == Some(offset) {
            return Err(format!("bad gateway at offset {}", offset));
        }

        let start = (offset as usize).min(self.tracks.len());
        let end = (start + limit as usize).min(self.tracks.len());
        Ok(self.tracks[start..end].to_vec())
    }
}

// Search stub scripted per query: hits, misses, and transport errors
struct ScriptedSearcher {
    queries: Vec<String>,
}

impl ScriptedSearcher {
    fn new() -> Self {
        ScriptedSearcher {
            queries: Vec::new(),
        }
    }
}

impl SearchTracks for ScriptedSearcher {
    type Error = String;

    async fn search(&mut self, query: &str) -> Result<Option<String>, String> {
        self.queries.push(query.to_string());
        if query.starts_with("Song A") {
            Ok(Some("spotify:track:a".to_string()))
        } else if query.starts_with("Song B") {
            Ok(None)
        } else {
            Err("socket closed".to_string())
        }
    }
}

#[tokio::test]
async fn test_collect_paged_stops_on_empty_page() {
    // 12 items at page size 5 -> pages of 5, 5, 2, then the empty page
    let mut library = FakeLibrary::new(12);
    let items = sync::collect_paged(&mut library, 5, |_| {}).await.unwrap();

    assert_eq!(items.len(), 12);
    assert_eq!(library.requests, 4);

    // Received order is preserved across page boundaries
    let expected: Vec<String> = (0..12).map(|i| format!("track-{}", i)).collect();
    assert_eq!(items, expected);
}

#[tokio::test]
async fn test_collect_paged_exact_multiple_needs_trailing_empty_page() {
    // 10 items at page size 5: the loop cannot know the collection is
    // drained until a third request comes back empty
    let mut library = FakeLibrary::new(10);
    let items = sync::collect_paged(&mut library, 5, |_| {}).await.unwrap();

    assert_eq!(items.len(), 10);
    assert_eq!(library.requests, 3);
}

#[tokio::test]
async fn test_collect_paged_empty_collection() {
    let mut library = FakeLibrary::new(0);
    let items = sync::collect_paged(&mut library, 50, |_| {}).await.unwrap();

    assert!(items.is_empty());
    assert_eq!(library.requests, 1);
}

#[tokio::test]
async fn test_collect_paged_propagates_fetch_error() {
    let mut library = FakeLibrary::new(12);
    library.fail_at_offset = Some(5);

    let result = sync::collect_paged(&mut library, 5, |_| {}).await;
    assert_eq!(result, Err("bad gateway at offset 5".to_string()));
    assert_eq!(library.requests, 2);
}

#[tokio::test]
async fn test_collect_paged_reports_running_count() {
    let mut library = FakeLibrary::new(12);
    let mut counts = Vec::new();
    sync::collect_paged(&mut library, 5, |n| counts.push(n))
        .await
        .unwrap();

    assert_eq!(counts, vec![5, 10, 12]);
}

#[tokio::test]
async fn test_resolve_records_isolates_single_search_failure() {
    let records = vec![
        create_test_record("Song A", "Artist X"),
        create_test_record("Song C", "Artist Z"),
        create_test_record("Song B", "Artist Y"),
        create_test_record_with_uri("Song D", "Artist W", "spotify:track:d"),
    ];

    let mut searcher = ScriptedSearcher::new();
    let (uris, unresolved) =
        sync::resolve_records(&mut searcher, &records, Duration::ZERO, |_| {}).await;

    // The Song C transport error degrades only that row; the rows after it
    // still resolve
    assert_eq!(uris, vec!["spotify:track:a", "spotify:track:d"]);
    let names: Vec<&str> = unresolved.iter().map(|r| r.track_name.as_str()).collect();
    assert_eq!(names, vec!["Song C", "Song B"]);
    assert_eq!(searcher.queries.len(), 3);
}

#[tokio::test]
async fn test_resolve_records_direct_uris_skip_search() {
    let records = vec![
        create_test_record_with_uri("Song A", "Artist X", "spotify:track:a"),
        create_test_record_with_uri("Song B", "Artist Y", "spotify:track:b"),
    ];

    let mut searcher = ScriptedSearcher::new();
    let (uris, unresolved) =
        sync::resolve_records(&mut searcher, &records, Duration::ZERO, |_| {}).await;

    assert_eq!(uris, vec!["spotify:track:a", "spotify:track:b"]);
    assert!(unresolved.is_empty());
    assert!(searcher.queries.is_empty());
}

#[tokio::test]
async fn test_resolve_records_miss_keeps_label_fields() {
    let records = vec![
        create_test_record("Song A", "Artist X"),
        create_test_record("Song B", "Artist Y"),
    ];

    let mut searcher = ScriptedSearcher::new();
    let (uris, unresolved) =
        sync::resolve_records(&mut searcher, &records, Duration::ZERO, |_| {}).await;

    assert_eq!(uris, vec!["spotify:track:a"]);
    assert_eq!(unresolved.len(), 1);
    assert_eq!(
        likedcli::utils::unresolved_label(&unresolved[0]),
        "Song B by Artist Y"
    );
}

#[test]
fn test_partition_batches_chunks_and_preserves_order() {
    let uris: Vec<String> = (0..250).map(|i| format!("spotify:track:{}", i)).collect();
    let batches = sync::partition_batches(&uris, 100);

    assert_eq!(batches.len(), 3);
    let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![100, 100, 50]);
    assert!(batches.iter().all(|b| b.len() <= 100));

    // Concatenating the batches in call order restores the input sequence
    assert_eq!(batches.concat(), uris);
}

#[test]
fn test_partition_batches_boundaries() {
    let empty: Vec<String> = Vec::new();
    assert!(sync::partition_batches(&empty, 100).is_empty());

    let exactly_one: Vec<String> = (0..100).map(|i| format!("spotify:track:{}", i)).collect();
    assert_eq!(sync::partition_batches(&exactly_one, 100).len(), 1);

    let one_over: Vec<String> = (0..101).map(|i| format!("spotify:track:{}", i)).collect();
    let batches = sync::partition_batches(&one_over, 100);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[1].len(), 1);
}

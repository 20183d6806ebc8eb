use chrono::{TimeZone, Utc};
use likedcli::types::{ExternalUrls, SavedTrackItem, TrackAlbum, TrackArtist, TrackObject, TrackRecord};
use likedcli::utils::*;

// Helper function to create a snapshot row without any optional fields
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

fn create_test_artist(id: &str, name: &str) -> TrackArtist {
    TrackArtist {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // Should not be empty
    assert!(!challenge.is_empty());

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_join_artists() {
    let single = vec![create_test_artist("id1", "Artist X")];
    assert_eq!(join_artists(&single), "Artist X");

    let multiple = vec![
        create_test_artist("id1", "Artist X"),
        create_test_artist("id2", "Artist Y"),
        create_test_artist("id3", "Artist Z"),
    ];
    assert_eq!(join_artists(&multiple), "Artist X, Artist Y, Artist Z");

    assert_eq!(join_artists(&[]), "");
}

#[test]
fn test_project_record() {
    let item = SavedTrackItem {
        added_at: "2023-10-17T08:00:00Z".to_string(),
        track: TrackObject {
            id: "track123".to_string(),
            name: "Song A".to_string(),
            uri: "spotify:track:track123".to_string(),
            artists: vec![
                create_test_artist("a1", "Artist X"),
                create_test_artist("a2", "Artist Y"),
            ],
            album: TrackAlbum {
                name: "Album A".to_string(),
                release_date: Some("2023-09-01".to_string()),
            },
            duration_ms: Some(215000),
            explicit: Some(false),
            popularity: Some(64),
            external_urls: ExternalUrls {
                spotify: Some("https://open.spotify.com/track/track123".to_string()),
            },
        },
    };

    let record = project_record(&item);

    assert_eq!(record.track_name, "Song A");
    assert_eq!(record.artist_names, "Artist X, Artist Y");
    assert_eq!(record.album.as_deref(), Some("Album A"));
    assert_eq!(record.added_at.as_deref(), Some("2023-10-17T08:00:00Z"));
    assert_eq!(record.release_date.as_deref(), Some("2023-09-01"));
    assert_eq!(record.duration_ms, Some(215000));
    assert_eq!(record.explicit, Some(false));
    assert_eq!(record.popularity, Some(64));
    assert_eq!(record.spotify_id.as_deref(), Some("track123"));
    assert_eq!(record.spotify_uri.as_deref(), Some("spotify:track:track123"));
    assert_eq!(
        record.spotify_url.as_deref(),
        Some("https://open.spotify.com/track/track123")
    );
}

#[test]
fn test_plan_resolution_direct() {
    let record = create_test_record_with_uri("Song A", "Artist X", "spotify:track:abc");
    assert_eq!(
        plan_resolution(&record),
        Resolution::Direct("spotify:track:abc".to_string())
    );
}

#[test]
fn test_plan_resolution_search() {
    let record = create_test_record("Song B", "Artist Y");
    assert_eq!(
        plan_resolution(&record),
        Resolution::Search("Song B Artist Y".to_string())
    );
}

#[test]
fn test_plan_resolution_blank_uri_falls_back_to_search() {
    // An empty or whitespace URI field must not short-circuit the search
    let record = create_test_record_with_uri("Song C", "Artist Z", "   ");
    assert_eq!(
        plan_resolution(&record),
        Resolution::Search("Song C Artist Z".to_string())
    );
}

#[test]
fn test_plan_resolution_all_direct_skips_search() {
    // A snapshot where every row carries a URI plans zero search calls
    let records = vec![
        create_test_record_with_uri("Song A", "Artist X", "spotify:track:a"),
        create_test_record_with_uri("Song B", "Artist Y", "spotify:track:b"),
        create_test_record_with_uri("Song C", "Artist Z", "spotify:track:c"),
    ];

    let plans: Vec<Resolution> = records.iter().map(plan_resolution).collect();
    assert!(plans.iter().all(|p| matches!(p, Resolution::Direct(_))));

    // Direct resolutions preserve row order
    let uris: Vec<&str> = plans
        .iter()
        .map(|p| match p {
            Resolution::Direct(uri) => uri.as_str(),
            Resolution::Search(_) => unreachable!(),
        })
        .collect();
    assert_eq!(
        uris,
        vec!["spotify:track:a", "spotify:track:b", "spotify:track:c"]
    );
}

#[test]
fn test_search_query() {
    let record = create_test_record("Song A", "Artist X, Artist Y");
    assert_eq!(search_query(&record), "Song A Artist X, Artist Y");
}

#[test]
fn test_unresolved_label() {
    let record = create_test_record("Song B", "Artist Y");
    assert_eq!(unresolved_label(&record), "Song B by Artist Y");
}

#[test]
fn test_default_snapshot_name() {
    let at = Utc.with_ymd_and_hms(2024, 1, 31, 9, 30, 0).unwrap();
    assert_eq!(default_snapshot_name(at), "liked_songs_20240131_093000.csv");
}

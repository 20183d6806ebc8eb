use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;
use tokio::time::sleep;

use crate::{
    error, info,
    management::TokenManager,
    snapshot, spotify, success,
    sync::{self, SearchTracks},
    types::UnresolvedTableRow,
};

/// Spotify's documented per-call maximum for playlist appends.
const TRACKS_PER_REQUEST: usize = 100;
/// Fixed pause between search calls. A policy constant, not a computed backoff.
const SEARCH_DELAY: Duration = Duration::from_millis(100);
/// Fixed pause between batch appends.
const BATCH_DELAY: Duration = Duration::from_secs(1);

/// Issues top-1 searches with a fresh token per request.
struct RemoteSearcher<'a> {
    token_mgr: &'a mut TokenManager,
}

impl SearchTracks for RemoteSearcher<'_> {
    type Error = reqwest::Error;

    async fn search(&mut self, query: &str) -> Result<Option<String>, reqwest::Error> {
        let token = self.token_mgr.get_valid_token().await;
        spotify::tracks::search_track(&token, query).await
    }
}

/// Rebuilds a playlist from a CSV snapshot.
///
/// Reads and validates the snapshot before touching the remote service,
/// creates the playlist, resolves every row to a track URI (directly when
/// the row carries one, otherwise via a top-1 search), appends the resolved
/// URIs in batches of at most 100, and prints a summary with the unresolved
/// rows.
pub async fn import(file: String, name: String, private: bool) {
    // Schema problems must surface before any remote mutation.
    let records = match snapshot::read(&file) {
        Ok(records) => records,
        Err(e) => error!("Failed to read snapshot {}: {}", file, e),
    };

    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run likedcli auth\n Error: {}",
                e
            );
        }
    };

    let token = token_mgr.get_valid_token().await;
    let user = match spotify::playlist::current_user(&token).await {
        Ok(user) => user,
        Err(e) => error!("Failed to resolve current user: {}", e),
    };

    let playlist = match spotify::playlist::create(&token, &user.id, &name, !private).await {
        Ok(resp) => resp,
        Err(e) => error!("Failed to create playlist: {}", e),
    };
    success!("Created playlist {}", playlist.name);

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Resolving {} snapshot rows...", records.len()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let total = records.len();
    let mut searcher = RemoteSearcher {
        token_mgr: &mut token_mgr,
    };
    let (uris, unresolved) = sync::resolve_records(&mut searcher, &records, SEARCH_DELAY, |done| {
        pb.set_message(format!("Resolved {}/{} snapshot rows...", done, total));
    })
    .await;
    pb.finish_and_clear();

    let batches = sync::partition_batches(&uris, TRACKS_PER_REQUEST);
    let batch_count = batches.len();
    for batch in batches {
        let token = token_mgr.get_valid_token().await;
        if let Err(e) = spotify::playlist::add_tracks(&token, &playlist.id, batch.to_vec()).await {
            error!("Failed to add tracks to playlist: {}", e);
        }
        sleep(BATCH_DELAY).await;
    }

    success!(
        "Added {} tracks to {} in {} batches",
        uris.len(),
        playlist.name,
        batch_count
    );

    info!("Resolved tracks: {}", uris.len());
    info!("Unresolved tracks: {}", unresolved.len());
    if !unresolved.is_empty() {
        let rows: Vec<UnresolvedTableRow> = unresolved
            .iter()
            .map(|r| UnresolvedTableRow {
                track: r.track_name.clone(),
                artists: r.artist_names.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if let Some(url) = playlist.external_urls.spotify {
        info!("Playlist URL: {}", url);
    }
}

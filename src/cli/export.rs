use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    management::TokenManager,
    snapshot, spotify, success,
    sync::{self, FetchPage},
    types::{SavedTrackItem, TrackRecord},
    utils,
};

/// Default saved-tracks page size; also the maximum the endpoint allows.
const PAGE_SIZE: u32 = 50;

/// Fetches saved-tracks pages with a fresh token per request.
struct SavedTracksPager<'a> {
    token_mgr: &'a mut TokenManager,
}

impl FetchPage for SavedTracksPager<'_> {
    type Item = SavedTrackItem;
    type Error = reqwest::Error;

    async fn fetch(
        &mut self,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<SavedTrackItem>, reqwest::Error> {
        let token = self.token_mgr.get_valid_token().await;
        spotify::tracks::get_saved_tracks_page(&token, limit, offset).await
    }
}

/// Exports the authenticated user's liked songs to a CSV snapshot.
///
/// Pages through `/me/tracks` in remote order (most recently added first)
/// and serializes the accumulated records with the fixed snapshot schema.
/// A zero-track library still produces a valid header-only file.
///
/// Any transport error is fatal for the run; already-fetched pages are not
/// checkpointed.
pub async fn export(output: Option<String>, page_size: Option<u32>) {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => {
            error!(
                "Failed to load token. Please run likedcli auth\n Error: {}",
                e
            );
        }
    };

    let limit = page_size.unwrap_or(PAGE_SIZE);
    let path = output.unwrap_or_else(|| utils::default_snapshot_name(Utc::now()));

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching liked songs...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut pager = SavedTracksPager {
        token_mgr: &mut token_mgr,
    };
    let items = match sync::collect_paged(&mut pager, limit, |count| {
        pb.set_message(format!("Fetched {} liked songs...", count));
    })
    .await
    {
        Ok(items) => items,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch liked songs: {}", e);
        }
    };

    pb.finish_and_clear();

    let records: Vec<TrackRecord> = items.iter().map(utils::project_record).collect();

    if let Err(e) = snapshot::write(&path, &records) {
        error!("Failed to write snapshot {}: {}", path, e);
    }

    success!("Exported {} liked songs to {}", records.len(), path);
}

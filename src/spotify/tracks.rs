use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{SavedTrackItem, SavedTracksResponse, SearchResponse},
    warning,
};

/// Honors a 429 `Retry-After` header by sleeping, up to 120 seconds.
///
/// Returns true when the caller should retry the request. Longer delays
/// are reported and left to the caller's error handling.
async fn honor_retry_after(response: &Response) -> bool {
    if response.status() != StatusCode::TOO_MANY_REQUESTS {
        return false;
    }

    if let Some(retry_after) = response.headers().get("retry-after") {
        let retry_after = retry_after
            .to_str()
            .unwrap_or("0")
            .parse::<u64>()
            .unwrap_or(0);
        if retry_after <= 120 {
            sleep(Duration::from_secs(retry_after)).await;
            return true;
        }
        warning!(
            "Retry after has reached an abnormal high of {} seconds. Giving up on this request.",
            retry_after
        );
    }

    false
}

/// Retrieves one page of the authenticated user's saved tracks.
///
/// Items come back in the remote's reported order, most recently added
/// first. An empty item list means the collection is exhausted; the
/// caller's pagination loop terminates on that and on nothing else.
///
/// # Retry Logic
///
/// 429 responses honor the `Retry-After` header for delays up to 120
/// seconds; 502 Bad Gateway responses are retried in place with a
/// 10-second delay. Other errors are propagated immediately.
pub async fn get_saved_tracks_page(
    token: &str,
    limit: u32,
    offset: u64,
) -> Result<Vec<SavedTrackItem>, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/me/tracks?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            limit = limit,
            offset = offset
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await?;

        if honor_retry_after(&response).await {
            continue; // retry
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        sleep(Duration::from_secs(10)).await;
                        continue; // retry
                    }
                }
                return Err(err); // propagate other errors
            }
        };

        let res = response.json::<SavedTracksResponse>().await?;
        return Ok(res.items);
    }
}

/// Searches for a track and returns the URI of the best match, if any.
///
/// Requests at most one result and accepts it without any similarity
/// threshold, trading precision for recall of *a* match. `Ok(None)` means
/// the query produced no candidates at all.
///
/// # Retry Logic
///
/// Same policy as [`get_saved_tracks_page`]: 429 responses honor
/// `Retry-After` up to 120 seconds, 502 responses retry in place after 10
/// seconds. Anything else is propagated so the caller can degrade the row
/// instead of stalling the whole run.
pub async fn search_track(token: &str, query: &str) -> Result<Option<String>, reqwest::Error> {
    loop {
        let api_url = format!("{uri}/search", uri = &config::spotify_apiurl());

        let client = Client::new();
        let response = client
            .get(&api_url)
            .query(&[("q", query), ("type", "track"), ("limit", "1")])
            .bearer_auth(token)
            .send()
            .await?;

        if honor_retry_after(&response).await {
            continue; // retry
        }

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => {
                if let Some(status) = err.status() {
                    if status == StatusCode::BAD_GATEWAY {
                        sleep(Duration::from_secs(10)).await;
                        continue; // retry
                    }
                }
                return Err(err); // propagate other errors
            }
        };

        let res = response.json::<SearchResponse>().await?;
        return Ok(res.tracks.items.into_iter().next().map(|t| t.uri));
    }
}

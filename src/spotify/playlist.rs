use reqwest::Client;

use crate::{
    config,
    types::{
        AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, CreatePlaylistResponse,
        CurrentUserResponse,
    },
};

/// Resolves the authenticated user's profile.
///
/// The returned id owns any playlist created afterwards.
pub async fn current_user(token: &str) -> Result<CurrentUserResponse, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CurrentUserResponse>().await
}

/// Creates an empty playlist owned by `user_id`.
///
/// One-shot creation: the playlist is never read back for reconciliation,
/// it is only mutated by appending batches afterwards.
pub async fn create(
    token: &str,
    user_id: &str,
    name: &str,
    public: bool,
) -> Result<CreatePlaylistResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = &config::spotify_apiurl(),
        user_id = user_id
    );

    let body = CreatePlaylistRequest {
        name: name.to_string(),
        description: "Rebuilt from a liked songs snapshot by likedcli.".to_string(),
        public,
        collaborative: false,
    };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?
        .error_for_status()?;

    response.json::<CreatePlaylistResponse>().await
}

/// Appends a batch of track URIs to a playlist.
///
/// The caller is responsible for keeping batches at or below Spotify's
/// documented per-call maximum of 100 URIs.
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<AddTracksResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{playlist_id}/tracks",
        uri = &config::spotify_apiurl(),
        playlist_id = playlist_id
    );

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&AddTracksRequest { uris })
        .send()
        .await?
        .error_for_status()?;

    response.json::<AddTracksResponse>().await
}

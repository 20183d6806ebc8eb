//! # Spotify Integration Module
//!
//! The integration layer between the CLI and the Spotify Web API. It owns
//! all HTTP communication, the OAuth 2.0 PKCE flow, and the retry behavior
//! around Spotify's rate limiting, and exposes a small typed interface to
//! the command implementations.
//!
//! ## Core modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: verifier/challenge generation, browser
//!   launch, local callback handling, and code-for-token exchange.
//! - [`tracks`] - Saved-tracks pagination and top-1 track search.
//! - [`playlist`] - Current-user lookup, playlist creation, and batched
//!   track appends.
//!
//! ## API coverage
//!
//! - `GET /me` - resolve the authenticated user's id
//! - `GET /me/tracks` - saved tracks, offset-paginated
//! - `GET /search` - track search, limited to one result
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - append up to 100 URIs
//! - `POST /api/token` - token exchange and refresh
//!
//! ## Error handling
//!
//! Transient 502 responses are retried in place with a 10 second delay;
//! 429 responses honor the `Retry-After` header up to 120 seconds. All
//! other HTTP failures are returned as `reqwest::Error` and mapped into the
//! crate's error kinds at the call site, where the fatal/recoverable
//! decision is made.

pub mod auth;
pub mod playlist;
pub mod tracks;

//! # API Module
//!
//! HTTP endpoints served by the temporary local web server during the OAuth
//! flow.
//!
//! - [`callback`] - receives the authorization code from Spotify's
//!   authorization server and completes the PKCE token exchange
//! - [`health`] - liveness endpoint returning application status and version
//!
//! Both handlers are plain async functions wired into an axum router by
//! [`crate::server::start_api_server`]. The callback shares PKCE state with
//! the CLI through an `Arc<Mutex<_>>` extension layer.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;

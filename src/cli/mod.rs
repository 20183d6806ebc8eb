//! # CLI Module
//!
//! The user-facing command layer. Each command delegates to the spotify and
//! snapshot modules while owning user interaction, progress feedback, and
//! the fatal/recoverable error decisions.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 2.0 PKCE authentication flow
//! - [`export`] - pages through the user's liked songs and writes them to a
//!   CSV snapshot
//! - [`import`] - reads a snapshot, resolves each row to a track URI
//!   (directly or via top-1 search), creates a playlist, and fills it in
//!   batches
//!
//! ## Error handling
//!
//! Fatal conditions (missing token, schema errors, playlist creation or
//! append failures) unwind immediately through the `error!` macro. A failed
//! search only degrades the affected row to the unresolved report; the run
//! continues.

mod auth;
mod export;
mod import;

pub use auth::auth;
pub use export::export;
pub use import::import;

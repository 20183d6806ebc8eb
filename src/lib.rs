//! Liked Songs CLI Library
//!
//! This library backs a command-line tool that exports the authenticated
//! user's liked songs from Spotify into a CSV snapshot and rebuilds
//! playlists from such snapshots. It contains modules for API communication,
//! CLI operations, configuration management, and snapshot serialization.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error kinds shared across the crate
//! - `management` - Token lifecycle management
//! - `server` - Local HTTP server for OAuth callbacks
//! - `snapshot` - CSV snapshot reading and writing
//! - `spotify` - Spotify Web API client implementation
//! - `sync` - pagination, resolution, and batching loops
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod snapshot;
pub mod spotify;
pub mod sync;
pub mod types;
pub mod utils;

/// A convenient Result type alias used throughout the crate.
///
/// The error side is the crate's [`error::SyncError`], which lets callers
/// pattern-match on the failure kind (auth, schema, transport, ...) instead
/// of catching an opaque boxed error.
pub type Res<T> = std::result::Result<T, error::SyncError>;

/// Prints an informational message with a blue bullet point.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the
/// program with a non-zero code.
///
/// Only for fatal errors where recovery is not possible; code after this
/// macro will not execute.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues that should be visible but do not stop the
/// current run.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

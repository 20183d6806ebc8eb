use thiserror::Error;

/// Error kinds for export and import runs.
///
/// The distinction matters for control flow: `Auth` and `Schema` are always
/// fatal, `Transport` is fatal for playlist creation and batch appends but
/// recoverable (row skip) when it occurs during a single search call.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Session setup or token refresh failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The snapshot file is missing a required column.
    ///
    /// Raised before any remote mutation takes place.
    #[error("Invalid snapshot schema: {0}")]
    Schema(String),

    /// A remote call failed (network error, HTTP error status).
    #[error("Remote request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON encoding or decoding failed.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// File system I/O errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

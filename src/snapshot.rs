//! CSV snapshot reading and writing.
//!
//! A snapshot is the interchange format between the exporter and the
//! importer: a UTF-8, comma-delimited file with one header row and one row
//! per track. The column set is the fixed superset declared in [`COLUMNS`]
//! and is written once per file; it is never derived from the first record,
//! so columns cannot be dropped silently.

use std::path::Path;

use csv::{Reader, Writer};

use crate::{Res, error::SyncError, types::TrackRecord};

/// The declared snapshot schema, in column order.
///
/// Must stay in sync with the serde renames on [`TrackRecord`].
pub const COLUMNS: [&str; 11] = [
    "Track Name",
    "Artist Name(s)",
    "Album",
    "Added At",
    "Release Date",
    "Duration (ms)",
    "Explicit",
    "Popularity",
    "Spotify ID",
    "Spotify URI",
    "Spotify URL",
];

/// Columns an importer cannot work without.
pub const REQUIRED_COLUMNS: [&str; 2] = ["Track Name", "Artist Name(s)"];

/// Serializes records to a snapshot file at `path`.
///
/// An empty record list still produces a valid header-only file; serde only
/// emits the header alongside the first record, so the degenerate case
/// writes it explicitly.
pub fn write(path: impl AsRef<Path>, records: &[TrackRecord]) -> Res<()> {
    let mut wtr = Writer::from_path(path)?;

    if records.is_empty() {
        wtr.write_record(&COLUMNS)?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    Ok(())
}

/// Reads a snapshot file into an ordered record sequence.
///
/// Validates the header before deserializing any row: both
/// [`REQUIRED_COLUMNS`] must be present, other declared columns may be
/// absent (narrower snapshot variants parse with those fields unset).
pub fn read(path: impl AsRef<Path>) -> Res<Vec<TrackRecord>> {
    let mut rdr = Reader::from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    validate_schema(headers.iter().map(String::as_str))?;

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }

    Ok(records)
}

/// Checks that a header row carries every required column.
pub fn validate_schema<'a>(headers: impl IntoIterator<Item = &'a str>) -> Res<()> {
    let names: Vec<&str> = headers.into_iter().collect();

    for required in REQUIRED_COLUMNS {
        if !names.contains(&required) {
            return Err(SyncError::Schema(format!(
                "missing required column '{}'",
                required
            )));
        }
    }

    Ok(())
}

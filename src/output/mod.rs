//! JSON document output
//!
//! Serializes the aggregate to its on-disk form: pretty-printed, 2-space
//! indent, non-ASCII preserved literally. The pipeline never produces NaN
//! or infinite numbers, so serialization cannot fail on values; only the
//! write itself can go wrong.


use crate::error::{Error, Result};
use crate::types::Database;
use std::fs;
use std::path::Path;

/// Serialize the aggregate as a pretty-printed JSON string.
pub fn to_json_pretty(database: &Database) -> Result<String> {
    Ok(serde_json::to_string_pretty(database)?)
}

/// Write the aggregate to `path`.
pub fn write_database(database: &Database, path: &Path) -> Result<()> {
    let body = to_json_pretty(database)?;
    fs::write(path, body)
        .map_err(|e| Error::output(format!("failed to write {}: {e}", path.display())))
}

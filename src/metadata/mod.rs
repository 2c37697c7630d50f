//! File metadata inference
//!
//! Derives a (city, reference date) pair from a snapshot file's name,
//! falling back to the file's modification time when the name carries no
//! date token. The operation never fails; it degrades to the fallback
//! variant instead.


use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use std::time::SystemTime;

/// City rendered for files whose name carries no recognizable metadata.
pub const UNKNOWN_CITY: &str = "Unknown";

/// Matches names like `Porto_2023-05-20.csv` or `Porto_Alegre_20230520.csv`:
/// a city prefix, an underscore, then a date token whose separators may be
/// hyphens, underscores, or absent.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+)_(\d{4}[-_]?\d{2}[-_]?\d{2})").expect("static pattern is valid")
});

/// Metadata inferred for one snapshot file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileMetadata {
    /// The filename matched `<city>_<date>`.
    Parsed {
        /// City prefix, underscores replaced by spaces and trimmed.
        city: String,
        /// Date token normalized to `YYYY-MM-DD`.
        date: String,
    },
    /// No match; the date comes from the file's modification time.
    Fallback {
        /// Modification time formatted `YYYY-MM-DD` (local time).
        date: String,
    },
}

impl FileMetadata {
    /// Infer metadata for a file on disk.
    ///
    /// An unreadable modification time degrades to the Unix epoch rather
    /// than an error.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mtime = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        Self::from_name(&name, mtime)
    }

    /// Infer metadata from a bare file name and modification time.
    pub fn from_name(name: &str, mtime: SystemTime) -> Self {
        match NAME_PATTERN.captures(name) {
            Some(caps) => FileMetadata::Parsed {
                city: caps[1].replace('_', " ").trim().to_string(),
                date: normalize_date_token(&caps[2]),
            },
            None => FileMetadata::Fallback {
                date: DateTime::<Local>::from(mtime).format("%Y-%m-%d").to_string(),
            },
        }
    }

    /// The inferred city, [`UNKNOWN_CITY`] for the fallback variant.
    pub fn city(&self) -> &str {
        match self {
            FileMetadata::Parsed { city, .. } => city,
            FileMetadata::Fallback { .. } => UNKNOWN_CITY,
        }
    }

    /// The reference date label, always `YYYY-MM-DD`.
    pub fn date(&self) -> &str {
        match self {
            FileMetadata::Parsed { date, .. } | FileMetadata::Fallback { date } => date,
        }
    }
}

/// Normalize a date token to `YYYY-MM-DD`.
///
/// `/` and `_` separators become `-`; a bare 8-digit run gains hyphens
/// after the year and month.
pub fn normalize_date_token(token: &str) -> String {
    let date = token.replace(['_', '/'], "-");
    if date.len() == 8 && !date.contains('-') {
        format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..])
    } else {
        date
    }
}

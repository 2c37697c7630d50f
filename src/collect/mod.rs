//! Directory walking, file classification, and aggregation
//!
//! The collector drives the whole pipeline: it walks the input directory,
//! classifies each tabular file by name, and folds the loaded records into
//! a fresh [`Database`]. The walk is strictly sequential and name-sorted,
//! so repeat runs over an unchanged tree produce identical aggregates.


use crate::loader::{load_records, Provenance};
use crate::metadata::FileMetadata;
use crate::schema::{listing_schema, user_schema};
use crate::types::Database;
use std::path::Path;
use tracing::{error, info};
use walkdir::WalkDir;

/// Filename tokens marking a user-account table (English and Portuguese).
const USER_TOKENS: [&str; 2] = ["user", "utilizador"];

/// Extension of tabular input files.
const TABULAR_EXTENSION: &str = "csv";

/// The two roles a tabular file can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// User-account table
    Users,
    /// Property-listing snapshot
    Listings,
}

/// Classify a file by case-insensitive filename substring.
pub fn classify(file_name: &str) -> FileKind {
    let lower = file_name.to_lowercase();
    if USER_TOKENS.iter().any(|token| lower.contains(token)) {
        FileKind::Users
    } else {
        FileKind::Listings
    }
}

/// Walk `root` and fold every tabular file into a fresh aggregate.
///
/// A missing root is recoverable: the error is logged and the returned
/// aggregate is empty, so downstream stages still produce a valid document.
pub fn collect_database(root: &Path) -> Database {
    let mut database = Database::new();

    if !root.is_dir() {
        error!(root = %root.display(), "input directory does not exist");
        return database;
    }

    let listing_schema = listing_schema();
    let user_schema = user_schema();

    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    for entry in walker.filter_map(|e| match e {
        Ok(entry) => Some(entry),
        Err(e) => {
            error!(error = %e, "skipping unreadable directory entry");
            None
        }
    }) {
        let path = entry.path();
        let is_tabular = entry.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == TABULAR_EXTENSION);
        if !is_tabular {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        match classify(&file_name) {
            FileKind::Users => {
                info!(file = %file_name, "processing user table");
                let records = load_records(path, &user_schema, &Provenance::none());
                database.push_users(records);
            }
            FileKind::Listings => {
                let metadata = FileMetadata::from_path(path);
                info!(
                    file = %file_name,
                    city = metadata.city(),
                    date = metadata.date(),
                    "processing listing snapshot"
                );
                let provenance = Provenance::listing(metadata.city(), metadata.date());
                let records = load_records(path, &listing_schema, &provenance);
                database.push_listings(metadata.city(), records);
            }
        }
    }

    database
}

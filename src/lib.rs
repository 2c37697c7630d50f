//! # lodgedb
//!
//! Consolidates a directory tree of heterogeneous CSV exports — property
//! listing snapshots and user account tables — into a single JSON database,
//! partitioned by inferred city and ordered chronologically per city.
//!
//! ## Pipeline
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          Collector                            │
//! │  walk input dir → classify file → extract metadata → load     │
//! └───────────────────────────────────────────────────────────────┘
//!         │               │                │              │
//! ┌───────┴─────┬─────────┴──────┬─────────┴──────┬───────┴──────┐
//! │   collect   │    metadata    │     decode     │    schema    │
//! ├─────────────┼────────────────┼────────────────┼──────────────┤
//! │ user/listing│ city + scrape  │ CSV → records  │ column select│
//! │ buckets     │ date from name │ null normalize │ + coercion   │
//! └─────────────┴────────────────┴────────────────┴──────────────┘
//!         │
//!   post-process (dedup users, default admin, sort by date)
//!         │
//!   write pretty JSON document
//! ```
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use lodgedb::{collect_database, postprocess, write_database};
//!
//! let mut database = collect_database(Path::new("exports/"));
//! postprocess(&mut database);
//! write_database(&database, Path::new("db.json"))?;
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the pipeline
pub mod error;

/// Common types and type aliases
pub mod types;

/// Filename metadata inference (city, reference date)
pub mod metadata;

/// CSV decoding into row records
pub mod decode;

/// Recognized column schemas and coercion rules
pub mod schema;

/// Per-file record loading and provenance injection
pub mod loader;

/// Directory walking, classification, and aggregation
pub mod collect;

/// Final deduplication and ordering
pub mod postprocess;

/// JSON document output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{Database, Record};

pub use collect::collect_database;
pub use metadata::FileMetadata;
pub use output::write_database;
pub use postprocess::postprocess;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

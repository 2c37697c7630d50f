//! Record loading
//!
//! Reads one tabular file, restricts it to a schema, and injects the
//! provenance fields that let snapshots from different files be compared
//! later. A file that cannot be read or parsed contributes an empty batch;
//! one bad file never aborts the run.


use crate::decode::CsvDecoder;
use crate::error::Result;
use crate::schema::TableSchema;
use crate::types::Record;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::error;

/// Provenance fields injected into every record of one snapshot file.
#[derive(Debug, Clone, Default)]
pub struct Provenance {
    /// Inferred city, injected as `city`
    pub city: Option<String>,
    /// Reference date label, injected as `scrape_date`
    pub scrape_date: Option<String>,
}

impl Provenance {
    /// No injected fields (user tables carry no provenance)
    pub fn none() -> Self {
        Self::default()
    }

    /// City and reference date for a listing snapshot
    pub fn listing(city: impl Into<String>, scrape_date: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            scrape_date: Some(scrape_date.into()),
        }
    }
}

/// Load one file into normalized records.
///
/// Read and parse failures are logged with the path and cause, then degrade
/// to an empty batch.
pub fn load_records(path: &Path, schema: &TableSchema, provenance: &Provenance) -> Vec<Record> {
    match try_load(path, schema, provenance) {
        Ok(records) => records,
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to load tabular file");
            Vec::new()
        }
    }
}

fn try_load(path: &Path, schema: &TableSchema, provenance: &Provenance) -> Result<Vec<Record>> {
    let body = fs::read_to_string(path)?;
    let rows = CsvDecoder::new().decode(&body)?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let Value::Object(raw) = row else { continue };
        let mut record = schema.apply(&raw);
        if let Some(date) = &provenance.scrape_date {
            record.insert("scrape_date".to_string(), Value::String(date.clone()));
        }
        if let Some(city) = &provenance.city {
            record.insert("city".to_string(), Value::String(city.clone()));
        }
        records.push(record);
    }

    Ok(records)
}

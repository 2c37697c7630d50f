//! Common types used throughout lodgedb
//!
//! This module contains the record representation and the aggregate
//! structure the whole pipeline folds into.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// A single normalized row: column name to JSON value.
///
/// The canonical missing-value marker is [`Value::Null`]; no NaN or
/// infinity ever reaches a `Record`.
pub type Record = serde_json::Map<String, Value>;

// ============================================================================
// Aggregate Database
// ============================================================================

/// The aggregate built from one full walk of the input directory.
///
/// Serializes as `{"listings": {"<city>": [...]}, "users": [...]}`. City
/// keys are kept in a `BTreeMap` so the serialized document is stable no
/// matter how the input files were nested.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Database {
    /// Listing records bucketed by inferred city.
    pub listings: BTreeMap<String, Vec<Record>>,
    /// User records, flat; deduplicated by the post-processor.
    pub users: Vec<Record>,
}

impl Database {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Total listing records across all cities and snapshots
    pub fn total_listings(&self) -> usize {
        self.listings.values().map(Vec::len).sum()
    }

    /// Append listing records to a city bucket, creating it on first use
    pub fn push_listings(&mut self, city: impl Into<String>, records: Vec<Record>) {
        self.listings.entry(city.into()).or_default().extend(records);
    }

    /// Append user records
    pub fn push_users(&mut self, records: Vec<Record>) {
        self.users.extend(records);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: i64) -> Record {
        let mut r = Record::new();
        r.insert("id".to_string(), json!(id));
        r
    }

    #[test]
    fn test_push_listings_creates_bucket() {
        let mut db = Database::new();
        db.push_listings("Porto", vec![record(1), record(2)]);
        db.push_listings("Porto", vec![record(3)]);

        assert_eq!(db.listings.len(), 1);
        assert_eq!(db.listings["Porto"].len(), 3);
        assert_eq!(db.total_listings(), 3);
    }

    #[test]
    fn test_serialized_shape() {
        let mut db = Database::new();
        db.push_listings("Porto", vec![record(1)]);
        db.push_users(vec![record(7)]);

        let value = serde_json::to_value(&db).unwrap();
        assert!(value["listings"]["Porto"].is_array());
        assert_eq!(value["users"][0]["id"], 7);
    }

    #[test]
    fn test_empty_database_serializes_to_empty_buckets() {
        let db = Database::new();
        let value = serde_json::to_value(&db).unwrap();
        assert_eq!(value, json!({ "listings": {}, "users": [] }));
    }
}

//! Recognized column schemas
//!
//! The two fixed schemas the pipeline knows about — listing snapshots and
//! user tables — and the machinery to restrict a raw row to a schema while
//! coercing values.

mod types;


pub use types::{Coercion, Column};

use crate::types::Record;

/// Name of the identifier column, force-included when a source has it.
pub const IDENTIFIER: &str = "id";

/// An ordered set of recognized columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    columns: Vec<Column>,
}

impl TableSchema {
    /// Create a schema from an ordered column list
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Columns in recognition order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn recognizes(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Restrict a raw row to recognized columns, coercing each kept value.
    ///
    /// Only columns both recognized and present in the source are kept; all
    /// others are dropped silently. A source `id` column is kept even when
    /// this schema does not list it, so historical snapshots of the same
    /// entity stay joinable.
    pub fn apply(&self, raw: &Record) -> Record {
        let mut out = Record::new();
        for column in &self.columns {
            if let Some(value) = raw.get(column.name) {
                out.insert(column.name.to_string(), column.coercion.apply(value.clone()));
            }
        }
        if !self.recognizes(IDENTIFIER) {
            if let Some(value) = raw.get(IDENTIFIER) {
                out.insert(
                    IDENTIFIER.to_string(),
                    Coercion::Numeric.apply(value.clone()),
                );
            }
        }
        out
    }
}

/// Recognized columns for property-listing snapshots.
pub fn listing_schema() -> TableSchema {
    use Coercion::{Numeric, Price, Verbatim};
    TableSchema::new(vec![
        Column::new("id", Numeric),
        // financial and availability figures
        Column::new("price", Price),
        Column::new("room_type", Verbatim),
        Column::new("availability_30", Numeric),
        Column::new("availability_365", Numeric),
        Column::new("estimated_revenue_l365d", Numeric),
        // licensing and review history
        Column::new("license", Verbatim),
        Column::new("first_review", Verbatim),
        Column::new("last_review", Verbatim),
        Column::new("number_of_reviews", Numeric),
        Column::new("review_scores_rating", Verbatim),
        Column::new("neighbourhood_group_cleansed", Verbatim),
        Column::new("neighbourhood_cleansed", Verbatim),
        // location
        Column::new("latitude", Verbatim),
        Column::new("longitude", Verbatim),
    ])
}

/// Recognized columns for user-account tables.
pub fn user_schema() -> TableSchema {
    use Coercion::{Numeric, Verbatim};
    TableSchema::new(vec![
        Column::new("id", Numeric),
        Column::new("username", Verbatim),
        Column::new("password", Verbatim),
        Column::new("name", Verbatim),
        Column::new("role", Verbatim),
    ])
}

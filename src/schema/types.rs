//! Schema types
//!
//! A table schema is data: an ordered list of recognized columns, each
//! carrying the coercion rule applied to its values on load. Adding or
//! removing a tracked field is a one-line change to the schema constructors
//! in the parent module.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Currency symbols and thousands separators stripped from price strings.
static PRICE_SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[$,]").expect("static pattern is valid"));

/// How a recognized column's values are coerced on load.
///
/// Coercion failures are an expected data-quality condition: they yield
/// null, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Strip `$` and `,`, then parse as a number.
    Price,
    /// Parse as a number.
    Numeric,
    /// Pass through unchanged.
    Verbatim,
}

impl Coercion {
    /// Apply this rule to a single cell value.
    pub fn apply(self, value: Value) -> Value {
        match self {
            Coercion::Verbatim => value,
            Coercion::Numeric => coerce_number(value),
            Coercion::Price => match value {
                Value::String(s) => {
                    let stripped = PRICE_SYMBOLS.replace_all(&s, "").into_owned();
                    coerce_number(Value::String(stripped))
                }
                other => coerce_number(other),
            },
        }
    }
}

/// Parse a value as a JSON number, yielding null when it cannot be one.
fn coerce_number(value: Value) -> Value {
    match value {
        // The decoder only emits finite numbers, so these pass through.
        Value::Number(n) => Value::Number(n),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(n) = trimmed.parse::<i64>() {
                return Value::Number(n.into());
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(serde_json::Number::from_f64)
                .map_or(Value::Null, Value::Number)
        }
        _ => Value::Null,
    }
}

/// A recognized column and its coercion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name as it appears in the source header
    pub name: &'static str,
    /// Coercion applied to this column's values
    pub coercion: Coercion,
}

impl Column {
    /// Create a column definition
    pub const fn new(name: &'static str, coercion: Coercion) -> Self {
        Self { name, coercion }
    }
}

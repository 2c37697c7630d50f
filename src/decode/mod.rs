//! CSV decoding
//!
//! Turns raw CSV text into one JSON object per data row, keyed by header
//! name. Numeric-looking cells become JSON numbers and the source's null
//! spellings are normalized to JSON null here, so nothing downstream has to
//! re-check for empty strings, NaN, or infinities.


use crate::error::{Error, Result};
use serde_json::{Map, Value};

/// Cell spellings treated as missing values, compared case-insensitively.
const NULL_SPELLINGS: [&str; 4] = ["null", "none", "nan", "n/a"];

/// CSV decoder with configurable delimiter.
///
/// The first row names the columns. Rows shorter than the header are padded
/// with nulls; blank lines are skipped.
#[derive(Debug, Clone)]
pub struct CsvDecoder {
    /// Field delimiter
    delimiter: char,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvDecoder {
    /// Create a decoder with the default comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with a custom delimiter
    pub fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Decode CSV text into one JSON object per data row.
    ///
    /// Fails on structurally malformed input (an unterminated quoted
    /// field); the caller decides whether that is fatal.
    pub fn decode(&self, body: &str) -> Result<Vec<Value>> {
        let mut lines = body.lines().enumerate();

        let headers: Vec<String> = match lines.next() {
            Some((_, header_line)) => parse_line(header_line, self.delimiter, 1)?,
            None => return Ok(Vec::new()),
        };

        let mut records = Vec::new();
        for (line_num, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let fields = parse_line(line, self.delimiter, line_num + 1)?;
            let mut obj = Map::new();
            for (i, header) in headers.iter().enumerate() {
                let value = fields.get(i).map_or(Value::Null, |raw| parse_cell(raw));
                obj.insert(header.clone(), value);
            }
            records.push(Value::Object(obj));
        }

        Ok(records)
    }
}

/// Split a CSV line into trimmed fields, honoring quotes and doubled-quote
/// escapes.
fn parse_line(line: &str, delimiter: char, line_num: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                in_quotes = true;
            }
        } else if c == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current = String::new();
        } else {
            current.push(c);
        }
    }

    if in_quotes {
        return Err(Error::decode(format!(
            "unterminated quoted field at line {line_num}"
        )));
    }

    fields.push(current.trim().to_string());
    Ok(fields)
}

/// Parse a cell into a JSON value.
///
/// Missing-value spellings become null, numeric text becomes a number, and
/// anything non-finite is rejected as null since JSON cannot carry it.
fn parse_cell(raw: &str) -> Value {
    if raw.is_empty() || NULL_SPELLINGS.iter().any(|s| raw.eq_ignore_ascii_case(s)) {
        return Value::Null;
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Value::Number(n.into());
    }

    if let Ok(f) = raw.parse::<f64>() {
        // from_f64 refuses NaN and infinities
        return serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number);
    }

    Value::String(raw.to_string())
}

//! Final shaping of the aggregate
//!
//! Runs once after the walk completes: deduplicates users, guarantees at
//! least one account exists, and orders each city's listings
//! chronologically. Purely a data-shape transformation; no error
//! conditions.

#[cfg(test)]
mod tests;

use crate::types::{Database, Record};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::warn;

/// Bring a fully-populated aggregate to its serialization-ready form.
pub fn postprocess(database: &mut Database) {
    dedupe_users(database);

    if database.users.is_empty() {
        warn!("no user records found; injecting the default admin account (username \"admin\")");
        database.users.push(default_admin());
    }

    for bucket in database.listings.values_mut() {
        sort_by_scrape_date(bucket);
    }
}

/// Keep one record per identifier: first occurrence's position, last
/// occurrence's values. Records without a usable identifier are dropped.
fn dedupe_users(database: &mut Database) {
    let mut deduped: Vec<Record> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for user in database.users.drain(..) {
        let Some(key) = identifier_key(user.get("id")) else {
            continue;
        };
        match positions.get(&key) {
            Some(&i) => deduped[i] = user,
            None => {
                positions.insert(key, deduped.len());
                deduped.push(user);
            }
        }
    }

    database.users = deduped;
}

/// Stringify an identifier, rejecting absent or falsy values.
fn identifier_key(id: Option<&Value>) -> Option<String> {
    match id? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// The administrator injected when an input tree carries no user tables.
fn default_admin() -> Record {
    let mut record = Record::new();
    record.insert("id".to_string(), json!(1));
    record.insert("username".to_string(), json!("admin"));
    record.insert("password".to_string(), json!("admin"));
    record.insert("name".to_string(), json!("Admin"));
    record.insert("role".to_string(), json!("admin"));
    record
}

/// Stable sort, so snapshots sharing a date keep their walk order.
fn sort_by_scrape_date(bucket: &mut [Record]) {
    bucket.sort_by(|a, b| scrape_date(a).cmp(scrape_date(b)));
}

fn scrape_date(record: &Record) -> &str {
    record
        .get("scrape_date")
        .and_then(Value::as_str)
        .unwrap_or("")
}

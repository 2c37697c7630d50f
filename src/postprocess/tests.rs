//! Tests for post-processing

use super::*;
use pretty_assertions::assert_eq;

fn user(id: Value, username: &str) -> Record {
    let mut r = Record::new();
    r.insert("id".to_string(), id);
    r.insert("username".to_string(), json!(username));
    r
}

fn listing(scrape_date: Option<&str>, id: i64) -> Record {
    let mut r = Record::new();
    r.insert("id".to_string(), json!(id));
    if let Some(date) = scrape_date {
        r.insert("scrape_date".to_string(), json!(date));
    }
    r
}

// ============================================================================
// User deduplication
// ============================================================================

#[test]
fn test_dedupe_last_seen_wins() {
    let mut db = Database::new();
    db.push_users(vec![
        user(json!(1), "first"),
        user(json!(2), "second"),
        user(json!(1), "updated"),
    ]);

    postprocess(&mut db);

    assert_eq!(db.users.len(), 2);
    // first occurrence keeps its position, later values win
    assert_eq!(db.users[0]["username"], json!("updated"));
    assert_eq!(db.users[1]["username"], json!("second"));
}

#[test]
fn test_dedupe_keys_are_stringified() {
    let mut db = Database::new();
    db.push_users(vec![user(json!(1), "numeric"), user(json!("1"), "text")]);

    postprocess(&mut db);

    assert_eq!(db.users.len(), 1);
    assert_eq!(db.users[0]["username"], json!("text"));
}

#[test]
fn test_dedupe_drops_unusable_identifiers() {
    let mut db = Database::new();
    db.push_users(vec![
        user(Value::Null, "null id"),
        user(json!(0), "zero id"),
        user(json!(""), "empty id"),
        user(json!(3), "kept"),
    ]);
    let mut no_id = Record::new();
    no_id.insert("username".to_string(), json!("missing id"));
    db.push_users(vec![no_id]);

    postprocess(&mut db);

    assert_eq!(db.users.len(), 1);
    assert_eq!(db.users[0]["username"], json!("kept"));
}

// ============================================================================
// Fallback administrator
// ============================================================================

#[test]
fn test_empty_users_get_default_admin() {
    let mut db = Database::new();

    postprocess(&mut db);

    assert_eq!(db.users.len(), 1);
    let admin = &db.users[0];
    assert_eq!(admin["id"], json!(1));
    assert_eq!(admin["username"], json!("admin"));
    assert_eq!(admin["password"], json!("admin"));
    assert_eq!(admin["name"], json!("Admin"));
    assert_eq!(admin["role"], json!("admin"));
}

#[test]
fn test_admin_injected_when_all_identifiers_unusable() {
    let mut db = Database::new();
    db.push_users(vec![user(Value::Null, "dropped")]);

    postprocess(&mut db);

    assert_eq!(db.users.len(), 1);
    assert_eq!(db.users[0]["username"], json!("admin"));
}

#[test]
fn test_no_admin_when_users_exist() {
    let mut db = Database::new();
    db.push_users(vec![user(json!(5), "ana")]);

    postprocess(&mut db);

    assert_eq!(db.users.len(), 1);
    assert_eq!(db.users[0]["username"], json!("ana"));
}

// ============================================================================
// Listing sort
// ============================================================================

#[test]
fn test_sort_by_scrape_date_is_stable() {
    let mut db = Database::new();
    db.push_listings(
        "Porto",
        vec![
            listing(Some("2023-02-01"), 1),
            listing(Some("2023-01-01"), 2),
            listing(Some("2023-01-01"), 3),
        ],
    );

    postprocess(&mut db);

    let dates: Vec<&str> = db.listings["Porto"]
        .iter()
        .map(|r| r["scrape_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2023-01-01", "2023-01-01", "2023-02-01"]);

    // equal dates keep their original relative order
    assert_eq!(db.listings["Porto"][0]["id"], json!(2));
    assert_eq!(db.listings["Porto"][1]["id"], json!(3));
}

#[test]
fn test_missing_scrape_date_sorts_first() {
    let mut db = Database::new();
    db.push_listings(
        "Porto",
        vec![listing(Some("2023-01-01"), 1), listing(None, 2)],
    );

    postprocess(&mut db);

    assert_eq!(db.listings["Porto"][0]["id"], json!(2));
    assert_eq!(db.listings["Porto"][1]["id"], json!(1));
}

#[test]
fn test_each_city_sorted_independently() {
    let mut db = Database::new();
    db.push_listings("Porto", vec![listing(Some("2023-03-01"), 1)]);
    db.push_listings(
        "Lisboa",
        vec![
            listing(Some("2023-02-01"), 2),
            listing(Some("2023-01-01"), 3),
        ],
    );

    postprocess(&mut db);

    assert_eq!(db.listings["Lisboa"][0]["id"], json!(3));
    assert_eq!(db.listings["Porto"][0]["id"], json!(1));
}

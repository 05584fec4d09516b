//! Test fixtures for values and records.

use chrono::{DateTime, TimeZone, Utc};
use quill_core::{Callsite, Level, List, LogRecord, Node, Record, Scalar, Value};

/// Timestamp stamped on [`test_record`]s.
#[must_use]
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
        .single()
        .unwrap_or_default()
}

/// ISO-8601 form of [`fixed_timestamp`].
pub const FIXED_TIMESTAMP: &str = "2024-01-02T03:04:05.000Z";

/// Process id stamped on [`test_record`]s.
pub const FIXED_PID: u32 = 4242;

/// Category stamped on [`test_record`]s.
pub const FIXED_CATEGORY: &str = "test";

/// Call site stamped on [`test_record`]s.
#[must_use]
pub fn fixed_callsite() -> Callsite {
    Callsite::new("src/app.rs", 10).with_function("app::run")
}

/// A record with fixed metadata and the given payload.
#[must_use]
pub fn test_record(level: Level, payload: Vec<Node>) -> LogRecord {
    LogRecord::new(level, payload)
        .with_timestamp(fixed_timestamp())
        .with_pid(FIXED_PID)
        .with_category(FIXED_CATEGORY)
        .with_callsite(fixed_callsite())
}

/// A record whose payload is the given texts.
#[must_use]
pub fn text_record(level: Level, texts: &[&str]) -> LogRecord {
    test_record(
        level,
        texts
            .iter()
            .map(|t| Node::Scalar(Scalar::Text((*t).to_owned())))
            .collect(),
    )
}

/// `{ name: "loop", me: <itself> }`.
///
/// The record is kept alive by its own cycle; call [`break_cycle`] when the
/// test is done with it if the leak matters.
#[must_use]
pub fn self_referencing_record() -> Record {
    let record = Record::new();
    record.insert("name", "loop");
    record.insert("me", record.clone());
    record
}

/// `a = { items: [ b ] }`, `b = { back: a, list: a.items }`.
///
/// Serialized from `a`, `b.back` points at the root and `b.list` at
/// `items`.
#[must_use]
pub fn indirect_cycle() -> Record {
    let a = Record::new();
    let b = Record::new();
    let items = List::new();
    a.insert("items", items.clone());
    items.push(b.clone());
    b.insert("back", a.clone());
    b.insert("list", items);
    a
}

/// A list that contains itself at index 1.
#[must_use]
pub fn self_containing_list() -> List {
    let list = List::new();
    list.push(1);
    list.push(list.clone());
    list
}

/// `[1, "a", {b: 1}, same, same]` where the last three are one record.
#[must_use]
pub fn shared_args() -> Vec<Value> {
    let same = Value::record([("b", 1)]);
    vec![
        Value::from(1),
        Value::from("a"),
        same.clone(),
        same.clone(),
        same,
    ]
}

/// Remove every entry of `record` so a cycle through it is released.
pub fn break_cycle(record: &Record) {
    for key in record.keys() {
        record.remove(&key);
    }
}

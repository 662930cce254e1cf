#![allow(dead_code)]

use rustc_hash::FxHashMap;
use serde_json::{Map, Value, json};

use mixmap::record::{DeclaredKeys, Record};

/// Convert a `json!` object literal into a plain record.
pub fn record(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture expects an object literal, got {other}"),
    }
}

/// Leaf resolver used by the arithmetic merge tests.
pub fn add(ours: &Value, theirs: &Value) -> Value {
    json!(ours.as_i64().unwrap_or(0) + theirs.as_i64().unwrap_or(0))
}

/// Record with a declared key set: writes to undeclared keys are silently
/// dropped, mirroring schema-relaxed record types.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForgivingRecord {
    declared: Vec<String>,
    entries: FxHashMap<String, Value>,
}

impl ForgivingRecord {
    pub fn with_declared(keys: &[&str]) -> Self {
        Self {
            declared: keys.iter().map(|key| (*key).to_string()).collect(),
            entries: FxHashMap::default(),
        }
    }

    /// Seed an entry through the declared-keys filter.
    pub fn seed(mut self, key: &str, value: Value) -> Self {
        self.insert(key.to_string(), value);
        self
    }
}

impl DeclaredKeys for ForgivingRecord {
    fn is_declared(&self, key: &str) -> bool {
        self.declared.iter().any(|declared| declared == key)
    }
}

impl Record for ForgivingRecord {
    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        if self.is_declared(&key) {
            self.entries.insert(key, value)
        } else {
            None
        }
    }
}

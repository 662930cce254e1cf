//! Record capability layer: the minimal mapping surface a container must
//! expose to participate in deep merge and inspection.
//!
//! The extension set defines no container of its own. Any type that can
//! enumerate its keys, look values up, and accept insertions is a record;
//! the [`Record`] trait captures exactly that surface and nothing more.
//! Blanket participation is provided for the common map representations:
//! [`serde_json::Map`], [`HashMap`] with any hasher (which covers
//! `rustc_hash::FxHashMap`), and [`BTreeMap`].
//!
//! Values themselves are type-erased as [`serde_json::Value`]. A value is
//! *record-like* when it is an object; everything else — numbers, strings,
//! booleans, null, and sequences — is an opaque leaf that merge never
//! recurses into.
//!
//! # Examples
//!
//! ```rust
//! use mixmap::record::{Record, is_record_like, record_from_value};
//! use serde_json::json;
//!
//! let settings = record_from_value(json!({"debug": false}))?;
//! assert!(settings.contains_key("debug"));
//! assert!(is_record_like(&settings.to_value()));
//! assert!(!is_record_like(&json!([1, 2, 3])));
//! # Ok::<(), mixmap::record::RecordError>(())
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use miette::Diagnostic;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised by the record capability layer.
///
/// The merge path itself is infallible; this covers only the explicit
/// conversion entry points such as [`record_from_value`].
#[derive(Debug, Error, Diagnostic)]
pub enum RecordError {
    /// The supplied value does not satisfy the record capability set.
    #[error("expected a record-like value, found {kind}")]
    #[diagnostic(code(mixmap::record::not_record_like))]
    NotRecordLike { kind: &'static str },
}

/// Minimal capability set required of a mapping container: key
/// enumeration, lookup, and insertion.
///
/// Everything else — [`contains_key`](Record::contains_key),
/// [`len`](Record::len), [`to_value`](Record::to_value) — is derived.
/// Implementors with their own assignment policy (for example, records
/// that enforce a declared key set, see [`DeclaredKeys`]) apply it inside
/// [`insert`](Record::insert); the merge extension composes with such
/// policies without special-casing them.
pub trait Record {
    /// The keys currently present, in the container's iteration order.
    ///
    /// Merge semantics never depend on this order; inspection sorts keys
    /// itself before rendering.
    fn keys(&self) -> Vec<&str>;

    /// Looks up the value stored at `key`.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Stores `value` at `key`, returning the previously stored value.
    ///
    /// Policy-enforcing records may drop the write entirely (and return
    /// `None`); callers must not assume the key is present afterwards.
    fn insert(&mut self, key: String, value: Value) -> Option<Value>;

    /// Returns `true` if `key` currently has an entry.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    fn len(&self) -> usize {
        self.keys().len()
    }

    /// Returns `true` if the record has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of this record as a [`Value::Object`].
    ///
    /// The snapshot is an independent deep copy; mutating it is never
    /// observable through the original record.
    fn to_value(&self) -> Value {
        let mut map = Map::new();
        for key in self.keys() {
            if let Some(value) = self.get(key) {
                map.insert(key.to_string(), value.clone());
            }
        }
        Value::Object(map)
    }
}

impl Record for Map<String, Value> {
    fn keys(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.insert(key, value)
    }
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
    fn keys(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.insert(key, value)
    }
}

impl Record for BTreeMap<String, Value> {
    fn keys(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.insert(key, value)
    }
}

/// Contract consumed by schema-backed record types that enforce a declared
/// key set on assignment.
///
/// Such records silently drop writes to undeclared keys instead of
/// failing. The filtering happens inside their [`Record::insert`], before
/// the merge extension ever observes the resulting key set, so deep merge
/// works on them unchanged. This crate defines the contract only; the
/// declaration framework itself lives with the host.
pub trait DeclaredKeys {
    /// Returns `true` if `key` belongs to the declared key set.
    fn is_declared(&self, key: &str) -> bool;
}

/// Returns `true` if `value` can participate in recursive merge.
///
/// Only objects qualify; sequences and scalars are opaque leaves.
#[must_use]
pub fn is_record_like(value: &Value) -> bool {
    value.is_object()
}

/// Human-readable kind name for a value, used in diagnostics.
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "record",
    }
}

/// Converts a type-erased value into a plain record.
///
/// # Errors
///
/// Returns [`RecordError::NotRecordLike`] when `value` is not an object.
///
/// # Examples
///
/// ```rust
/// use mixmap::record::record_from_value;
/// use serde_json::json;
///
/// assert!(record_from_value(json!({"a": 1})).is_ok());
/// assert!(record_from_value(json!([1])).is_err());
/// ```
pub fn record_from_value(value: Value) -> Result<Map<String, Value>, RecordError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(RecordError::NotRecordLike {
            kind: value_kind(&other),
        }),
    }
}

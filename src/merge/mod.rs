//! Recursive deep merge over record-like values.
//!
//! Deep merge combines two records key by key: where both sides hold a
//! nested record under the same key, the nested records merge recursively
//! instead of the right side replacing the left wholesale. Everything
//! that is not a record — numbers, strings, booleans, null, sequences —
//! is an opaque leaf, decided by the conflict policy (right side wins by
//! default, or a caller-supplied resolver).
//!
//! Guarantees, for both the copying and in-place entry points:
//!
//! - the result's key set is the union of both sides;
//! - inputs are never mutated by the copying form, and `other` is never
//!   mutated by the in-place form;
//! - nested records in the result are independent deep copies, never
//!   aliases into either input;
//! - a key present with a falsy leaf (`null`, `false`, `""`, `0`) is
//!   preserved, distinct from "key absent";
//! - a non-record `other` degrades to a no-op copy rather than failing.
//!
//! # Quick start
//!
//! ```rust
//! use mixmap::merge::DeepMerge;
//! use mixmap::record::record_from_value;
//! use serde_json::json;
//!
//! let settings = record_from_value(json!({
//!     "server": {"host": "localhost", "port": 8080},
//!     "debug": false,
//! }))?;
//!
//! let merged = settings.deep_merge(&json!({"server": {"port": 9090}}));
//!
//! assert_eq!(merged["server"]["port"], json!(9090));
//! assert_eq!(merged["server"]["host"], json!("localhost"));
//! assert_eq!(merged["debug"], json!(false));
//! # Ok::<(), mixmap::record::RecordError>(())
//! ```
//!
//! With a resolver for leaf conflicts:
//!
//! ```rust
//! use mixmap::merge::DeepMerge;
//! use mixmap::record::record_from_value;
//! use serde_json::json;
//!
//! let counters = record_from_value(json!({"a": 100, "c": {"c1": 100}}))?;
//! let merged = counters.deep_merge_with(
//!     &json!({"b": 250, "c": {"c1": 200}}),
//!     |_key, ours, theirs| json!(ours.as_i64().unwrap_or(0) + theirs.as_i64().unwrap_or(0)),
//! );
//!
//! // The resolver ran at the leaf conflict `c1`, not at the record `c`.
//! assert_eq!(merged["c"]["c1"], json!(300));
//! assert_eq!(merged["b"], json!(250));
//! # Ok::<(), mixmap::record::RecordError>(())
//! ```

mod merger;

pub use merger::{DEFAULT_MAX_DEPTH, Merger};

use serde_json::Value;

use crate::record::Record;

/// Deep-merge extension, available on every [`Record`] type.
///
/// This is the mixin surface: importing the trait attaches the four merge
/// operations to plain maps, hashed maps, and any host-defined record
/// type alike. All of them accept `other` as *any* value and treat
/// non-record input as a no-op.
///
/// The in-place variants return the receiver, so calls chain.
pub trait DeepMerge: Record {
    /// Returns a new record holding the deep merge of `self` and `other`.
    ///
    /// Leaf conflicts default to the right side. `self` and `other` are
    /// left unmodified.
    #[must_use]
    fn deep_merge(&self, other: &Value) -> Self
    where
        Self: Clone + Sized,
    {
        Merger::new().merge(self, other)
    }

    /// Like [`deep_merge`](Self::deep_merge), resolving leaf conflicts
    /// with `resolver(key, ours, theirs)`.
    #[must_use]
    fn deep_merge_with<F>(&self, other: &Value, resolver: F) -> Self
    where
        Self: Clone + Sized,
        F: FnMut(&str, &Value, &Value) -> Value,
    {
        Merger::new().merge_with(self, other, resolver)
    }

    /// Deep merges `other` into `self` and returns the receiver.
    fn deep_merge_in_place(&mut self, other: &Value) -> &mut Self {
        Merger::new().merge_in_place(self, other);
        self
    }

    /// Like [`deep_merge_in_place`](Self::deep_merge_in_place) with a
    /// resolver for leaf conflicts.
    fn deep_merge_in_place_with<F>(&mut self, other: &Value, resolver: F) -> &mut Self
    where
        F: FnMut(&str, &Value, &Value) -> Value,
    {
        Merger::new().merge_in_place_with(self, other, resolver);
        self
    }
}

impl<R: Record> DeepMerge for R {}

//! The deep-merge algorithm and its configuration surface.

use serde_json::{Map, Value};

use crate::record::Record;

/// Depth cap used by [`Merger::bounded`].
///
/// Matches the nesting depth that `serde_json` itself accepts when
/// parsing, so any record obtained from parsed input merges fully even
/// under a bounded merger.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configurable entry point for deep merge.
///
/// A `Merger` is a small value type: construct one, optionally cap its
/// recursion depth, and run any number of merges through it. The
/// [`DeepMerge`](crate::merge::DeepMerge) extension trait covers the
/// common case (no cap, default or per-call resolver); reach for `Merger`
/// directly when merging untrusted, potentially very deeply nested input.
///
/// # Depth cap
///
/// Record values are owned trees, so cyclic inputs are unrepresentable
/// and recursion is always bounded by the input's nesting depth. The
/// optional cap exists for inputs whose nesting depth is itself
/// untrusted: at the cap, a record-vs-record pair is no longer recursed
/// into and is treated as an opaque leaf conflict instead (resolver, or
/// right side wins wholesale). Merge never fails.
///
/// # Examples
///
/// ```rust
/// use mixmap::merge::Merger;
/// use mixmap::record::record_from_value;
/// use serde_json::json;
///
/// let base = record_from_value(json!({"a": {"b": {"keep": 1}}}))?;
/// let merged = Merger::new()
///     .with_max_depth(1)
///     .merge(&base, &json!({"a": {"b": {"add": 2}}}));
///
/// // The cap stopped recursion below "a": the nested pair became a
/// // leaf conflict and the right side replaced it wholesale.
/// assert_eq!(merged["a"]["b"], json!({"add": 2}));
/// # Ok::<(), mixmap::record::RecordError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Merger {
    max_depth: Option<usize>,
}

impl Merger {
    /// Creates a merger with unbounded recursion depth.
    #[must_use]
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    /// Creates a merger capped at [`DEFAULT_MAX_DEPTH`].
    #[must_use]
    pub fn bounded() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Caps recursion at `limit` nested record levels.
    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Deep merges `other` into a copy of `record` and returns the copy.
    ///
    /// `record` and `other` are left unmodified. Non-record `other`
    /// values degrade to a plain copy of the receiver.
    #[must_use]
    pub fn merge<R>(&self, record: &R, other: &Value) -> R
    where
        R: Record + Clone,
    {
        let mut merged = record.clone();
        self.merge_in_place(&mut merged, other);
        merged
    }

    /// Like [`merge`](Self::merge), resolving leaf conflicts with
    /// `resolver` instead of the default right-wins rule.
    #[must_use]
    pub fn merge_with<R, F>(&self, record: &R, other: &Value, resolver: F) -> R
    where
        R: Record + Clone,
        F: FnMut(&str, &Value, &Value) -> Value,
    {
        let mut merged = record.clone();
        self.merge_in_place_with(&mut merged, other, resolver);
        merged
    }

    /// Deep merges `other` into `record` itself.
    ///
    /// `other` is left unmodified; non-record `other` values leave the
    /// receiver untouched.
    pub fn merge_in_place<R>(&self, record: &mut R, other: &Value)
    where
        R: Record + ?Sized,
    {
        if let Value::Object(update) = other {
            merge_into(record, update, &mut Resolve::RightWins, self.max_depth);
        }
    }

    /// Like [`merge_in_place`](Self::merge_in_place) with a resolver for
    /// leaf conflicts.
    pub fn merge_in_place_with<R, F>(&self, record: &mut R, other: &Value, mut resolver: F)
    where
        R: Record + ?Sized,
        F: FnMut(&str, &Value, &Value) -> Value,
    {
        if let Value::Object(update) = other {
            merge_into(record, update, &mut Resolve::With(&mut resolver), self.max_depth);
        }
    }
}

/// Conflict policy applied when an existing entry and an incoming value
/// are present and not both record-like.
enum Resolve<'a> {
    /// Default: the incoming side wins, deep-copied.
    RightWins,
    /// Caller-supplied `(key, current, incoming) -> resolved` function.
    /// Panics inside it propagate unmodified; the accumulator is
    /// discarded with the unwinding call.
    With(&'a mut dyn FnMut(&str, &Value, &Value) -> Value),
}

impl Resolve<'_> {
    fn decide(&mut self, key: &str, current: &Value, incoming: &Value) -> Value {
        match self {
            Resolve::RightWins => incoming.clone(),
            Resolve::With(resolver) => resolver(key, current, incoming),
        }
    }
}

/// Recursive core shared by every entry point.
///
/// Walks the incoming update key by key. A pair recurses only when both
/// the existing value and the incoming value are record-like and the
/// depth cap allows it; every other pair is decided as a leaf. Keys
/// absent from the receiver take the incoming value as-is (deep-copied),
/// which keeps falsy-but-present leaves on the receiver side intact.
fn merge_into<R: Record + ?Sized>(
    receiver: &mut R,
    update: &Map<String, Value>,
    resolve: &mut Resolve<'_>,
    depth: Option<usize>,
) {
    for (key, incoming) in update {
        let next = match (receiver.get(key), incoming) {
            (Some(Value::Object(current)), Value::Object(nested)) if depth != Some(0) => {
                let mut merged = current.clone();
                merge_into(&mut merged, nested, resolve, depth.map(|d| d - 1));
                Value::Object(merged)
            }
            (Some(current), _) => resolve.decide(key, current, incoming),
            (None, _) => incoming.clone(),
        };
        receiver.insert(key.clone(), next);
    }
}

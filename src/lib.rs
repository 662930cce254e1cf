//! # Mixmap: Composable Behavior Extensions for Map-Like Values
//!
//! Mixmap is a set of behaviors that attach to any key-value mapping
//! container (a *record*) or sequence to augment it with additional
//! semantics without subclassing or wrapping. The centerpiece is a
//! recursive, value-preserving **deep merge** with a pluggable
//! conflict-resolution policy and both copying and in-place variants;
//! alongside it ship a deterministic pretty-inspection behavior and the
//! attachment protocol that lets independent behaviors compose on one
//! host type in a well-defined order.
//!
//! ## Core Concepts
//!
//! - **Record**: any container exposing key enumeration, lookup, and
//!   insertion ([`record::Record`]); plain [`serde_json::Map`]s, hashed
//!   maps, and host-defined types all qualify
//! - **Deep merge**: nested records merge key by key; everything else is
//!   an opaque leaf decided by the conflict policy ([`merge::DeepMerge`])
//! - **Behavior stack**: ordered, per-host-type attachment of behaviors,
//!   each wrapping the previously installed implementation
//!   ([`behaviors::BehaviorStack`])
//!
//! ## Quick Start
//!
//! ### Deep merging records
//!
//! Import the extension trait and merge any record with any value:
//!
//! ```
//! use mixmap::merge::DeepMerge;
//! use mixmap::record::record_from_value;
//! use serde_json::json;
//!
//! let settings = record_from_value(json!({
//!     "server": {"host": "localhost", "port": 8080},
//!     "debug": false,
//! }))?;
//!
//! // Copying form: inputs stay untouched.
//! let merged = settings.deep_merge(&json!({"server": {"port": 9090}}));
//! assert_eq!(merged["server"]["port"], json!(9090));
//! assert_eq!(merged["server"]["host"], json!("localhost"));
//!
//! // Non-record input degrades to a plain copy, it never fails.
//! assert_eq!(settings.deep_merge(&json!("not a record")), settings);
//! # Ok::<(), mixmap::record::RecordError>(())
//! ```
//!
//! ### Resolving conflicts yourself
//!
//! A resolver runs only where both sides hold a leaf for the same key:
//!
//! ```
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
//! assert_eq!(merged["c"]["c1"], json!(300));
//! # Ok::<(), mixmap::record::RecordError>(())
//! ```
//!
//! ### Stacking behaviors on a host type
//!
//! ```
//! use std::sync::Arc;
//!
//! use mixmap::behaviors::{BehaviorStack, DeepMergeBehavior, PrettyInspect};
//! use serde_json::json;
//!
//! let stack = BehaviorStack::named("Settings")
//!     .with_merge(Arc::new(DeepMergeBehavior::new()))
//!     .with_inspect(Arc::new(PrettyInspect));
//!
//! // Keys render sorted, independent of insertion order.
//! assert_eq!(stack.inspect(&json!({"b": 2, "a": 1})), "<Settings a=1 b=2>");
//! ```
//!
//! ## Concurrency
//!
//! Everything here is synchronous and call-and-return; no operation
//! blocks or performs I/O. Hooks are `Send + Sync`, so a stack can be
//! shared across threads, but concurrent in-place merges against the
//! *same* record must be serialized by the caller.
//!
//! ## Module Guide
//!
//! - [`record`] - Record capability trait, predicates, and conversions
//! - [`merge`] - Deep merge core and the `DeepMerge` extension trait
//! - [`behaviors`] - Attachment protocol, behavior stack, and the bundled
//!   deep-merge and pretty-inspect behaviors
//! - [`types`] - Operation identifiers shared across the extension set

pub mod behaviors;
pub mod merge;
pub mod record;
pub mod types;

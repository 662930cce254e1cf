//! Attachable behavior protocol: layering independent capabilities onto a
//! host record type without one overwriting another's entry point.
//!
//! A *behavior* augments one host operation — inspection or merging — by
//! implementing the matching hook trait. Behaviors attach to a
//! [`BehaviorStack`], the per-host-type attachment point. Attaching
//! preserves whatever implementation was installed before under a
//! reachable handle (the *prior*), and installs the new behavior as the
//! public entry point, so behaviors compose deterministically in
//! attachment order: the last attached wraps outermost, and each hook may
//! delegate inward through its prior, bottoming out at the host's base
//! operation.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use mixmap::behaviors::{BehaviorStack, DeepMergeBehavior, PrettyInspect};
//! use serde_json::json;
//!
//! let stack = BehaviorStack::named("Settings")
//!     .with_merge(Arc::new(DeepMergeBehavior::new()))
//!     .with_inspect(Arc::new(PrettyInspect));
//!
//! assert_eq!(stack.inspect(&json!({"b": 2, "a": 1})), "<Settings a=1 b=2>");
//! ```

mod deep_merge;
mod pretty_inspect;
mod stack;

pub use deep_merge::DeepMergeBehavior;
pub use pretty_inspect::PrettyInspect;
pub use stack::{BehaviorStack, InspectPrior, MergePrior};

use serde_json::{Map, Value};

/// A behavior augmenting the host's inspect operation.
///
/// `prior` is the previously installed rendering; delegate to it for any
/// input the hook does not handle, and for rendering nested values with
/// the rule that was in effect before this behavior attached.
pub trait InspectHook: Send + Sync {
    /// Renders `value` on behalf of the host type named `host`.
    fn render(&self, host: &str, value: &Value, prior: InspectPrior<'_>) -> String;
}

/// A behavior augmenting the host's merge operation.
///
/// `prior` is the previously installed merge; delegate to it for any
/// input the hook does not handle.
pub trait MergeHook: Send + Sync {
    /// Merges `other` into `receiver`.
    fn apply(&self, receiver: &mut Map<String, Value>, other: &Value, prior: MergePrior<'_>);
}

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::instrument;

use super::{DeepMergeBehavior, InspectHook, MergeHook, PrettyInspect};
use crate::types::Operation;

/// Per-host-type attachment point for behaviors.
///
/// A stack carries the host type's display name and one ordered chain per
/// [`Operation`]. Attaching appends to the matching chain; dispatch walks
/// the chain from the last attached hook inward, handing each hook a
/// prior handle to the implementation installed before it. An empty chain
/// falls back to the host's base operation: compact JSON rendering for
/// inspect, shallow right-bias overwrite for merge.
///
/// Hooks are shared via [`Arc`], so cloning a stack is cheap and clones
/// keep composing with the same behavior instances.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use mixmap::behaviors::{BehaviorStack, DeepMergeBehavior};
/// use mixmap::record::record_from_value;
/// use serde_json::json;
///
/// let stack = BehaviorStack::named("Settings")
///     .with_merge(Arc::new(DeepMergeBehavior::new()));
///
/// let base = record_from_value(json!({"c": {"c1": "x"}}))?;
/// let merged = stack.merge(&base, &json!({"c": {"c2": "y"}}));
/// assert_eq!(merged["c"], json!({"c1": "x", "c2": "y"}));
/// # Ok::<(), mixmap::record::RecordError>(())
/// ```
#[derive(Clone)]
pub struct BehaviorStack {
    host: String,
    inspect_chain: Vec<Arc<dyn InspectHook>>,
    merge_chain: Vec<Arc<dyn MergeHook>>,
}

/// Standard stack: deep merge plus pretty inspection on a generic host.
impl Default for BehaviorStack {
    fn default() -> Self {
        Self::named("Record")
            .with_merge(Arc::new(DeepMergeBehavior::new()))
            .with_inspect(Arc::new(PrettyInspect))
    }
}

impl BehaviorStack {
    /// Creates an empty stack for a host type with the given display name.
    pub fn named(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            inspect_chain: Vec::new(),
            merge_chain: Vec::new(),
        }
    }

    /// Creates an empty stack named after `T` (short type name).
    #[must_use]
    pub fn for_host<T>() -> Self {
        let full = std::any::type_name::<T>();
        let short = full.rsplit("::").next().unwrap_or(full);
        Self::named(short)
    }

    /// The host type's display name.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Attaches an inspect behavior; it becomes the outermost rendering
    /// and receives the previously installed one as its prior.
    pub fn attach_inspect(&mut self, hook: Arc<dyn InspectHook>) -> &mut Self {
        self.inspect_chain.push(hook);
        self
    }

    /// Attaches a merge behavior; it becomes the outermost merge and
    /// receives the previously installed one as its prior.
    pub fn attach_merge(&mut self, hook: Arc<dyn MergeHook>) -> &mut Self {
        self.merge_chain.push(hook);
        self
    }

    /// Builder-style variant of [`attach_inspect`](Self::attach_inspect).
    #[must_use]
    pub fn with_inspect(mut self, hook: Arc<dyn InspectHook>) -> Self {
        self.attach_inspect(hook);
        self
    }

    /// Builder-style variant of [`attach_merge`](Self::attach_merge).
    #[must_use]
    pub fn with_merge(mut self, hook: Arc<dyn MergeHook>) -> Self {
        self.attach_merge(hook);
        self
    }

    /// Number of behaviors attached for `operation`.
    #[must_use]
    pub fn attached(&self, operation: Operation) -> usize {
        match operation {
            Operation::Inspect => self.inspect_chain.len(),
            Operation::Merge => self.merge_chain.len(),
        }
    }

    /// Renders `value` through the attached inspect chain.
    #[must_use]
    #[instrument(skip(self, value), fields(host = %self.host))]
    pub fn inspect(&self, value: &Value) -> String {
        InspectPrior {
            host: &self.host,
            chain: &self.inspect_chain,
        }
        .call(value)
    }

    /// Merges `other` into a copy of `record` through the attached merge
    /// chain and returns the copy.
    #[must_use]
    pub fn merge(&self, record: &Map<String, Value>, other: &Value) -> Map<String, Value> {
        let mut merged = record.clone();
        self.merge_in_place(&mut merged, other);
        merged
    }

    /// Merges `other` into `record` through the attached merge chain.
    #[instrument(skip(self, record, other), fields(host = %self.host))]
    pub fn merge_in_place(&self, record: &mut Map<String, Value>, other: &Value) {
        MergePrior {
            chain: &self.merge_chain,
        }
        .call(record, other);
    }
}

/// Reachable handle to the previously installed inspect implementation.
///
/// Calling it dispatches to the next behavior inward, bottoming out at
/// the host's base rendering.
pub struct InspectPrior<'a> {
    host: &'a str,
    chain: &'a [Arc<dyn InspectHook>],
}

impl InspectPrior<'_> {
    /// Renders `value` with the prior implementation.
    #[must_use]
    pub fn call(&self, value: &Value) -> String {
        match self.chain.split_last() {
            Some((outer, inner)) => outer.render(
                self.host,
                value,
                InspectPrior {
                    host: self.host,
                    chain: inner,
                },
            ),
            None => base_inspect(value),
        }
    }
}

/// Reachable handle to the previously installed merge implementation.
pub struct MergePrior<'a> {
    chain: &'a [Arc<dyn MergeHook>],
}

impl MergePrior<'_> {
    /// Merges `other` into `receiver` with the prior implementation.
    pub fn call(&self, receiver: &mut Map<String, Value>, other: &Value) {
        match self.chain.split_last() {
            Some((outer, inner)) => outer.apply(receiver, other, MergePrior { chain: inner }),
            None => shallow_merge(receiver, other),
        }
    }
}

/// Base rendering: compact JSON.
fn base_inspect(value: &Value) -> String {
    value.to_string()
}

/// Base merge: shallow overwrite, right side wins key by key. Non-record
/// input is ignored.
fn shallow_merge(receiver: &mut Map<String, Value>, other: &Value) {
    if let Value::Object(update) = other
        && !update.is_empty()
    {
        for (key, value) in update {
            receiver.insert(key.clone(), value.clone());
        }
    }
}

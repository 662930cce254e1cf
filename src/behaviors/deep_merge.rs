use std::fmt;

use serde_json::{Map, Value};

use super::{MergeHook, MergePrior};
use crate::merge::Merger;
use crate::record::is_record_like;

type Resolver = dyn Fn(&str, &Value, &Value) -> Value + Send + Sync;

/// Installs deep merge as the host's merge operation: nested records
/// merge key by key instead of being replaced wholesale.
///
/// Non-record input falls back to the prior implementation.
#[derive(Default)]
pub struct DeepMergeBehavior {
    merger: Merger,
    resolver: Option<Box<Resolver>>,
}

impl DeepMergeBehavior {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs merges through a custom [`Merger`], e.g. one with a depth cap.
    #[must_use]
    pub fn with_merger(mut self, merger: Merger) -> Self {
        self.merger = merger;
        self
    }

    /// Resolves leaf conflicts with `resolver` instead of the default
    /// right-wins rule.
    #[must_use]
    pub fn with_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str, &Value, &Value) -> Value + Send + Sync + 'static,
    {
        self.resolver = Some(Box::new(resolver));
        self
    }
}

impl MergeHook for DeepMergeBehavior {
    fn apply(&self, receiver: &mut Map<String, Value>, other: &Value, prior: MergePrior<'_>) {
        if !is_record_like(other) {
            // Not a record: fall back to whatever was installed before us.
            prior.call(receiver, other);
            return;
        }
        match &self.resolver {
            Some(resolver) => {
                self.merger
                    .merge_in_place_with(receiver, other, |key, current, incoming| {
                        resolver(key, current, incoming)
                    });
            }
            None => self.merger.merge_in_place(receiver, other),
        }
    }
}

impl fmt::Debug for DeepMergeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepMergeBehavior")
            .field("merger", &self.merger)
            .field("resolver", &self.resolver.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

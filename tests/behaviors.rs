use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Map, Value, json};

mod common;
use common::*;

use mixmap::behaviors::{
    BehaviorStack, DeepMergeBehavior, InspectHook, InspectPrior, MergeHook, MergePrior,
    PrettyInspect,
};
use mixmap::merge::Merger;
use mixmap::types::Operation;

/// Inspect hook that wraps the prior rendering in a tagged marker.
struct Tag(&'static str);

impl InspectHook for Tag {
    fn render(&self, _host: &str, value: &Value, prior: InspectPrior<'_>) -> String {
        format!("{}({})", self.0, prior.call(value))
    }
}

/// Merge hook that counts invocations, then defers to the prior merge.
#[derive(Default)]
struct Counting {
    calls: AtomicUsize,
}

impl MergeHook for Counting {
    fn apply(&self, receiver: &mut Map<String, Value>, other: &Value, prior: MergePrior<'_>) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        prior.call(receiver, other);
    }
}

/********************
 * Attachment order
 ********************/

#[test]
fn last_attached_inspect_behavior_wraps_outermost() {
    let stack = BehaviorStack::named("Host")
        .with_inspect(Arc::new(Tag("x")))
        .with_inspect(Arc::new(Tag("y")));

    assert_eq!(stack.inspect(&json!(1)), "y(x(1))");
}

#[test]
fn attachment_order_is_deterministic_across_calls() {
    let stack = BehaviorStack::named("Host")
        .with_inspect(Arc::new(Tag("a")))
        .with_inspect(Arc::new(Tag("b")))
        .with_inspect(Arc::new(Tag("c")));

    assert_eq!(stack.inspect(&json!(null)), "c(b(a(null)))");
    assert_eq!(stack.inspect(&json!(null)), "c(b(a(null)))");
}

#[test]
fn attached_counts_track_each_operation_separately() {
    let mut stack = BehaviorStack::named("Host");
    assert_eq!(stack.attached(Operation::Inspect), 0);
    assert_eq!(stack.attached(Operation::Merge), 0);

    stack
        .attach_inspect(Arc::new(PrettyInspect))
        .attach_merge(Arc::new(DeepMergeBehavior::new()));

    assert_eq!(stack.attached(Operation::Inspect), 1);
    assert_eq!(stack.attached(Operation::Merge), 1);
}

/********************
 * Base operations
 ********************/

#[test]
fn bare_stack_inspect_falls_back_to_compact_json() {
    let stack = BehaviorStack::named("Host");

    assert_eq!(stack.inspect(&json!({"a": 1})), r#"{"a":1}"#);
    assert_eq!(stack.inspect(&json!([1, 2])), "[1,2]");
}

#[test]
fn bare_stack_merge_overwrites_shallowly() {
    let stack = BehaviorStack::named("Host");
    let base = record(json!({"c": {"c1": "x", "c2": "y"}}));

    let merged = stack.merge(&base, &json!({"c": {"c3": "z"}}));

    // No deep-merge behavior attached: nested records are replaced wholesale.
    assert_eq!(merged, record(json!({"c": {"c3": "z"}})));
}

#[test]
fn deep_merge_behavior_merges_nested_records() {
    let stack = BehaviorStack::named("Host").with_merge(Arc::new(DeepMergeBehavior::new()));
    let base = record(json!({"c": {"c1": "x", "c2": "y"}}));

    let merged = stack.merge(&base, &json!({"c": {"c2": "z", "c3": "w"}}));

    assert_eq!(merged, record(json!({"c": {"c1": "x", "c2": "z", "c3": "w"}})));
}

/********************
 * Fallback delegation
 ********************/

#[test]
fn merge_behaviors_compose_through_the_prior_handle() {
    let counting = Arc::new(Counting::default());
    let stack = BehaviorStack::named("Host")
        .with_merge(Arc::new(DeepMergeBehavior::new()))
        .with_merge(counting.clone());

    let base = record(json!({"c": {"c1": 1}}));
    let merged = stack.merge(&base, &json!({"c": {"c2": 2}}));

    // The outermost hook ran once, then delegated to deep merge.
    assert_eq!(counting.calls.load(Ordering::Relaxed), 1);
    assert_eq!(merged, record(json!({"c": {"c1": 1, "c2": 2}})));
}

#[test]
fn deep_merge_behavior_delegates_non_records_to_prior() {
    let stack = BehaviorStack::named("Host").with_merge(Arc::new(DeepMergeBehavior::new()));
    let base = record(json!({"a": 1}));

    let merged = stack.merge(&base, &json!("not a record"));

    assert_eq!(merged, base);
}

#[test]
fn in_place_stack_merge_mutates_only_the_receiver() {
    let stack = BehaviorStack::named("Host").with_merge(Arc::new(DeepMergeBehavior::new()));
    let mut receiver = record(json!({"a": 1}));
    let other = json!({"b": {"b1": 2}});

    stack.merge_in_place(&mut receiver, &other);

    assert_eq!(receiver, record(json!({"a": 1, "b": {"b1": 2}})));
    assert_eq!(other, json!({"b": {"b1": 2}}));
}

/********************
 * Configured behaviors
 ********************/

#[test]
fn deep_merge_behavior_applies_a_stored_resolver() {
    let stack = BehaviorStack::named("Host").with_merge(Arc::new(
        DeepMergeBehavior::new().with_resolver(|_, ours, theirs| add(ours, theirs)),
    ));

    let merged = stack.merge(&record(json!({"b": 200})), &json!({"b": 250}));

    assert_eq!(merged, record(json!({"b": 450})));
}

#[test]
fn deep_merge_behavior_honors_a_capped_merger() {
    let stack = BehaviorStack::named("Host").with_merge(Arc::new(
        DeepMergeBehavior::new().with_merger(Merger::new().with_max_depth(1)),
    ));

    let merged = stack.merge(
        &record(json!({"a": {"b": {"keep": 1}}})),
        &json!({"a": {"b": {"add": 2}}}),
    );

    assert_eq!(merged, record(json!({"a": {"b": {"add": 2}}})));
}

/********************
 * Default stack and host names
 ********************/

#[test]
fn default_stack_wires_deep_merge_and_pretty_inspect() {
    let stack = BehaviorStack::default();

    assert_eq!(stack.host(), "Record");
    assert_eq!(stack.attached(Operation::Merge), 1);
    assert_eq!(stack.attached(Operation::Inspect), 1);

    let merged = stack.merge(&record(json!({"a": {"x": 1}})), &json!({"a": {"y": 2}}));
    assert_eq!(merged, record(json!({"a": {"x": 1, "y": 2}})));
}

#[test]
fn for_host_uses_the_short_type_name() {
    struct Settings;

    let stack = BehaviorStack::for_host::<Settings>();
    assert_eq!(stack.host(), "Settings");
}

#[test]
fn cloned_stacks_share_behavior_instances() {
    let counting = Arc::new(Counting::default());
    let stack = BehaviorStack::named("Host").with_merge(counting.clone());
    let clone = stack.clone();

    let mut receiver = record(json!({}));
    stack.merge_in_place(&mut receiver, &json!({"a": 1}));
    clone.merge_in_place(&mut receiver, &json!({"b": 2}));

    assert_eq!(counting.calls.load(Ordering::Relaxed), 2);
}

use serde_json::Value;

use super::{InspectHook, InspectPrior};

/// Deterministic, human-readable rendering for records and sequences.
///
/// Records render as `<TypeName key1=val1 key2=val2>` with keys sorted
/// ascending by their textual form; sequences render as
/// `<TypeName [v1, v2]>` in element order. Values and elements are
/// rendered via the previously installed rule, and any other input is
/// delegated to it unchanged, so stacked inspect behaviors keep
/// composing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrettyInspect;

impl InspectHook for PrettyInspect {
    fn render(&self, host: &str, value: &Value, prior: InspectPrior<'_>) -> String {
        match value {
            Value::Object(record) => {
                let mut entries: Vec<(&String, &Value)> = record.iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                let body: String = entries
                    .iter()
                    .map(|(key, val)| format!(" {key}={}", prior.call(val)))
                    .collect();
                format!("<{host}{body}>")
            }
            Value::Array(items) => {
                let body = items
                    .iter()
                    .map(|item| prior.call(item))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("<{host} [{body}]>")
            }
            other => prior.call(other),
        }
    }
}

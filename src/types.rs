//! Core identifier types shared across the extension set.
//!
//! The single type here, [`Operation`], names the host operation slots that
//! behaviors can augment. Each slot keeps its own attachment chain on a
//! [`BehaviorStack`](crate::behaviors::BehaviorStack), and behaviors attached
//! to the same slot compose in attachment order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the host operation a behavior augments.
///
/// # Examples
///
/// ```rust
/// use mixmap::behaviors::BehaviorStack;
/// use mixmap::types::Operation;
///
/// let stack = BehaviorStack::named("Settings");
/// assert_eq!(stack.attached(Operation::Merge), 0);
/// println!("nothing attached for {}", Operation::Merge);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Human-readable rendering of a record or sequence.
    Inspect,

    /// Combining an incoming record into the host record.
    Merge,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inspect => write!(f, "inspect"),
            Self::Merge => write!(f, "merge"),
        }
    }
}

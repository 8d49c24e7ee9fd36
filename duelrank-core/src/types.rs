/// Core data types for a ranking run.
///
/// An `Item` is one candidate being ranked (the spec-level "option" — the
/// name `Option` is taken in Rust). Items live in an arena: the backing
/// vec is never resized or reordered after initialization, so an item's
/// `id` doubles as its index and every pair reference stays valid for the
/// whole run.

/// One candidate in the ranking run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Position in the deduplicated input sequence. Stable for the run,
    /// never reused or reassigned.
    pub id: usize,
    /// Display name, unique within a run.
    pub name: String,
    /// Comparisons this item has won. Incremented exactly once per
    /// recorded choice where this item is the winner.
    pub wins: u32,
    /// False once removed. Transitions true→false only, never back.
    pub active: bool,
}

/// An unordered pair of item ids, stored `(i, j)` with `i < j`.
pub type Pair = (usize, usize);

/// Which side of the presented pair an action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

/// What `Engine::current_pair()` found at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentPair<'a> {
    /// A live pair awaiting a choice. Order is the pair's stored order,
    /// not re-randomized per presentation.
    Pair { first: &'a str, second: &'a str },
    /// Every remaining schedule entry has been compared or skipped.
    Finished,
    /// Fewer than 2 options remain active. `remaining` carries the lone
    /// survivor's name when exactly one is left.
    Insufficient { remaining: Option<&'a str> },
}

/// Result of a successful `Engine::record_choice()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// The winner's tally was incremented and the cursor advanced.
    Recorded,
    /// The schedule entry at the cursor had gone stale (an option was
    /// removed after presentation). The cursor moved past the stale
    /// entries without tallying; re-query `current_pair()`.
    SkippedStale,
}

/// Live progress through the schedule, counting only pairs whose two
/// options are both still active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    /// Completion percentage in `[0, 100]`. Zero when the run has no
    /// valid pairs at all — never divides by zero.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.done as f64 / self.total as f64) * 100.0
        }
    }
}

/// One row of `Engine::ranking()`: ready to render, no escaping applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedRow<'a> {
    pub name: &'a str,
    pub wins: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_empty_schedule_is_zero() {
        let p = Progress { done: 0, total: 0 };
        assert_eq!(p.percent(), 0.0);
    }

    #[test]
    fn percent_midway() {
        let p = Progress { done: 3, total: 12 };
        assert!((p.percent() - 25.0).abs() < 1e-10);
    }

    #[test]
    fn percent_complete() {
        let p = Progress { done: 21, total: 21 };
        assert!((p.percent() - 100.0).abs() < 1e-10);
    }
}

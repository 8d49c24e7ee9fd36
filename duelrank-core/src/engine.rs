/// Comparison engine: owns the option arena, the shuffled pair schedule,
/// and the cursor, and exposes the five run operations.
///
/// One `Engine` instance is one ranking run. `initialize()` replaces the
/// whole model atomically; nothing carries over between runs. All state is
/// owned here — callers read through the query methods and mutate only
/// through `record_choice` / `remove_option`.
use rand::Rng;

use crate::constants::MIN_OPTIONS;
use crate::error::EngineError;
use crate::schedule::build_schedule;
use crate::types::{ChoiceOutcome, CurrentPair, Item, Pair, Progress, RankedRow, Side};

/// Trim each entry, drop empties, and deduplicate by exact string match,
/// preserving the order of first occurrence. Matching is case-sensitive.
pub fn normalize_names<S: AsRef<str>>(raw_names: &[S]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(raw_names.len());
    for raw in raw_names {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if !names.iter().any(|n| n == trimmed) {
            names.push(trimmed.to_string());
        }
    }
    names
}

#[derive(Debug)]
pub struct Engine {
    /// Arena of options, indexed by id. Never resized or reordered after
    /// initialization — removal only flips `active`.
    items: Vec<Item>,
    /// Every unordered pair exactly once, shuffled at initialization.
    schedule: Vec<Pair>,
    /// Next schedule position to consider. Monotonically non-decreasing;
    /// resets only on `initialize`.
    cursor: usize,
    /// Whether this run has had at least one removal. The presentation
    /// layer consults this for its confirm-once UX.
    removal_occurred: bool,
}

impl Engine {
    /// Build a run from raw names using the thread RNG for the shuffle.
    pub fn new<S: AsRef<str>>(raw_names: &[S]) -> Result<Self, EngineError> {
        Self::with_rng(raw_names, &mut rand::rng())
    }

    /// Build a run with a caller-supplied RNG, for reproducible schedules.
    pub fn with_rng<S: AsRef<str>>(
        raw_names: &[S],
        rng: &mut impl Rng,
    ) -> Result<Self, EngineError> {
        let names = normalize_names(raw_names);
        if names.len() < MIN_OPTIONS {
            return Err(EngineError::InsufficientOptions(names.len()));
        }

        let items: Vec<Item> = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| Item { id, name, wins: 0, active: true })
            .collect();

        let schedule = build_schedule(items.len(), rng);

        Ok(Engine { items, schedule, cursor: 0, removal_occurred: false })
    }

    /// Replace the whole model with a fresh run. Atomic: on error the
    /// current run is left untouched.
    pub fn initialize<S: AsRef<str>>(&mut self, raw_names: &[S]) -> Result<(), EngineError> {
        *self = Self::new(raw_names)?;
        Ok(())
    }

    /// Number of options in the run, active or not.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Size of the full schedule (valid and invalidated entries alike).
    pub fn num_pairs(&self) -> usize {
        self.schedule.len()
    }

    /// Options not yet removed.
    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|i| i.active).count()
    }

    /// Read access to the option arena.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether this run has had at least one removal.
    pub fn removal_occurred(&self) -> bool {
        self.removal_occurred
    }

    fn pair_is_live(&self, (a, b): Pair) -> bool {
        self.items[a].active && self.items[b].active
    }

    /// First schedule index at or after the cursor whose pair is live.
    fn next_live_index(&self) -> Option<usize> {
        (self.cursor..self.schedule.len()).find(|&k| self.pair_is_live(self.schedule[k]))
    }

    /// The next pair awaiting a choice, or a terminal state.
    ///
    /// Side-effect-free: the cursor never moves here, so repeated calls
    /// return the identical pair. Entries invalidated by removal are
    /// scanned over; they are consumed for good only by `record_choice`.
    pub fn current_pair(&self) -> CurrentPair<'_> {
        if self.active_count() < MIN_OPTIONS {
            let remaining = self.items.iter().find(|i| i.active).map(|i| i.name.as_str());
            return CurrentPair::Insufficient { remaining };
        }

        match self.next_live_index() {
            Some(k) => {
                let (a, b) = self.schedule[k];
                CurrentPair::Pair {
                    first: self.items[a].name.as_str(),
                    second: self.items[b].name.as_str(),
                }
            }
            None => CurrentPair::Finished,
        }
    }

    /// Record the winner of the current pair and advance the cursor.
    ///
    /// If the entry at the cursor went stale between presentation and
    /// choice (an option was removed), the cursor moves past the stale
    /// entries without tallying and `SkippedStale` is returned — not an
    /// error, the caller just re-queries `current_pair()`.
    pub fn record_choice(&mut self, side: Side) -> Result<ChoiceOutcome, EngineError> {
        // A live entry implies two active options, so this also covers the
        // insufficient-options terminal state.
        let live = self.next_live_index().ok_or(EngineError::NoActivePair)?;

        if live != self.cursor {
            self.cursor = live;
            return Ok(ChoiceOutcome::SkippedStale);
        }

        let (a, b) = self.schedule[self.cursor];
        let winner = match side {
            Side::First => a,
            Side::Second => b,
        };
        self.items[winner].wins += 1;
        self.cursor += 1;
        Ok(ChoiceOutcome::Recorded)
    }

    /// Remove the option on `side` of the current pair from the run.
    ///
    /// The cursor does not move: removal only changes which future entries
    /// count as valid. The removed option keeps its accumulated wins but
    /// is excluded from ranking and progress from now on. Permanent for
    /// the run — there is no undo.
    pub fn remove_option(&mut self, side: Side) -> Result<(), EngineError> {
        if self.active_count() < MIN_OPTIONS {
            return Err(EngineError::CannotRemoveLast);
        }
        let live = self.next_live_index().ok_or(EngineError::NoActivePair)?;

        let (a, b) = self.schedule[live];
        let target = match side {
            Side::First => a,
            Side::Second => b,
        };
        self.items[target].active = false;
        self.removal_occurred = true;
        Ok(())
    }

    /// Progress through the schedule, counting only entries whose two
    /// options are both still active.
    ///
    /// Recomputed from scratch each call: a removal retroactively shrinks
    /// both counts by excluding every entry touching the removed option,
    /// so no incremental counter can be trusted.
    pub fn progress(&self) -> Progress {
        let mut done = 0;
        let mut total = 0;
        for (k, &pair) in self.schedule.iter().enumerate() {
            if self.pair_is_live(pair) {
                total += 1;
                if k < self.cursor {
                    done += 1;
                }
            }
        }
        Progress { done, total }
    }

    /// Active options ordered by wins descending, name ascending on ties.
    /// Names are unique within a run, so the order is total and stable
    /// across calls regardless of schedule order.
    pub fn ranking(&self) -> Vec<RankedRow<'_>> {
        let mut rows: Vec<RankedRow<'_>> = self
            .items
            .iter()
            .filter(|i| i.active)
            .map(|i| RankedRow { name: i.name.as_str(), wins: i.wins })
            .collect();
        rows.sort_by(|x, y| y.wins.cmp(&x.wins).then_with(|| x.name.cmp(y.name)));
        rows
    }
}

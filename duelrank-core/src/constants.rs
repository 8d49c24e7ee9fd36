/// Minimum number of distinct options required to start a run.
///
/// Ranking fewer than two items is degenerate: there is nothing to
/// compare. Initialization rejects smaller inputs outright rather than
/// producing an empty schedule.
pub const MIN_OPTIONS: usize = 2;

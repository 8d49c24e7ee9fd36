/// Engine error kinds. All are local and recoverable — none abort a run
/// that has already started, and a failed `initialize` leaves the previous
/// run untouched.
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Fewer than 2 distinct non-empty names survived trimming and
    /// deduplication. Carries the count that did survive.
    #[error("need at least 2 distinct options to rank, got {0}")]
    InsufficientOptions(usize),

    /// An operation that needs a current pair was called in a terminal
    /// state (schedule exhausted or too few options remain active).
    #[error("no comparison pair is currently available")]
    NoActivePair,

    /// Removal would leave fewer than one active option. The last
    /// surviving option can never be removed.
    #[error("cannot remove an option when fewer than 2 remain active")]
    CannotRemoveLast,
}

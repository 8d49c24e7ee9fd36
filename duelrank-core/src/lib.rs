/// duelrank-core: Pure-computation pairwise comparison engine.
///
/// Every unordered pair of options is compared exactly once, wins are
/// tallied raw, and the ranking is wins-descending. No IO, no terminal,
/// no filesystem — bring your own presentation layer.
///
/// Options are identified by `usize` ids assigned at initialization; ids
/// are stable for the lifetime of a run and never reused. Removing an
/// option mid-run flags it inactive rather than deleting it, so pair
/// references and accumulated win history stay valid.
///
/// # Quick start
///
/// ```rust
/// use duelrank_core::{Engine, Side, CurrentPair};
///
/// let mut engine = Engine::new(&["Pizza", "Sushi", "Tacos"]).unwrap();
///
/// loop {
///     match engine.current_pair() {
///         CurrentPair::Pair { first, second } => println!("{first} vs {second}"),
///         _ => break,
///     }
///     engine.record_choice(Side::First).unwrap();
/// }
///
/// for row in engine.ranking() {
///     println!("{}: {} wins", row.name, row.wins);
/// }
/// ```

pub mod constants;
pub mod engine;
pub mod error;
pub mod schedule;
pub mod types;

// Re-export primary public API at crate root.
pub use engine::{normalize_names, Engine};
pub use error::EngineError;
pub use schedule::{all_pairs, build_schedule};
pub use types::{ChoiceOutcome, CurrentPair, Item, Pair, Progress, RankedRow, Side};

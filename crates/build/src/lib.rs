//! Build mode: picking catalog items, previewing them under the cursor and
//! committing them to the island.
//!
//! # Invariants
//! - One item is active at most.
//! - A commit only happens from a preview that allows placement.
//! - Every commit returns build mode to idle.

mod builder;
mod mode;

pub use builder::{ActionOutcome, BuildError, IslandBuilder};
pub use mode::{BuildMode, BuildPhase};

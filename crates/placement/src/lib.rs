//! Placement Engine: decides where a catalog item snaps and whether it fits.
//!
//! # Invariants
//! - `evaluate` is total; an illegal placement is reported, never raised.
//! - No two placed footprints overlap, and every placed cell is in bounds.
//!   Both are checked only when an instance is committed.
//! - Instance ids are generated fresh on every commit.

mod bounds;
mod engine;
mod island;

pub use bounds::PlacementBounds;
pub use engine::{PlacementEngine, PlacementEvaluation, Rejection, footprints_overlap};
pub use island::{Island, IslandEvent, PlacedInstance};

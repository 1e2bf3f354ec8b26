//! Shared value types for the island builder.
//!
//! # Invariants
//! - Value types are `Copy` and carry no behavior beyond conversions.
//! - Instance ids are never reused.

mod types;

pub use types::{GridCell, InstanceId, WorldPosition};

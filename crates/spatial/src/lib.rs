//! Spatial Model: world geometry constants and pure coordinate math.
//!
//! # Invariants
//! - Every function here is deterministic and side-effect free.
//! - `world_to_grid(grid_to_world(c)) == c` for every integer cell.
//! - The circular buildable zone and the square placement grid are
//!   independent; nothing here checks one against the other.

mod grid;
mod layout;
mod ray;

pub use grid::{Zone, grid_to_world, is_in_buildable_zone, round_half_up, snap, world_to_grid};
pub use layout::{GridSpec, Layer, Layers, RingZone, WorldLayout};
pub use ray::Ray;

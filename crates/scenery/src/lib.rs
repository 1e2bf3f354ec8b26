//! Scenery: procedural props around the island.
//!
//! Purely cosmetic and kept apart from placement. Generators are lazy,
//! finite iterators; a fixed [`ScatterSeed`] makes them reproducible.

mod clouds;
mod mountains;
mod seed;

pub use clouds::{CloudCluster, CloudPuff, CloudRing};
pub use mountains::{MountainRange, Peak};
pub use seed::ScatterSeed;

use isle_spatial::WorldLayout;

/// Everything scattered around one island.
#[derive(Debug, Clone)]
pub struct Scenery {
    pub seed: u64,
    pub clouds: Vec<CloudCluster>,
    pub peaks: Vec<Peak>,
}

impl Scenery {
    /// Generate clouds and mountains from one seed. The mountain stream is
    /// offset from the cloud stream so the two do not share random draws.
    pub fn generate(layout: &WorldLayout, seed: ScatterSeed) -> Self {
        let seed = seed.resolve();
        let clouds: Vec<_> = CloudRing::new(layout, ScatterSeed::Fixed(seed)).collect();
        let peaks: Vec<_> =
            MountainRange::new(layout, ScatterSeed::Fixed(seed.wrapping_add(1))).collect();
        tracing::debug!(seed, clouds = clouds.len(), peaks = peaks.len(), "scenery generated");
        Self {
            seed,
            clouds,
            peaks,
        }
    }
}

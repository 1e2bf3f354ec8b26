use glam::Vec3;
use isle_common::{GridCell, WorldPosition};

use crate::layout::{Layer, WorldLayout};

/// Round half up, the way the island has always snapped (`-0.5` goes to `0`,
/// `2.5` goes to `3`). `f32::round` would send `-0.5` to `-1`.
pub fn round_half_up(v: f32) -> i32 {
    // `floor(v + 0.5)` is off for the float just below a half: the sum
    // rounds up to the next integer.
    let f = v.floor();
    (if v - f >= 0.5 { f + 1.0 } else { f }) as i32
}

/// Snap a world position to the cell whose center is nearest, without any
/// origin offset.
pub fn snap(pos: WorldPosition) -> GridCell {
    GridCell::new(round_half_up(pos.x), round_half_up(pos.z))
}

/// Which part of the world a ground position falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Buildable,
    /// Cloud and mountain bands overlap between their radii; mountains win.
    Mountains,
    Clouds,
    /// Open terrain or sea that is none of the above.
    Wilds,
}

impl WorldLayout {
    /// Origin-relative grid addressing: subtract the grid start, then round.
    pub fn world_to_grid(&self, pos: WorldPosition) -> GridCell {
        let [sx, sz] = self.grid.start;
        GridCell::new(round_half_up(pos.x - sx), round_half_up(pos.z - sz))
    }

    /// Inverse of [`WorldLayout::world_to_grid`] for integer cells.
    pub fn grid_to_world(&self, cell: GridCell) -> WorldPosition {
        let [sx, sz] = self.grid.start;
        WorldPosition::new(cell.x as f32 + sx, cell.z as f32 + sz)
    }

    /// Grid cell lifted onto the building layer.
    pub fn grid_anchor(&self, cell: GridCell) -> Vec3 {
        self.grid_to_world(cell)
            .at_height(self.layers.height(Layer::Buildings))
    }

    pub fn is_in_buildable_zone(&self, pos: WorldPosition) -> bool {
        pos.distance_from_center() <= self.buildable_radius
    }

    pub fn is_in_mountain_zone(&self, pos: WorldPosition) -> bool {
        self.mountains.contains_distance(pos.distance_from_center())
    }

    pub fn is_in_cloud_zone(&self, pos: WorldPosition) -> bool {
        self.clouds.contains_distance(pos.distance_from_center())
    }

    pub fn zone_of(&self, pos: WorldPosition) -> Zone {
        if self.is_in_buildable_zone(pos) {
            Zone::Buildable
        } else if self.is_in_mountain_zone(pos) {
            Zone::Mountains
        } else if self.is_in_cloud_zone(pos) {
            Zone::Clouds
        } else {
            Zone::Wilds
        }
    }
}

/// [`WorldLayout::world_to_grid`] on the default island.
pub fn world_to_grid(pos: WorldPosition) -> GridCell {
    WorldLayout::ISLAND.world_to_grid(pos)
}

/// [`WorldLayout::grid_to_world`] on the default island.
pub fn grid_to_world(cell: GridCell) -> WorldPosition {
    WorldLayout::ISLAND.grid_to_world(cell)
}

/// [`WorldLayout::is_in_buildable_zone`] on the default island.
pub fn is_in_buildable_zone(pos: WorldPosition) -> bool {
    WorldLayout::ISLAND.is_in_buildable_zone(pos)
}

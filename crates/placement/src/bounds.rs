use isle_common::GridCell;
use isle_spatial::GridSpec;
use serde::{Deserialize, Serialize};

/// Inclusive cell range accepted on both axes.
///
/// Built from a grid size `n` as `-(n / 2)..=n - n / 2 - 1`, so the default
/// 10-wide grid accepts `-5..=4`. The range is one cell short on the high
/// side; that is the placement policy, not an off-by-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementBounds {
    pub min: i32,
    pub max: i32,
}

impl PlacementBounds {
    pub const ISLAND: Self = Self::from_grid_size(GridSpec::ISLAND.size);

    pub const fn from_grid_size(size: i32) -> Self {
        let half = size / 2;
        Self {
            min: -half,
            max: size - half - 1,
        }
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        (self.min..=self.max).contains(&cell.x) && (self.min..=self.max).contains(&cell.z)
    }

    /// Cells per axis.
    pub fn width(&self) -> i32 {
        self.max - self.min + 1
    }

    /// Every cell inside the bounds, row by row (z outer, x inner).
    pub fn cells(&self) -> impl Iterator<Item = GridCell> {
        let (min, max) = (self.min, self.max);
        (min..=max).flat_map(move |z| (min..=max).map(move |x| GridCell::new(x, z)))
    }
}

impl Default for PlacementBounds {
    fn default() -> Self {
        Self::ISLAND
    }
}

impl From<&GridSpec> for PlacementBounds {
    fn from(grid: &GridSpec) -> Self {
        Self::from_grid_size(grid.size)
    }
}

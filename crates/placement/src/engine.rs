use isle_catalog::{Footprint, PlaceableDefinition};
use isle_common::{GridCell, InstanceId, WorldPosition};
use isle_spatial::snap;
use serde::Serialize;

use crate::bounds::PlacementBounds;
use crate::island::PlacedInstance;

/// Why a proposed placement is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// The snapped cell lies outside the placement bounds.
    OutOfBounds,
    /// The footprint overlaps an existing instance (the first one found).
    Overlaps { instance: InstanceId },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("outside the build grid"),
            Self::Overlaps { instance } => write!(f, "overlaps instance {}", instance.short()),
        }
    }
}

/// Outcome of evaluating one cursor position for one catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementEvaluation {
    /// Item the evaluation was made for.
    pub definition_id: &'static str,
    /// Raw cursor position before snapping.
    pub cursor: WorldPosition,
    /// Snapped cell the item would occupy.
    pub cell: GridCell,
    /// `None` when the placement is legal.
    pub rejection: Option<Rejection>,
}

impl PlacementEvaluation {
    pub fn can_place(&self) -> bool {
        self.rejection.is_none()
    }
}

/// Axis-aligned rectangle overlap on the ground plane, footprints centered on
/// their cells. Touching edges do not overlap.
pub fn footprints_overlap(a: GridCell, a_size: Footprint, b: GridCell, b_size: Footprint) -> bool {
    let (ahx, ahz) = a_size.half_extents();
    let (bhx, bhz) = b_size.half_extents();
    let dx = (a.x - b.x).abs() as f32;
    let dz = (a.z - b.z).abs() as f32;
    dx < ahx + bhx && dz < ahz + bhz
}

/// Decides whether a catalog item may be placed under the cursor.
///
/// Stateless apart from its bounds; the placed instances are passed in on
/// every call so the engine never holds a second copy of the island.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementEngine {
    bounds: PlacementBounds,
}

impl PlacementEngine {
    pub fn new(bounds: PlacementBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> PlacementBounds {
        self.bounds
    }

    /// Snap the cursor and check bounds, then overlap. Total: never fails.
    pub fn evaluate(
        &self,
        definition: &PlaceableDefinition,
        cursor: WorldPosition,
        existing: &[PlacedInstance],
    ) -> PlacementEvaluation {
        let _span = tracing::debug_span!("evaluate_placement", item = definition.id).entered();
        let cell = snap(cursor);

        let rejection = if !self.bounds.contains(cell) {
            Some(Rejection::OutOfBounds)
        } else {
            existing
                .iter()
                .find(|placed| {
                    footprints_overlap(cell, definition.footprint, placed.cell, placed.footprint)
                })
                .map(|placed| Rejection::Overlaps {
                    instance: placed.id,
                })
        };

        tracing::debug!(%cursor, %cell, ?rejection, "placement evaluated");
        PlacementEvaluation {
            definition_id: definition.id,
            cursor,
            cell,
            rejection,
        }
    }
}

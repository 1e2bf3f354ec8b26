use isle_catalog::{Footprint, PlaceableDefinition};
use isle_common::{GridCell, InstanceId};
use serde::Serialize;

use crate::engine::{PlacementEvaluation, footprints_overlap};

/// An item committed to the island. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacedInstance {
    pub id: InstanceId,
    /// Catalog id of the placed item.
    pub definition_id: &'static str,
    pub cell: GridCell,
    /// Copied from the definition at commit time for overlap tests.
    pub footprint: Footprint,
}

/// An event record produced by every mutation of the island.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum IslandEvent {
    /// An instance was committed at a cell for the given cost.
    Placed { instance: PlacedInstance, cost: u32 },
}

/// The placed-instance collection.
///
/// Owned by a single controller and only grown through [`Island::commit`],
/// which enforces the non-overlap and bounds invariants by requiring a
/// passing [`PlacementEvaluation`]. Instances keep their placement order.
#[derive(Debug, Clone, Default)]
pub struct Island {
    instances: Vec<PlacedInstance>,
    total_cost: u64,
    /// Append-only log of all mutations.
    event_log: Vec<IslandEvent>,
}

impl Island {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed instances in placement order.
    pub fn instances(&self) -> &[PlacedInstance] {
        &self.instances
    }

    pub fn get(&self, id: InstanceId) -> Option<&PlacedInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Instances whose anchor cell is `cell`.
    pub fn at_cell(&self, cell: GridCell) -> impl Iterator<Item = &PlacedInstance> {
        self.instances.iter().filter(move |i| i.cell == cell)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Sum of the catalog cost of everything placed so far.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[IslandEvent] {
        &self.event_log
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<IslandEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Commit a placement that `evaluation` approved for `definition`.
    ///
    /// Calling this with a rejected evaluation, one made for another item, or
    /// one made before the island changed underneath it is a caller bug: it
    /// panics in debug builds and is ignored (returning `None`) in release
    /// builds. Bounds are fixed per engine, so only overlap can go stale.
    pub fn commit(
        &mut self,
        definition: &PlaceableDefinition,
        evaluation: &PlacementEvaluation,
    ) -> Option<PlacedInstance> {
        let still_clear = !self.instances.iter().any(|placed| {
            footprints_overlap(evaluation.cell, definition.footprint, placed.cell, placed.footprint)
        });
        let contract_held =
            evaluation.can_place() && evaluation.definition_id == definition.id && still_clear;
        debug_assert!(
            contract_held,
            "commit of {} at {} without an approving evaluation",
            definition.id, evaluation.cell
        );
        if !contract_held {
            tracing::warn!(
                item = definition.id,
                cell = %evaluation.cell,
                "ignoring commit without an approving evaluation"
            );
            return None;
        }

        let instance = PlacedInstance {
            id: InstanceId::new(),
            definition_id: definition.id,
            cell: evaluation.cell,
            footprint: definition.footprint,
        };
        self.instances.push(instance);
        self.total_cost += u64::from(definition.cost);
        self.event_log.push(IslandEvent::Placed {
            instance,
            cost: definition.cost,
        });
        tracing::info!(
            item = definition.id,
            id = %instance.id.short(),
            cell = %instance.cell,
            "placed"
        );
        Some(instance)
    }
}

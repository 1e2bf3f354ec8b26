use isle_catalog::{Catalog, PlaceableDefinition};
use isle_common::WorldPosition;
use isle_input::Action;
use isle_placement::{Island, PlacedInstance, PlacementEngine, PlacementEvaluation};

use crate::mode::{BuildMode, BuildPhase};

/// Errors from builder operations.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no catalog item with id {0:?}")]
    UnknownItem(String),
}

/// What an [`Action`] did to the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// Nothing to do in the current state.
    Ignored,
    /// Build mode moved to this phase.
    PhaseChanged(BuildPhase),
    /// The preview was re-evaluated.
    Previewed(PlacementEvaluation),
    /// An instance was committed.
    Placed(PlacedInstance),
    /// The shop panel is now open (`true`) or closed.
    Shop(bool),
}

/// The whole island-builder application state.
///
/// Owns the catalog, the placed instances and the build mode. All mutation
/// goes through `&mut self` from the single event-handling thread.
#[derive(Debug, Clone)]
pub struct IslandBuilder {
    catalog: Catalog,
    engine: PlacementEngine,
    island: Island,
    mode: BuildMode,
    shop_open: bool,
}

impl IslandBuilder {
    pub fn new(catalog: Catalog, engine: PlacementEngine) -> Self {
        Self {
            catalog,
            engine,
            island: Island::new(),
            mode: BuildMode::Idle,
            shop_open: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    pub fn island(&self) -> &Island {
        &self.island
    }

    /// Mutable island access, for draining its event log.
    pub fn island_mut(&mut self) -> &mut Island {
        &mut self.island
    }

    pub fn mode(&self) -> &BuildMode {
        &self.mode
    }

    pub fn phase(&self) -> BuildPhase {
        self.mode.phase()
    }

    pub fn shop_open(&self) -> bool {
        self.shop_open
    }

    /// Definition of the item being placed, if any.
    pub fn active_definition(&self) -> Option<&PlaceableDefinition> {
        self.mode.item().and_then(|id| self.catalog.get(id))
    }

    pub fn open_shop(&mut self) {
        self.shop_open = true;
    }

    pub fn close_shop(&mut self) {
        self.shop_open = false;
    }

    pub fn toggle_shop(&mut self) -> bool {
        self.shop_open = !self.shop_open;
        self.shop_open
    }

    /// Pick a catalog item and start placing it. Replaces any active item
    /// without committing it, and closes the shop.
    pub fn select(&mut self, id: &str) -> Result<(), BuildError> {
        let Some(def) = self.catalog.get(id) else {
            tracing::warn!(item = id, "unknown catalog item");
            return Err(BuildError::UnknownItem(id.to_owned()));
        };
        if let Some(previous) = self.mode.item() {
            tracing::debug!(previous, item = def.id, "replacing active item");
        }
        self.mode.select(def.id);
        self.shop_open = false;
        tracing::debug!(item = def.id, phase = %self.mode.phase(), "item selected");
        self.mode.begin_placing();
        tracing::debug!(item = def.id, phase = %self.mode.phase(), "placing");
        Ok(())
    }

    /// Re-evaluate the active item at `cursor`. Returns `None` when not placing.
    pub fn cursor_moved(&mut self, cursor: WorldPosition) -> Option<&PlacementEvaluation> {
        if !self.mode.is_placing() {
            return None;
        }
        let def = self.mode.item().and_then(|id| self.catalog.get(id))?;
        let evaluation = self.engine.evaluate(def, cursor, self.island.instances());
        self.mode.set_preview(evaluation);
        self.mode.preview()
    }

    /// Commit the active item at its last evaluated cell.
    ///
    /// Does nothing (returns `None`) unless placing with a preview that
    /// allows placement; on success build mode returns to idle.
    pub fn confirm(&mut self) -> Option<PlacedInstance> {
        let evaluation = *self.mode.preview().filter(|e| e.can_place())?;
        let def = self.catalog.get(evaluation.definition_id)?;
        let placed = self.island.commit(def, &evaluation)?;
        self.mode.reset();
        Some(placed)
    }

    /// Leave build mode. Returns whether anything was active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.mode.item().is_some();
        if was_active {
            tracing::debug!("build mode cancelled");
        }
        self.mode.reset();
        was_active
    }

    /// Dispatch one input action.
    pub fn apply(&mut self, action: &Action) -> Result<ActionOutcome, BuildError> {
        let outcome = match action {
            Action::OpenShop => {
                self.open_shop();
                ActionOutcome::Shop(true)
            }
            Action::CloseShop => {
                self.close_shop();
                ActionOutcome::Shop(false)
            }
            Action::ToggleShop => ActionOutcome::Shop(self.toggle_shop()),
            Action::SelectItem(id) => {
                self.select(id)?;
                ActionOutcome::PhaseChanged(self.phase())
            }
            Action::CursorMoved(pos) => match self.cursor_moved(*pos) {
                Some(evaluation) => ActionOutcome::Previewed(*evaluation),
                None => ActionOutcome::Ignored,
            },
            Action::Confirm => match self.confirm() {
                Some(placed) => ActionOutcome::Placed(placed),
                None => ActionOutcome::Ignored,
            },
            Action::Cancel => {
                if self.cancel() {
                    ActionOutcome::PhaseChanged(BuildPhase::Idle)
                } else {
                    ActionOutcome::Ignored
                }
            }
            Action::Noop => ActionOutcome::Ignored,
        };
        Ok(outcome)
    }
}

impl Default for IslandBuilder {
    fn default() -> Self {
        Self::new(Catalog::builtin(), PlacementEngine::default())
    }
}

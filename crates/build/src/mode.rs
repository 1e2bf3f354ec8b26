use isle_placement::PlacementEvaluation;

/// Phase of the build-mode state machine, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildPhase {
    Idle,
    Selecting,
    Placing,
}

impl std::fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Selecting => "selecting",
            Self::Placing => "placing",
        })
    }
}

/// Build-mode state.
///
/// ```text
/// Idle ──pick──▶ Selecting ──always──▶ Placing ──commit / cancel──▶ Idle
///                                        └──pick──▶ Selecting (replaces the item)
/// ```
///
/// At most one item is active at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BuildMode {
    #[default]
    Idle,
    /// An item was picked from the catalog and placement has not started yet.
    Selecting { item: &'static str },
    /// The item follows the cursor; `preview` is the latest evaluation.
    Placing {
        item: &'static str,
        preview: Option<PlacementEvaluation>,
    },
}

impl BuildMode {
    pub fn phase(&self) -> BuildPhase {
        match self {
            Self::Idle => BuildPhase::Idle,
            Self::Selecting { .. } => BuildPhase::Selecting,
            Self::Placing { .. } => BuildPhase::Placing,
        }
    }

    /// The active item, if any.
    pub fn item(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Selecting { item } | Self::Placing { item, .. } => Some(*item),
        }
    }

    pub fn preview(&self) -> Option<&PlacementEvaluation> {
        match self {
            Self::Placing { preview, .. } => preview.as_ref(),
            _ => None,
        }
    }

    pub fn is_placing(&self) -> bool {
        matches!(self, Self::Placing { .. })
    }

    /// Pick an item. Valid from any phase; an active item is replaced.
    pub(crate) fn select(&mut self, item: &'static str) {
        *self = Self::Selecting { item };
    }

    /// The unconditional `Selecting → Placing` edge. No-op elsewhere.
    pub(crate) fn begin_placing(&mut self) {
        if let Self::Selecting { item } = *self {
            *self = Self::Placing {
                item,
                preview: None,
            };
        }
    }

    pub(crate) fn set_preview(&mut self, evaluation: PlacementEvaluation) {
        if let Self::Placing { preview, .. } = self {
            *preview = Some(evaluation);
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::Idle;
    }
}

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use crate::builtin::BUILTIN;
use crate::definition::{BuildingKind, Category, PlaceableDefinition};

/// Errors from building a catalog or parsing catalog queries.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate item id {0:?}")]
    DuplicateId(&'static str),
    #[error("item id must not be empty")]
    EmptyId,
    #[error("item {0:?} has a non-positive or non-finite footprint")]
    InvalidFootprint(&'static str),
    #[error("unknown shop tab {0:?}")]
    UnknownTab(String),
}

/// The fixed set of items a user may place, keyed by id.
///
/// Built once at startup and only read afterwards. Iteration follows the
/// order definitions were supplied in (shop order).
#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: Vec<PlaceableDefinition>,
    index: BTreeMap<&'static str, usize>,
}

impl Catalog {
    /// The built-in shop stock.
    pub fn builtin() -> Self {
        Self::indexed(BUILTIN.to_vec())
    }

    /// Build a catalog from arbitrary definitions, validating ids and footprints.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = PlaceableDefinition>,
    ) -> Result<Self, CatalogError> {
        let definitions: Vec<_> = definitions.into_iter().collect();
        let mut seen = BTreeSet::new();
        for def in &definitions {
            if def.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !def.footprint.is_valid() {
                return Err(CatalogError::InvalidFootprint(def.id));
            }
            if !seen.insert(def.id) {
                return Err(CatalogError::DuplicateId(def.id));
            }
        }
        Ok(Self::indexed(definitions))
    }

    fn indexed(definitions: Vec<PlaceableDefinition>) -> Self {
        let index = definitions
            .iter()
            .enumerate()
            .map(|(i, def)| (def.id, i))
            .collect();
        tracing::debug!(items = definitions.len(), "catalog loaded");
        Self { definitions, index }
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&PlaceableDefinition> {
        self.index.get(id).map(|&i| &self.definitions[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All items in shop order.
    pub fn iter(&self) -> impl Iterator<Item = &PlaceableDefinition> {
        self.definitions.iter()
    }

    /// Items listed under a shop tab, in shop order.
    pub fn in_tab(&self, tab: ShopTab) -> impl Iterator<Item = &PlaceableDefinition> {
        self.definitions.iter().filter(move |def| tab.matches(def))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Tabs of the shop panel. Buildings are split by kind; roads and
/// decorations get one tab each.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShopTab {
    #[default]
    Residential,
    Commercial,
    Industrial,
    Special,
    Roads,
    Decorations,
}

impl ShopTab {
    pub const ALL: [ShopTab; 6] = [
        Self::Residential,
        Self::Commercial,
        Self::Industrial,
        Self::Special,
        Self::Roads,
        Self::Decorations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Industrial => "industrial",
            Self::Special => "special",
            Self::Roads => "roads",
            Self::Decorations => "decorations",
        }
    }

    pub fn matches(self, def: &PlaceableDefinition) -> bool {
        match (self, def.category) {
            (Self::Roads, Category::Road) => true,
            (Self::Decorations, Category::Decoration) => true,
            (tab, Category::Building { kind, .. }) => tab.building_kind() == Some(kind),
            _ => false,
        }
    }

    fn building_kind(self) -> Option<BuildingKind> {
        match self {
            Self::Residential => Some(BuildingKind::Residential),
            Self::Commercial => Some(BuildingKind::Commercial),
            Self::Industrial => Some(BuildingKind::Industrial),
            Self::Special => Some(BuildingKind::Special),
            Self::Roads | Self::Decorations => None,
        }
    }
}

impl FromStr for ShopTab {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownTab(s.to_owned()))
    }
}

impl std::fmt::Display for ShopTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

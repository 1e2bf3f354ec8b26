//! Catalog: the static set of placeable items.
//!
//! Buildings, roads and decorations live in one catalog keyed by id, told
//! apart by a [`Category`] discriminant.
//!
//! # Invariants
//! - Ids are unique and non-empty.
//! - Every footprint extent is finite and positive.
//! - Entries are never mutated after the catalog is built.

mod builtin;
mod catalog;
mod definition;

pub use catalog::{Catalog, CatalogError, ShopTab};
pub use definition::{BuildingKind, Category, Footprint, PlaceableDefinition, Rgb};

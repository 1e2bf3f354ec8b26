use std::time::Duration;

use crate::definition::{BuildingKind, Category, Footprint, PlaceableDefinition, Rgb};

const ROAD_GRAY: Rgb = Rgb::from_hex(0x78909C);

const fn building(kind: BuildingKind, secs: u64) -> Category {
    Category::Building {
        kind,
        build_time: Duration::from_secs(secs),
    }
}

/// The items the shop offers, in shop order.
pub(crate) const BUILTIN: &[PlaceableDefinition] = &[
    // Buildings
    PlaceableDefinition {
        id: "house",
        name: "House",
        category: building(BuildingKind::Residential, 30),
        footprint: Footprint::new(1.0, 1.0, 1.0),
        cost: 100,
        color: Rgb::from_hex(0x8BC34A),
    },
    PlaceableDefinition {
        id: "blacksmith",
        name: "Blacksmith",
        category: building(BuildingKind::Commercial, 60),
        footprint: Footprint::new(2.0, 1.0, 1.0),
        cost: 250,
        color: Rgb::from_hex(0xFF9800),
    },
    PlaceableDefinition {
        id: "townhall",
        name: "Town Hall",
        category: building(BuildingKind::Special, 300),
        footprint: Footprint::new(2.0, 2.0, 2.0),
        cost: 1000,
        color: Rgb::from_hex(0x9C27B0),
    },
    PlaceableDefinition {
        id: "market",
        name: "Market",
        category: building(BuildingKind::Commercial, 90),
        footprint: Footprint::new(2.0, 1.0, 2.0),
        cost: 300,
        color: Rgb::from_hex(0xFFEB3B),
    },
    PlaceableDefinition {
        id: "library",
        name: "Library",
        category: building(BuildingKind::Special, 180),
        footprint: Footprint::new(2.0, 2.0, 2.0),
        cost: 500,
        color: Rgb::from_hex(0x3F51B5),
    },
    // Roads
    PlaceableDefinition {
        id: "straight_road",
        name: "Straight Road",
        category: Category::Road,
        footprint: Footprint::new(1.0, 0.1, 1.0),
        cost: 50,
        color: ROAD_GRAY,
    },
    PlaceableDefinition {
        id: "curved_road",
        name: "Curved Road",
        category: Category::Road,
        footprint: Footprint::new(1.0, 0.1, 1.0),
        cost: 75,
        color: ROAD_GRAY,
    },
    PlaceableDefinition {
        id: "intersection",
        name: "Intersection",
        category: Category::Road,
        footprint: Footprint::new(1.0, 0.1, 1.0),
        cost: 100,
        color: ROAD_GRAY,
    },
    // Decorations
    PlaceableDefinition {
        id: "tree",
        name: "Tree",
        category: Category::Decoration,
        footprint: Footprint::new(0.5, 1.5, 0.5),
        cost: 25,
        color: Rgb::from_hex(0x4CAF50),
    },
    PlaceableDefinition {
        id: "fountain",
        name: "Fountain",
        category: Category::Decoration,
        footprint: Footprint::new(1.0, 1.0, 1.0),
        cost: 150,
        color: Rgb::from_hex(0x03A9F4),
    },
    PlaceableDefinition {
        id: "statue",
        name: "Statue",
        category: Category::Decoration,
        footprint: Footprint::new(0.5, 2.0, 0.5),
        cost: 200,
        color: Rgb::from_hex(0xBDBDBD),
    },
];

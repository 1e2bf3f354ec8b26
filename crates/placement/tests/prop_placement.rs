//! Property tests for placement evaluation and commits.

use proptest::prelude::*;

use isle_catalog::Catalog;
use isle_common::{GridCell, WorldPosition};
use isle_placement::{Island, PlacementEngine, Rejection, footprints_overlap};

fn item_ids() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "house",
        "blacksmith",
        "townhall",
        "market",
        "library",
        "straight_road",
        "tree",
        "fountain",
        "statue",
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Cells outside -5..=4 on either axis are never placeable.
    #[test]
    fn prop_outside_bounds_rejected(
        item in item_ids(),
        x in -40.0f32..40.0,
        z in -40.0f32..40.0,
    ) {
        let catalog = Catalog::builtin();
        let def = catalog.get(item).unwrap();
        let eval = PlacementEngine::default().evaluate(def, WorldPosition::new(x, z), &[]);
        let c = eval.cell;
        let outside = c.x < -5 || c.x > 4 || c.z < -5 || c.z > 4;
        prop_assert_eq!(outside, eval.rejection == Some(Rejection::OutOfBounds));
        prop_assert_eq!(!outside, eval.can_place());
    }

    /// The snapped cell is always within half a cell of the cursor.
    #[test]
    fn prop_snap_is_nearest(x in -20.0f32..20.0, z in -20.0f32..20.0) {
        let catalog = Catalog::builtin();
        let eval = PlacementEngine::default()
            .evaluate(catalog.get("house").unwrap(), WorldPosition::new(x, z), &[]);
        prop_assert!((eval.cell.x as f32 - x).abs() <= 0.5);
        prop_assert!((eval.cell.z as f32 - z).abs() <= 0.5);
    }

    /// However the user clicks around, the island never holds overlapping or
    /// out-of-bounds instances.
    #[test]
    fn prop_committed_instances_never_overlap(
        clicks in prop::collection::vec((item_ids(), -7.0f32..7.0, -7.0f32..7.0), 1..60),
    ) {
        let catalog = Catalog::builtin();
        let engine = PlacementEngine::default();
        let mut island = Island::new();
        for (item, x, z) in clicks {
            let def = catalog.get(item).unwrap();
            let eval = engine.evaluate(def, WorldPosition::new(x, z), island.instances());
            if eval.can_place() {
                prop_assert!(island.commit(def, &eval).is_some());
            }
        }
        let placed = island.instances();
        for (i, a) in placed.iter().enumerate() {
            prop_assert!(engine.bounds().contains(a.cell));
            for b in &placed[i + 1..] {
                prop_assert!(!footprints_overlap(a.cell, a.footprint, b.cell, b.footprint));
                prop_assert_ne!(a.id, b.id);
            }
        }
    }

    /// Overlap is symmetric.
    #[test]
    fn prop_overlap_symmetric(
        a in item_ids(),
        b in item_ids(),
        ax in -5i32..5, az in -5i32..5,
        bx in -5i32..5, bz in -5i32..5,
    ) {
        let catalog = Catalog::builtin();
        let fa = catalog.get(a).unwrap().footprint;
        let fb = catalog.get(b).unwrap().footprint;
        let (ca, cb) = (GridCell::new(ax, az), GridCell::new(bx, bz));
        prop_assert_eq!(footprints_overlap(ca, fa, cb, fb), footprints_overlap(cb, fb, ca, fa));
    }
}

#[test]
fn unit_items_at_adjacent_cells() {
    let catalog = Catalog::builtin();
    let house = catalog.get("house").unwrap();
    let engine = PlacementEngine::default();
    let mut island = Island::new();
    for x in [0.0, 1.0] {
        let eval = engine.evaluate(house, WorldPosition::new(x, 0.0), island.instances());
        island.commit(house, &eval).unwrap();
    }

    let same = engine.evaluate(house, WorldPosition::new(0.0, 0.0), island.instances());
    assert!(!same.can_place());
    let next = engine.evaluate(house, WorldPosition::new(2.0, 0.0), island.instances());
    assert!(next.can_place());
}

use std::hint::black_box;
use std::time::Instant;

use isle_catalog::Catalog;
use isle_common::WorldPosition;
use isle_placement::{Island, PlacementEngine};

/// Fill the grid with houses on every other cell.
fn make_island(catalog: &Catalog, engine: &PlacementEngine) -> Island {
    let house = catalog.get("house").expect("house is built in");
    let mut island = Island::new();
    for cell in engine.bounds().cells() {
        if (cell.x + cell.z) % 2 != 0 {
            continue;
        }
        let eval = engine.evaluate(house, cell.center(), island.instances());
        if eval.can_place() {
            island.commit(house, &eval);
        }
    }
    island
}

fn bench_evaluate(item: &str, iterations: usize) {
    let catalog = Catalog::builtin();
    let engine = PlacementEngine::default();
    let island = make_island(&catalog, &engine);
    let def = catalog.get(item).expect("item is built in");

    let start = Instant::now();
    let mut placeable = 0usize;
    for i in 0..iterations {
        let t = i as f32 * 0.37;
        let cursor = WorldPosition::new((t.sin() * 6.0).clamp(-6.0, 6.0), (t.cos() * 6.0).clamp(-6.0, 6.0));
        if engine
            .evaluate(black_box(def), black_box(cursor), black_box(island.instances()))
            .can_place()
        {
            placeable += 1;
        }
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  evaluate {item} vs {} instances ({iterations} iters): {per_iter:?}/iter, total {elapsed:?}, placeable {placeable}",
        island.len()
    );
}

fn main() {
    println!("=== Placement Benchmarks ===");
    bench_evaluate("house", 100_000);
    bench_evaluate("townhall", 100_000);
    bench_evaluate("tree", 100_000);
}

use isle_build::IslandBuilder;
use isle_catalog::{BuildingKind, Category, Footprint, PlaceableDefinition};
use isle_common::GridCell;
use isle_spatial::WorldLayout;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer reads the builder and produces output. It never mutates the
/// island; placement truth stays with the builder.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the current builder state.
    fn render(&self, builder: &IslandBuilder) -> Self::Output;
}

/// Whether the footprint anchored at `anchor` reaches into `cell`.
///
/// A cell counts as covered exactly when a unit item placed there would be
/// rejected as overlapping.
fn covers(anchor: GridCell, footprint: Footprint, cell: GridCell) -> bool {
    let dx = (cell.x - anchor.x).abs() as f32;
    let dz = (cell.z - anchor.z).abs() as f32;
    dx < (footprint.width + 1.0) / 2.0 && dz < (footprint.depth + 1.0) / 2.0
}

fn glyph(definition: &PlaceableDefinition, anchor: bool) -> char {
    let c = match definition.category {
        Category::Building { kind, .. } => match kind {
            BuildingKind::Residential => 'H',
            BuildingKind::Commercial => 'C',
            BuildingKind::Industrial => 'I',
            BuildingKind::Special => 'S',
        },
        Category::Road => return '#',
        Category::Decoration => 'D',
    };
    if anchor { c } else { c.to_ascii_lowercase() }
}

/// Top-down map of the build grid, one character per cell.
///
/// Rows run from the lowest z to the highest. Anchors are upper case and
/// the rest of a footprint lower case. Roads are `#`. The preview shows as
/// `+` when it can be placed and `x` when it cannot. Empty cells are `.`,
/// or `,` where the cell center lies outside the buildable radius.
#[derive(Debug, Clone)]
pub struct AsciiRenderer {
    layout: WorldLayout,
}

impl AsciiRenderer {
    pub fn new(layout: WorldLayout) -> Self {
        Self { layout }
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new(WorldLayout::ISLAND)
    }
}

impl Renderer for AsciiRenderer {
    type Output = String;

    fn render(&self, builder: &IslandBuilder) -> String {
        let bounds = builder.engine().bounds();
        let catalog = builder.catalog();
        let preview = builder
            .active_definition()
            .zip(builder.mode().preview())
            .map(|(def, eval)| (eval.cell, def.footprint, eval.can_place()));

        let mut out = String::new();
        for z in bounds.min..=bounds.max {
            let mut row = String::with_capacity(bounds.width() as usize);
            for x in bounds.min..=bounds.max {
                let cell = GridCell::new(x, z);
                let mut c = if self.layout.is_in_buildable_zone(cell.center()) {
                    '.'
                } else {
                    ','
                };

                // Covered cells first so anchors win where footprints touch.
                let placed = builder.island().instances();
                for inst in placed.iter().filter(|i| covers(i.cell, i.footprint, cell)) {
                    if let Some(def) = catalog.get(inst.definition_id) {
                        c = glyph(def, false);
                    }
                }
                if let Some(def) = builder
                    .island()
                    .at_cell(cell)
                    .next()
                    .and_then(|inst| catalog.get(inst.definition_id))
                {
                    c = glyph(def, true);
                }

                if let Some((anchor, footprint, ok)) = preview {
                    if covers(anchor, footprint, cell) {
                        c = if ok { '+' } else { 'x' };
                    }
                }
                row.push(c);
            }
            out.push_str(&format!("{z:>3} {row}\n"));
        }
        out
    }
}

/// Plain-text status report: build phase, shop state, every placed
/// instance with its cell, and the current preview verdict.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, builder: &IslandBuilder) -> String {
        let island = builder.island();
        let mut out = String::new();
        out.push_str(&format!(
            "=== Island (phase={}, shop={}) ===\n",
            builder.phase(),
            if builder.shop_open() { "open" } else { "closed" }
        ));
        out.push_str(&format!(
            "Placed: {} (total cost {})\n",
            island.len(),
            island.total_cost()
        ));

        for inst in island.instances() {
            out.push_str(&format!(
                "  [{}] {} at {}\n",
                inst.id.short(),
                inst.definition_id,
                inst.cell
            ));
        }

        if let Some(preview) = builder.mode().preview() {
            match &preview.rejection {
                None => out.push_str(&format!(
                    "Preview: {} at {} ok\n",
                    preview.definition_id, preview.cell
                )),
                Some(why) => out.push_str(&format!(
                    "Preview: {} at {} blocked ({why})\n",
                    preview.definition_id, preview.cell
                )),
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isle_common::WorldPosition;

    fn place(builder: &mut IslandBuilder, id: &str, x: f32, z: f32) {
        builder.select(id).unwrap();
        builder.cursor_moved(WorldPosition::new(x, z));
        builder.confirm().unwrap();
    }

    fn row(map: &str, z: i32) -> &str {
        let line = map.lines().nth((z + 5) as usize).unwrap();
        &line[4..]
    }

    #[test]
    fn empty_map_marks_outer_corners() {
        let map = AsciiRenderer::default().render(&IslandBuilder::default());
        assert_eq!(map.lines().count(), 10);
        assert!(map.starts_with(" -5 ,"));
        assert_eq!(row(&map, 0), "..........");
    }

    #[test]
    fn footprints_and_anchors() {
        let mut builder = IslandBuilder::default();
        place(&mut builder, "house", 0.0, 0.0);
        place(&mut builder, "blacksmith", 3.0, 0.0);
        place(&mut builder, "straight_road", -3.0, 0.0);
        let map = AsciiRenderer::default().render(&builder);
        assert_eq!(row(&map, 0), "..#..H.cCc");
        assert_eq!(row(&map, 1), ",.........");
    }

    #[test]
    fn preview_cells_follow_placeability() {
        let mut builder = IslandBuilder::default();
        place(&mut builder, "house", 0.0, 0.0);
        builder.select("house").unwrap();
        builder.cursor_moved(WorldPosition::new(2.0, 2.0));
        let map = AsciiRenderer::default().render(&builder);
        assert_eq!(&row(&map, 2)[7..8], "+");

        builder.cursor_moved(WorldPosition::new(0.2, 0.1));
        let map = AsciiRenderer::default().render(&builder);
        assert_eq!(&row(&map, 0)[5..6], "x");
    }

    #[test]
    fn debug_renderer_idle() {
        let output = DebugTextRenderer::new().render(&IslandBuilder::default());
        assert!(output.contains("phase=idle"));
        assert!(output.contains("Placed: 0 (total cost 0)"));
        assert!(!output.contains("Preview"));
    }

    #[test]
    fn debug_renderer_lists_instances_and_preview() {
        let mut builder = IslandBuilder::default();
        place(&mut builder, "townhall", 0.0, 0.0);
        builder.select("house").unwrap();
        builder.cursor_moved(WorldPosition::new(9.0, 0.0));
        let output = DebugTextRenderer::new().render(&builder);
        assert!(output.contains("phase=placing"));
        assert!(output.contains("total cost 1000"));
        assert!(output.contains("townhall at (0, 0)"));
        assert!(output.contains("Preview: house at (9, 0) blocked"));
    }
}

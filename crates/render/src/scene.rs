use glam::Vec3;
use isle_build::IslandBuilder;
use isle_catalog::{Footprint, Rgb};
use isle_common::{GridCell, InstanceId};
use isle_scenery::Scenery;
use isle_spatial::{Layer, WorldLayout};

use crate::renderer::Renderer;

const ISLAND_GREEN: Rgb = Rgb::from_hex(0x7BC043);
const ISLAND_THICKNESS: f32 = 2.5;
const WATER_SIZE: f32 = 1000.0;
const WATER_RGBA: [f32; 4] = [0.0, 0.1, 0.2, 0.9];
/// Grid lines float just above the island top.
const GRID_LINE_HEIGHT: f32 = 0.52;
const GRID_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 0.5];
const PREVIEW_OK_RGBA: [f32; 4] = [0.0, 1.0, 0.0, 0.6];
const PREVIEW_BLOCKED_RGBA: [f32; 4] = [1.0, 0.0, 0.0, 0.6];
const ROCK_RGBA: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
const CLOUD_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 0.65];

/// What a draw item stands for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawKind {
    IslandDisc,
    Water,
    /// Visible only while an item is being placed.
    BuildGrid,
    Peak,
    Cloud,
    Placed { id: InstanceId },
    Preview { can_place: bool },
}

/// One renderer-agnostic primitive: an axis-aligned extent around a center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub kind: DrawKind,
    pub center: Vec3,
    pub extent: Vec3,
    pub rgba: [f32; 4],
}

/// Ordered draw list for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneFrame {
    pub items: Vec<DrawItem>,
}

impl SceneFrame {
    /// Compose a frame without scenery.
    pub fn compose(builder: &IslandBuilder, layout: &WorldLayout) -> Self {
        SceneComposer::new(*layout).render(builder)
    }

    pub fn count(&self, pred: impl Fn(&DrawKind) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.kind)).count()
    }
}

/// Center of the box drawn for an item anchored at `cell`.
///
/// Boxes wider than one cell shift half a cell along both axes so they line
/// up with grid lines. The box is twice the item height, half of it sunk
/// below ground.
pub fn item_center(cell: GridCell, footprint: Footprint) -> Vec3 {
    let offset = if footprint.width > 1.0 { 0.5 } else { 0.0 };
    Vec3::new(
        cell.x as f32 + offset,
        footprint.height / 2.0,
        cell.z as f32 + offset,
    )
}

fn item_extent(footprint: Footprint) -> Vec3 {
    Vec3::new(footprint.width, footprint.height * 2.0, footprint.depth)
}

/// Composes the island, its props, placed items and the placement preview
/// into a [`SceneFrame`].
#[derive(Debug, Clone)]
pub struct SceneComposer {
    layout: WorldLayout,
    scenery: Option<Scenery>,
}

impl SceneComposer {
    pub fn new(layout: WorldLayout) -> Self {
        Self {
            layout,
            scenery: None,
        }
    }

    pub fn with_scenery(mut self, scenery: Scenery) -> Self {
        self.scenery = Some(scenery);
        self
    }

    fn terrain(&self, items: &mut Vec<DrawItem>) {
        let disc = self.layout.island_disc_radius();
        items.push(DrawItem {
            kind: DrawKind::IslandDisc,
            center: Vec3::new(0.0, -ISLAND_THICKNESS / 2.0, 0.0),
            extent: Vec3::new(disc * 2.0, ISLAND_THICKNESS, disc * 2.0),
            rgba: ISLAND_GREEN.to_rgba_f32(),
        });
        items.push(DrawItem {
            kind: DrawKind::Water,
            center: Vec3::new(0.0, self.layout.layers.height(Layer::Water), 0.0),
            extent: Vec3::new(WATER_SIZE, 0.0, WATER_SIZE),
            rgba: WATER_RGBA,
        });
    }

    fn props(&self, items: &mut Vec<DrawItem>) {
        let Some(scenery) = &self.scenery else {
            return;
        };
        items.extend(scenery.peaks.iter().map(|peak| DrawItem {
            kind: DrawKind::Peak,
            center: peak.position + Vec3::new(0.0, peak.scale.y, 0.0),
            extent: peak.scale * Vec3::new(2.0, 2.0, 2.0),
            rgba: ROCK_RGBA,
        }));
        items.extend(scenery.clouds.iter().map(|cloud| DrawItem {
            kind: DrawKind::Cloud,
            center: cloud.position,
            extent: Vec3::new(5.0, 1.5, 5.0),
            rgba: CLOUD_RGBA,
        }));
    }

    fn build_grid(&self) -> DrawItem {
        let size = self.layout.grid.size as f32 * self.layout.grid.cell_size;
        let [sx, sz] = self.layout.grid.start;
        DrawItem {
            kind: DrawKind::BuildGrid,
            center: Vec3::new(sx - 0.5 + size / 2.0, GRID_LINE_HEIGHT, sz - 0.5 + size / 2.0),
            extent: Vec3::new(size, 0.0, size),
            rgba: GRID_RGBA,
        }
    }
}

impl Renderer for SceneComposer {
    type Output = SceneFrame;

    fn render(&self, builder: &IslandBuilder) -> SceneFrame {
        let mut items = Vec::new();
        self.terrain(&mut items);
        self.props(&mut items);

        let placing = builder.mode().is_placing();
        if placing {
            items.push(self.build_grid());
        }

        for placed in builder.island().instances() {
            let rgba = builder
                .catalog()
                .get(placed.definition_id)
                .map_or([1.0; 4], |def| def.color.to_rgba_f32());
            items.push(DrawItem {
                kind: DrawKind::Placed { id: placed.id },
                center: item_center(placed.cell, placed.footprint),
                extent: item_extent(placed.footprint),
                rgba,
            });
        }

        if let (Some(def), Some(preview)) = (builder.active_definition(), builder.mode().preview()) {
            let can_place = preview.can_place();
            items.push(DrawItem {
                kind: DrawKind::Preview { can_place },
                center: item_center(preview.cell, def.footprint),
                extent: item_extent(def.footprint),
                rgba: if can_place {
                    PREVIEW_OK_RGBA
                } else {
                    PREVIEW_BLOCKED_RGBA
                },
            });
        }

        tracing::trace!(items = items.len(), placing, "scene composed");
        SceneFrame { items }
    }
}

use serde::{Deserialize, Serialize};

/// Square buildable grid description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Number of cells along each axis.
    pub size: i32,
    /// World units per cell.
    pub cell_size: f32,
    /// Corner the origin-relative grid addressing starts from, as `[x, z]`.
    pub start: [f32; 2],
}

impl GridSpec {
    pub const ISLAND: Self = Self {
        size: 10,
        cell_size: 1.0,
        start: [-5.0, -5.0],
    };
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::ISLAND
    }
}

/// A ring around the world center with a height band for props inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingZone {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl RingZone {
    /// Annulus membership, both radii inclusive.
    pub fn contains_distance(&self, distance: f32) -> bool {
        distance >= self.inner_radius && distance <= self.outer_radius
    }

    pub fn width(&self) -> f32 {
        self.outer_radius - self.inner_radius
    }
}

/// Fixed heights of the horizontal layers the scene is stacked from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layers {
    pub water: f32,
    pub ground: f32,
    pub grid: f32,
    pub buildings: f32,
    pub clouds: f32,
    pub mountains: f32,
}

impl Layers {
    pub const ISLAND: Self = Self {
        water: -0.5,
        ground: 0.0,
        grid: 0.02,
        buildings: 0.0,
        clouds: 6.0,
        mountains: 0.0,
    };
}

impl Default for Layers {
    fn default() -> Self {
        Self::ISLAND
    }
}

/// Named layer, resolved to a height through [`Layers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Water,
    Ground,
    Grid,
    Buildings,
    Clouds,
    Mountains,
}

impl Layers {
    pub fn height(&self, layer: Layer) -> f32 {
        match layer {
            Layer::Water => self.water,
            Layer::Ground => self.ground,
            Layer::Grid => self.grid,
            Layer::Buildings => self.buildings,
            Layer::Clouds => self.clouds,
            Layer::Mountains => self.mountains,
        }
    }
}

/// Every geometry constant of the island world in one place.
///
/// The default is [`WorldLayout::ISLAND`]. Deserialization fills missing
/// fields from the default so a config file may override a single value,
/// including one radius or height of a ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LayoutOverrides")]
pub struct WorldLayout {
    /// Total world radius.
    pub radius: f32,
    pub grid: GridSpec,
    /// Radius of the central disc where terrain permits building.
    pub buildable_radius: f32,
    pub mountains: RingZone,
    pub clouds: RingZone,
    /// Number of concentric rings the cloud band is split into.
    pub cloud_rings: u32,
    pub layers: Layers,
}

impl WorldLayout {
    pub const ISLAND: Self = Self {
        radius: 50.0,
        grid: GridSpec::ISLAND,
        buildable_radius: 5.0,
        mountains: RingZone {
            inner_radius: 15.0,
            outer_radius: 25.0,
            min_height: 2.0,
            max_height: 5.0,
        },
        clouds: RingZone {
            inner_radius: 14.0,
            outer_radius: 48.0,
            min_height: 5.5,
            max_height: 6.5,
        },
        cloud_rings: 10,
        layers: Layers::ISLAND,
    };

    /// Radius of the rendered island disc; it stops short of the cloud band edge.
    pub fn island_disc_radius(&self) -> f32 {
        self.clouds.outer_radius - 2.0
    }
}

impl Default for WorldLayout {
    fn default() -> Self {
        Self::ISLAND
    }
}

/// Ring fields a config may set; the rest come from the ring's own default.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RingOverrides {
    inner_radius: Option<f32>,
    outer_radius: Option<f32>,
    min_height: Option<f32>,
    max_height: Option<f32>,
}

impl RingOverrides {
    fn apply(self, base: RingZone) -> RingZone {
        RingZone {
            inner_radius: self.inner_radius.unwrap_or(base.inner_radius),
            outer_radius: self.outer_radius.unwrap_or(base.outer_radius),
            min_height: self.min_height.unwrap_or(base.min_height),
            max_height: self.max_height.unwrap_or(base.max_height),
        }
    }
}

/// Wire form of [`WorldLayout`]: every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LayoutOverrides {
    radius: Option<f32>,
    grid: GridSpec,
    buildable_radius: Option<f32>,
    mountains: RingOverrides,
    clouds: RingOverrides,
    cloud_rings: Option<u32>,
    layers: Layers,
}

impl From<LayoutOverrides> for WorldLayout {
    fn from(o: LayoutOverrides) -> Self {
        let base = Self::ISLAND;
        Self {
            radius: o.radius.unwrap_or(base.radius),
            grid: o.grid,
            buildable_radius: o.buildable_radius.unwrap_or(base.buildable_radius),
            mountains: o.mountains.apply(base.mountains),
            clouds: o.clouds.apply(base.clouds),
            cloud_rings: o.cloud_rings.unwrap_or(base.cloud_rings),
            layers: o.layers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_island() {
        assert_eq!(WorldLayout::default(), WorldLayout::ISLAND);
        assert_eq!(WorldLayout::ISLAND.grid.size, 10);
        assert_eq!(WorldLayout::ISLAND.island_disc_radius(), 46.0);
    }

    #[test]
    fn layer_heights_resolve() {
        let layers = Layers::ISLAND;
        assert_eq!(layers.height(Layer::Water), -0.5);
        assert_eq!(layers.height(Layer::Clouds), 6.0);
        assert_eq!(layers.height(Layer::Grid), 0.02);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let layout: WorldLayout =
            serde_json::from_str(r#"{ "buildable_radius": 7.5, "grid": { "size": 12 } }"#)
                .unwrap();
        assert_eq!(layout.buildable_radius, 7.5);
        assert_eq!(layout.grid.size, 12);
        assert_eq!(layout.grid.start, [-5.0, -5.0]);
        assert_eq!(layout.radius, 50.0);
        assert_eq!(layout.layers, Layers::ISLAND);
    }

    #[test]
    fn partial_ring_keeps_its_own_defaults() {
        let layout: WorldLayout = serde_json::from_str(
            r#"{ "mountains": { "inner_radius": 16.0 }, "clouds": { "max_height": 7.0 } }"#,
        )
        .unwrap();
        let island = WorldLayout::ISLAND;
        assert_eq!(layout.mountains.inner_radius, 16.0);
        assert_eq!(layout.mountains.outer_radius, island.mountains.outer_radius);
        assert_eq!(layout.mountains.max_height, island.mountains.max_height);
        assert_eq!(layout.clouds.max_height, 7.0);
        assert_eq!(layout.clouds.inner_radius, island.clouds.inner_radius);
        assert_eq!(layout.cloud_rings, island.cloud_rings);
    }

    #[test]
    fn serialized_layout_reads_back() {
        let json = serde_json::to_string(&WorldLayout::ISLAND).unwrap();
        let layout: WorldLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, WorldLayout::ISLAND);
    }

    #[test]
    fn ring_membership_is_inclusive() {
        let ring = WorldLayout::ISLAND.mountains;
        assert!(ring.contains_distance(15.0));
        assert!(ring.contains_distance(25.0));
        assert!(!ring.contains_distance(14.99));
        assert!(!ring.contains_distance(25.01));
        assert_eq!(ring.width(), 10.0);
    }
}

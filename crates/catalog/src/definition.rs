use serde::Serialize;
use std::time::Duration;

/// Axis-aligned box an item occupies: `width` along x, `height` along y,
/// `depth` along z. Overlap tests only look at width and depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Footprint {
    pub const UNIT: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Half extents on the ground plane as `(x, z)`.
    pub fn half_extents(&self) -> (f32, f32) {
        (self.width / 2.0, self.depth / 2.0)
    }

    /// All three extents finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        [self.width, self.height, self.depth]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// Display color as 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// From a packed `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8])
    }

    /// Normalized RGBA with full opacity.
    pub fn to_rgba_f32(self) -> [f32; 4] {
        let [r, g, b] = self.0;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02X}{g:02X}{b:02X}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingKind {
    Residential,
    Commercial,
    Industrial,
    Special,
}

/// What sort of thing a catalog entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Category {
    Building {
        kind: BuildingKind,
        build_time: Duration,
    },
    Road,
    Decoration,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Building { .. } => "building",
            Self::Road => "road",
            Self::Decoration => "decoration",
        }
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceableDefinition {
    /// Unique across the catalog.
    pub id: &'static str,
    pub name: &'static str,
    #[serde(flatten)]
    pub category: Category,
    pub footprint: Footprint,
    pub cost: u32,
    pub color: Rgb,
}

impl PlaceableDefinition {
    pub fn building_kind(&self) -> Option<BuildingKind> {
        match self.category {
            Category::Building { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn build_time(&self) -> Option<Duration> {
        match self.category {
            Category::Building { build_time, .. } => Some(build_time),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_unpacks() {
        let c = Rgb::from_hex(0x8BC34A);
        assert_eq!(c.0, [0x8B, 0xC3, 0x4A]);
        assert_eq!(c.to_string(), "#8BC34A");
    }

    #[test]
    fn rgba_is_normalized() {
        let [r, g, b, a] = Rgb::from_hex(0xFF0000).to_rgba_f32();
        assert_eq!((r, g, b, a), (1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn footprint_validity() {
        assert!(Footprint::UNIT.is_valid());
        assert!(Footprint::new(0.5, 1.5, 0.5).is_valid());
        assert!(!Footprint::new(0.0, 1.0, 1.0).is_valid());
        assert!(!Footprint::new(1.0, f32::NAN, 1.0).is_valid());
        assert_eq!(Footprint::new(2.0, 1.0, 1.0).half_extents(), (1.0, 0.5));
    }

    #[test]
    fn definition_serializes_with_flat_category() {
        let def = PlaceableDefinition {
            id: "tree",
            name: "Tree",
            category: Category::Decoration,
            footprint: Footprint::new(0.5, 1.5, 0.5),
            cost: 25,
            color: Rgb::from_hex(0x4CAF50),
        };
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["category"], "decoration");
        assert_eq!(json["id"], "tree");
        assert_eq!(json["cost"], 25);
    }
}

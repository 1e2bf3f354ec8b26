use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a placed instance on the island.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, enough to tell instances apart in logs.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_owned()
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer-addressed grid cell on the XZ plane.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCell {
    pub x: i32,
    pub z: i32,
}

impl GridCell {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Cell center as a continuous position (cells are addressed by their center).
    pub fn center(self) -> WorldPosition {
        WorldPosition::new(self.x as f32, self.z as f32)
    }
}

impl std::fmt::Display for GridCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// A point on the ground plane. The height is not stored: it comes from
/// whichever layer the point is rendered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: f32,
    pub z: f32,
}

impl WorldPosition {
    pub const ORIGIN: Self = Self { x: 0.0, z: 0.0 };

    pub const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Lift onto a layer at height `y`.
    pub fn at_height(self, y: f32) -> Vec3 {
        Vec3::new(self.x, y, self.z)
    }

    /// Distance from the world center, ignoring height.
    pub fn distance_from_center(self) -> f32 {
        Vec2::new(self.x, self.z).length()
    }
}

impl From<Vec3> for WorldPosition {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.z)
    }
}

impl std::fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.z)
    }
}

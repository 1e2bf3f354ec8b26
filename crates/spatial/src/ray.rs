use glam::Vec3;
use isle_common::WorldPosition;

/// A half-line in world space, used to pick points on the ground under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Not required to be normalized.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point along the ray at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect with the horizontal plane `y = height`.
    ///
    /// Returns `None` when the ray runs parallel to the plane or the plane is
    /// behind the origin.
    pub fn intersect_ground(&self, height: f32) -> Option<WorldPosition> {
        if self.direction.y.abs() <= f32::EPSILON {
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        if t < 0.0 {
            return None;
        }
        Some(WorldPosition::from(self.at(t)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_down_hits_below_origin() {
        let ray = Ray::new(Vec3::new(2.0, 10.0, -3.0), Vec3::NEG_Y);
        assert_eq!(ray.intersect_ground(0.0), Some(WorldPosition::new(2.0, -3.0)));
    }

    #[test]
    fn slanted_ray_hits_ground() {
        let ray = Ray::new(Vec3::new(0.0, 4.0, 4.0), Vec3::new(0.0, -1.0, -1.0));
        let hit = ray.intersect_ground(0.0).unwrap();
        assert!((hit.x).abs() < 1e-6);
        assert!((hit.z).abs() < 1e-6);
    }

    #[test]
    fn parallel_ray_misses() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(ray.intersect_ground(0.0).is_none());
    }

    #[test]
    fn plane_behind_origin_misses() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(ray.intersect_ground(0.0).is_none());
    }

    #[test]
    fn raised_plane() {
        let ray = Ray::new(Vec3::new(1.0, 3.0, 1.0), Vec3::NEG_Y);
        assert_eq!(ray.intersect_ground(2.0), Some(WorldPosition::new(1.0, 1.0)));
    }
}

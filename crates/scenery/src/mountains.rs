use glam::Vec3;
use isle_spatial::WorldLayout;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::seed::ScatterSeed;

/// Peak positions on the ground plane as `[x, z]`: two ridges sweeping back
/// from the island on either side, plus a spur further out on the left.
const PEAKS: [[f32; 2]; 41] = [
    [-24.0, -14.0],
    [-22.0, -16.0],
    [-20.0, -18.0],
    [-18.0, -20.0],
    [-16.0, -22.0],
    [-14.0, -24.0],
    [-12.0, -22.0],
    [-10.0, -20.0],
    [-8.0, -18.0],
    [-6.0, -16.0],
    [-4.0, -14.0],
    [-2.0, -12.0],
    [-20.0, -10.0],
    [-18.0, -12.0],
    [-16.0, -11.0],
    [-14.0, -13.0],
    [-12.0, -10.0],
    [-10.0, -12.0],
    [-8.0, -11.0],
    [-6.0, -13.0],
    [-4.0, -10.0],
    [-2.0, -12.0],
    [-26.0, -12.0],
    [-28.0, -14.0],
    [-30.0, -16.0],
    [-32.0, -18.0],
    [-34.0, -20.0],
    [-36.0, -22.0],
    [-38.0, -24.0],
    [24.0, -14.0],
    [22.0, -16.0],
    [20.0, -18.0],
    [18.0, -20.0],
    [16.0, -22.0],
    [14.0, -24.0],
    [12.0, -22.0],
    [10.0, -20.0],
    [8.0, -18.0],
    [6.0, -16.0],
    [4.0, -14.0],
    [2.0, -12.0],
];

/// One cone-shaped peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub position: Vec3,
    /// `[b, 1.5 b, b]` for a base size `b` in `2..4`.
    pub scale: Vec3,
}

/// Lazy generator of the mountain range: fixed peak positions with a random
/// size per peak.
#[derive(Debug, Clone)]
pub struct MountainRange {
    height: f32,
    rng: ChaCha8Rng,
    next: usize,
}

impl MountainRange {
    pub fn new(layout: &WorldLayout, seed: ScatterSeed) -> Self {
        Self {
            height: layout.layers.mountains,
            rng: seed.rng(),
            next: 0,
        }
    }

    pub fn peak_count() -> usize {
        PEAKS.len()
    }
}

impl Iterator for MountainRange {
    type Item = Peak;

    fn next(&mut self) -> Option<Peak> {
        let [x, z] = *PEAKS.get(self.next)?;
        self.next += 1;
        let base = 2.0 + self.rng.r#gen::<f32>() * 2.0;
        Some(Peak {
            position: Vec3::new(x, self.height, z),
            scale: Vec3::new(base, base * 1.5, base),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = PEAKS.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for MountainRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(seed: u64) -> MountainRange {
        MountainRange::new(&WorldLayout::ISLAND, ScatterSeed::Fixed(seed))
    }

    #[test]
    fn every_peak_once() {
        assert_eq!(range(1).len(), 41);
        assert_eq!(range(1).count(), MountainRange::peak_count());
    }

    #[test]
    fn scales_are_proportional() {
        for peak in range(2) {
            assert!((2.0..4.0).contains(&peak.scale.x));
            assert_eq!(peak.scale.x, peak.scale.z);
            assert!((peak.scale.y - peak.scale.x * 1.5).abs() < 1e-6);
            assert_eq!(peak.position.y, 0.0);
        }
    }

    #[test]
    fn peaks_sit_behind_the_island() {
        assert!(range(3).all(|p| p.position.z < 0.0));
    }

    #[test]
    fn seeded_ranges_repeat() {
        let a: Vec<_> = range(11).collect();
        let b: Vec<_> = range(11).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn positions_do_not_depend_on_seed() {
        let a: Vec<_> = range(1).map(|p| p.position).collect();
        let b: Vec<_> = range(2).map(|p| p.position).collect();
        assert_eq!(a, b);
    }
}

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use isle_spatial::WorldLayout;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::seed::ScatterSeed;

/// Clouds inside this half-width square around the center are dropped so the
/// build area stays clear.
const CLEAR_HALF_WIDTH: f32 = 7.5;
const PUFFS_PER_CLOUD: usize = 5;
/// Radians per second the ring drifts around the island.
const DRIFT_SPEED: f32 = 0.002;

/// One puff of a cloud cluster, relative to the cluster center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudPuff {
    pub offset: Vec3,
    pub opacity: f32,
    pub scale: f32,
}

/// A cluster of puffs on the cloud ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudCluster {
    pub ring: u32,
    pub position: Vec3,
    /// Initial yaw around the world center.
    pub rotation: f32,
    pub puffs: [CloudPuff; PUFFS_PER_CLOUD],
}

impl CloudCluster {
    /// Yaw after `elapsed` seconds of drift.
    pub fn rotation_at(&self, elapsed: f32) -> f32 {
        self.rotation + elapsed * DRIFT_SPEED
    }
}

/// Lazy generator of the cloud band: concentric rings between the cloud
/// zone radii, each denser than the last, with jitter that grows after the
/// two innermost rings.
#[derive(Debug, Clone)]
pub struct CloudRing {
    inner_radius: f32,
    ring_spacing: f32,
    rings: u32,
    base_height: f32,
    rng: ChaCha8Rng,
    ring: u32,
    index: u32,
}

impl CloudRing {
    pub fn new(layout: &WorldLayout, seed: ScatterSeed) -> Self {
        let rings = layout.cloud_rings.max(1);
        Self {
            inner_radius: layout.clouds.inner_radius,
            ring_spacing: layout.clouds.width() / rings as f32,
            rings: layout.cloud_rings,
            base_height: layout.layers.clouds,
            rng: seed.rng(),
            ring: 0,
            index: 0,
        }
    }

    /// Clouds on ring `ring` before the center-clearing filter.
    pub fn clouds_in_ring(ring: u32) -> u32 {
        24 + ring * 8
    }

    fn remaining_upper_bound(&self) -> usize {
        if self.ring >= self.rings {
            return 0;
        }
        let rest: u32 = (self.ring + 1..self.rings).map(Self::clouds_in_ring).sum();
        (Self::clouds_in_ring(self.ring) - self.index + rest) as usize
    }

    fn puff(rng: &mut ChaCha8Rng) -> CloudPuff {
        CloudPuff {
            offset: Vec3::new(
                (rng.r#gen::<f32>() - 0.5) * 5.0,
                (rng.r#gen::<f32>() - 0.5) * 1.5,
                (rng.r#gen::<f32>() - 0.5) * 5.0,
            ),
            opacity: 0.5 + rng.r#gen::<f32>() * 0.3,
            scale: 0.6 + rng.r#gen::<f32>() * 0.4,
        }
    }
}

impl Iterator for CloudRing {
    type Item = CloudCluster;

    fn next(&mut self) -> Option<CloudCluster> {
        while self.ring < self.rings {
            let ring = self.ring;
            let count = Self::clouds_in_ring(ring);
            if self.index >= count {
                self.ring += 1;
                self.index = 0;
                continue;
            }
            let i = self.index;
            self.index += 1;

            let radius = self.inner_radius + ring as f32 * self.ring_spacing;
            let angle = i as f32 / count as f32 * TAU;
            let jitter = if ring < 2 { 0.2 } else { 0.5 };
            let radius_noise = (self.rng.r#gen::<f32>() - 0.5) * self.ring_spacing * jitter;
            let angle_noise = (self.rng.r#gen::<f32>() - 0.5) * (PI / count as f32) * jitter;
            let r = radius + radius_noise;
            let a = angle + angle_noise;
            let position = Vec3::new(
                a.cos() * r,
                self.base_height + (self.rng.r#gen::<f32>() - 0.5),
                a.sin() * r,
            );
            let puffs = std::array::from_fn(|_| Self::puff(&mut self.rng));

            if position.x.abs() < CLEAR_HALF_WIDTH && position.z.abs() < CLEAR_HALF_WIDTH {
                continue;
            }
            return Some(CloudCluster {
                ring,
                position,
                rotation: a,
                puffs,
            });
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining_upper_bound()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(seed: u64) -> CloudRing {
        CloudRing::new(&WorldLayout::ISLAND, ScatterSeed::Fixed(seed))
    }

    #[test]
    fn full_ring_count() {
        // 24 + 32 + ... + 96; the default ring never reaches the cleared square.
        assert_eq!(ring(1).count(), 600);
        assert_eq!(ring(1).size_hint(), (0, Some(600)));
    }

    #[test]
    fn same_seed_same_clouds() {
        let a: Vec<_> = ring(9).collect();
        let b: Vec<_> = ring(9).collect();
        assert_eq!(a, b);
        let c: Vec<_> = ring(10).take(5).collect();
        assert_ne!(a[..5], c[..]);
    }

    #[test]
    fn clouds_stay_in_their_band() {
        let layout = WorldLayout::ISLAND;
        let spacing = layout.clouds.width() / layout.cloud_rings as f32;
        for cloud in ring(3) {
            let d = Vec3::new(cloud.position.x, 0.0, cloud.position.z).length();
            assert!(d >= layout.clouds.inner_radius - spacing * 0.25, "{d}");
            assert!(d <= layout.clouds.outer_radius, "{d}");
            assert!((cloud.position.y - 6.0).abs() <= 0.5);
        }
    }

    #[test]
    fn puffs_within_ranges() {
        for cloud in ring(5).take(50) {
            for puff in cloud.puffs {
                assert!(puff.offset.x.abs() <= 2.5 && puff.offset.y.abs() <= 0.75);
                assert!((0.5..=0.8).contains(&puff.opacity));
                assert!((0.6..=1.0).contains(&puff.scale));
            }
        }
    }

    #[test]
    fn clearing_drops_central_clouds() {
        let mut layout = WorldLayout::ISLAND;
        layout.clouds.inner_radius = 0.0;
        layout.clouds.outer_radius = 20.0;
        let clouds: Vec<_> = CloudRing::new(&layout, ScatterSeed::Fixed(2)).collect();
        assert!(clouds.len() < 600);
        assert!(
            clouds
                .iter()
                .all(|c| c.position.x.abs() >= 7.5 || c.position.z.abs() >= 7.5)
        );
    }

    #[test]
    fn drift_advances_rotation() {
        let cloud = ring(4).next().unwrap();
        assert!((cloud.rotation_at(100.0) - cloud.rotation - 0.2).abs() < 1e-5);
    }

    #[test]
    fn rings_grow_outward() {
        let clouds: Vec<_> = ring(6).collect();
        assert_eq!(clouds.iter().filter(|c| c.ring == 0).count(), 24);
        assert_eq!(clouds.iter().filter(|c| c.ring == 9).count(), 96);
    }
}

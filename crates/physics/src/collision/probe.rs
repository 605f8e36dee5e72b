//! Wall probe backed by the collision world.

use glam::Vec3;
use panther_locomotion::{EnvironmentProbe, ProbeHit};

use super::flags::ContentFlags;
use super::world::{CollisionWorld, QueryFilter};

/// [`EnvironmentProbe`] that raycasts through a [`CollisionWorld`].
#[derive(Debug, Clone, Copy)]
pub struct WorldProbe<'a> {
    world: &'a CollisionWorld,
    filter: QueryFilter,
}

impl<'a> WorldProbe<'a> {
    pub fn new(world: &'a CollisionWorld) -> Self {
        Self {
            world,
            filter: QueryFilter::new(ContentFlags::MASK_CHARACTER_SOLID),
        }
    }

    /// Skip the given brush, usually the character's own volume.
    pub fn ignoring(mut self, brush: u32) -> Self {
        self.filter = self.filter.ignoring(brush);
        self
    }
}

impl EnvironmentProbe for WorldProbe<'_> {
    fn probe(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<ProbeHit> {
        let result = self.world.raycast(origin, direction, max_distance, self.filter);
        if !result.hit_something() {
            return None;
        }
        result.hit_normal.map(|normal| ProbeHit {
            normal,
            point: result.end_position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_reports_wall_normal_and_point() {
        let mut world = CollisionWorld::new();
        world.add_box(Vec3::new(0.0, 100.0, 0.0), Vec3::new(500.0, 10.0, 500.0), ContentFlags::SOLID);

        let hit = WorldProbe::new(&world).probe(Vec3::ZERO, Vec3::Y, 100.0);

        let hit = hit.expect("wall within range");
        assert!((hit.normal - Vec3::NEG_Y).length() < 1e-3);
        assert!((hit.point.y - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_probe_skips_own_body() {
        let mut world = CollisionWorld::new();
        let own = world.add_box(Vec3::ZERO, Vec3::splat(40.0), ContentFlags::CHARACTER);
        world.add_box(Vec3::new(0.0, 80.0, 0.0), Vec3::new(500.0, 10.0, 500.0), ContentFlags::SOLID);

        let hit = WorldProbe::new(&world).ignoring(own).probe(Vec3::ZERO, Vec3::Y, 100.0);

        let hit = hit.expect("wall behind own body");
        assert!((hit.point.y - 70.0).abs() < 0.01);
    }

    #[test]
    fn test_probe_misses_beyond_range() {
        let mut world = CollisionWorld::new();
        world.add_box(Vec3::new(0.0, 300.0, 0.0), Vec3::new(500.0, 10.0, 500.0), ContentFlags::SOLID);

        assert!(WorldProbe::new(&world).probe(Vec3::ZERO, Vec3::Y, 100.0).is_none());
        assert!(WorldProbe::new(&world).probe(Vec3::ZERO, Vec3::NEG_Y, 1000.0).is_none());
    }
}

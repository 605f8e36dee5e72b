//! Environment probing for wall detection.
//!
//! Both the wall run and the wall jump look for walls the same way: one
//! short ray to the character's left, then one to its right. The left side
//! wins when both hit.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::Rotator;

/// A ray hit against world geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeHit {
    /// Surface normal at the impact point, pointing away from the surface.
    pub normal: Vec3,
    /// World position of the impact.
    pub point: Vec3,
}

/// Short-range ray query against world geometry.
///
/// Implementations must exclude the querying character's own collision from
/// the results.
pub trait EnvironmentProbe {
    /// Cast a ray from `origin` along `direction` up to `max_distance`.
    ///
    /// Returns the nearest hit, if any. `direction` need not be normalized.
    fn probe(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<ProbeHit>;
}

impl<P: EnvironmentProbe + ?Sized> EnvironmentProbe for &P {
    fn probe(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<ProbeHit> {
        (**self).probe(origin, direction, max_distance)
    }
}

/// Which side of the character a wall was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
}

/// A wall found by [`detect_wall`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallContact {
    pub side: WallSide,
    pub hit: ProbeHit,
}

impl WallContact {
    #[inline]
    pub fn normal(&self) -> Vec3 {
        self.hit.normal
    }

    #[inline]
    pub fn point(&self) -> Vec3 {
        self.hit.point
    }
}

/// Look for a wall beside the character.
///
/// Casts along -right then +right of `facing` from `origin`. The first hit is
/// returned, so a left wall takes priority over a right one.
pub fn detect_wall<P: EnvironmentProbe + ?Sized>(
    probe: &P,
    origin: Vec3,
    facing: Rotator,
    distance: f32,
) -> Option<WallContact> {
    let right = facing.right();

    probe
        .probe(origin, -right, distance)
        .map(|hit| WallContact {
            side: WallSide::Left,
            hit,
        })
        .or_else(|| {
            probe.probe(origin, right, distance).map(|hit| WallContact {
                side: WallSide::Right,
                hit,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubProbe;

    #[test]
    fn test_no_walls() {
        let probe = StubProbe::default();
        assert!(detect_wall(&probe, Vec3::ZERO, Rotator::default(), 100.0).is_none());
    }

    #[test]
    fn test_left_wall() {
        // Facing +X, right is +Y, so left is -Y
        let probe = StubProbe::default().with_wall(-Vec3::Y, 80.0);
        let contact = detect_wall(&probe, Vec3::ZERO, Rotator::default(), 100.0).unwrap();
        assert_eq!(contact.side, WallSide::Left);
        assert_eq!(contact.normal(), Vec3::Y);
        assert!((contact.point() - Vec3::new(0.0, -80.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_right_wall() {
        let probe = StubProbe::default().with_wall(Vec3::Y, 60.0);
        let contact = detect_wall(&probe, Vec3::ZERO, Rotator::default(), 100.0).unwrap();
        assert_eq!(contact.side, WallSide::Right);
        assert_eq!(contact.normal(), -Vec3::Y);
    }

    #[test]
    fn test_left_wins_when_both_hit() {
        let probe = StubProbe::default()
            .with_wall(Vec3::Y, 20.0)
            .with_wall(-Vec3::Y, 90.0);
        let contact = detect_wall(&probe, Vec3::ZERO, Rotator::default(), 100.0).unwrap();
        assert_eq!(contact.side, WallSide::Left);
    }

    #[test]
    fn test_wall_beyond_probe_distance_is_ignored() {
        let probe = StubProbe::default().with_wall(-Vec3::Y, 150.0);
        assert!(detect_wall(&probe, Vec3::ZERO, Rotator::default(), 100.0).is_none());
    }

    #[test]
    fn test_probe_follows_facing() {
        // Facing +Y: right is -X, left is +X
        let facing = Rotator::from_yaw(std::f32::consts::FRAC_PI_2);
        let probe = StubProbe::default().with_wall(Vec3::X, 50.0);
        let contact = detect_wall(&probe, Vec3::ZERO, facing, 100.0).unwrap();
        assert_eq!(contact.side, WallSide::Left);
    }
}

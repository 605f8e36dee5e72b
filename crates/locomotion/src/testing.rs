//! Test doubles for the body and probe capabilities.

use glam::Vec3;

use crate::body::KinematicBody;
use crate::math::Rotator;
use crate::probe::{EnvironmentProbe, ProbeHit};

/// In-memory body that records what the controller asked of it.
#[derive(Debug, Clone, Default)]
pub struct MockBody {
    pub velocity: Vec3,
    pub position: Vec3,
    pub airborne: bool,
    pub max_acceleration: f32,
    pub movement_input: Vec3,
    pub rotation: Rotator,
    pub control_yaw: f32,
    pub control_pitch: f32,
    pub jumps: u32,
    pub launches: Vec<(Vec3, bool, bool)>,
}

impl MockBody {
    pub fn grounded() -> Self {
        Self::default()
    }

    pub fn airborne(velocity: Vec3) -> Self {
        Self {
            velocity,
            airborne: true,
            ..Default::default()
        }
    }
}

impl KinematicBody for MockBody {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn is_airborne(&self) -> bool {
        self.airborne
    }

    fn is_grounded(&self) -> bool {
        !self.airborne
    }

    fn set_max_acceleration(&mut self, max_acceleration: f32) {
        self.max_acceleration = max_acceleration;
    }

    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.movement_input += direction * scale;
    }

    fn launch(&mut self, velocity: Vec3, override_xy: bool, override_z: bool) {
        self.launches.push((velocity, override_xy, override_z));
        if override_xy {
            self.velocity.x = velocity.x;
            self.velocity.y = velocity.y;
        } else {
            self.velocity.x += velocity.x;
            self.velocity.y += velocity.y;
        }
        if override_z {
            self.velocity.z = velocity.z;
        } else {
            self.velocity.z += velocity.z;
        }
        self.airborne = true;
    }

    fn jump(&mut self) {
        self.jumps += 1;
    }

    fn rotation(&self) -> Rotator {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Rotator) {
        self.rotation = rotation;
    }

    fn control_yaw(&self) -> f32 {
        self.control_yaw
    }

    fn add_yaw(&mut self, delta: f32) {
        self.control_yaw += delta;
    }

    fn add_pitch(&mut self, delta: f32) {
        self.control_pitch += delta;
    }
}

/// Probe that knows about infinite planar walls.
///
/// Each wall is described by the unit direction from the probe origin to the
/// wall and the distance along it. A ray hits a wall only when it points
/// straight at it.
#[derive(Debug, Clone, Default)]
pub struct StubProbe {
    walls: Vec<(Vec3, f32)>,
}

impl StubProbe {
    pub fn with_wall(mut self, direction: Vec3, distance: f32) -> Self {
        self.walls.push((direction.normalize(), distance));
        self
    }
}

impl EnvironmentProbe for StubProbe {
    fn probe(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<ProbeHit> {
        let direction = direction.normalize_or_zero();
        self.walls
            .iter()
            .filter(|(wall_dir, distance)| wall_dir.dot(direction) > 0.999 && *distance <= max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(wall_dir, distance)| ProbeHit {
                normal: -*wall_dir,
                point: origin + *wall_dir * *distance,
            })
    }
}

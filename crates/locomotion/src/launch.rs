//! Launch math for the double jump and the wall jump.
//!
//! Pure functions: they take the current velocity and return the velocity to
//! launch with. The controller owns the gating and the ability flags.

use glam::Vec3;

use crate::config::LocomotionConfig;
use crate::math::{angle_between_deg, horizontal, map_range_clamped};

/// Result of evaluating a double jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DoubleJump {
    /// Launch with `velocity`.
    Launch {
        velocity: Vec3,
        angle_deg: f32,
        speed_loss: f32,
    },
    /// The turn was too sharp; velocity must be left alone.
    TooSharp { angle_deg: f32 },
}

/// Fraction of horizontal speed lost for a turn of `angle_deg`.
///
/// Two linear segments: `[0, knee]` maps to `[0, knee_loss]` and
/// `[knee, max]` maps to `[knee_loss, max_loss]`. Both are clamped.
pub fn double_jump_speed_loss(angle_deg: f32, config: &LocomotionConfig) -> f32 {
    let knee = config.double_jump_knee_angle_deg;
    if angle_deg <= knee {
        map_range_clamped((0.0, knee), (0.0, config.double_jump_knee_loss), angle_deg)
    } else {
        map_range_clamped(
            (knee, config.double_jump_max_angle_deg),
            (config.double_jump_knee_loss, config.double_jump_max_loss),
            angle_deg,
        )
    }
}

/// Evaluate a double jump toward `desired_direction` (unit, horizontal).
pub fn double_jump(velocity: Vec3, desired_direction: Vec3, config: &LocomotionConfig) -> DoubleJump {
    let planar = horizontal(velocity);
    let current_speed = planar.length();

    let angle_deg = angle_between_deg(planar.normalize_or_zero(), desired_direction);
    if angle_deg > config.double_jump_max_angle_deg {
        return DoubleJump::TooSharp { angle_deg };
    }

    let speed_loss = double_jump_speed_loss(angle_deg, config);
    let new_speed = current_speed * (1.0 - speed_loss);

    let mut launch = desired_direction * new_speed;
    launch.z = config.double_jump_vertical_velocity;

    DoubleJump::Launch {
        velocity: launch,
        angle_deg,
        speed_loss,
    }
}

/// Velocity after jumping off a wall with surface normal `wall_normal`.
///
/// The incoming velocity is mirrored about the wall plane, pushed away along
/// the normal and given a fixed upward component.
pub fn wall_jump_velocity(velocity: Vec3, wall_normal: Vec3, config: &LocomotionConfig) -> Vec3 {
    let normal = wall_normal.normalize_or_zero();
    let reflected = velocity - 2.0 * velocity.dot(normal) * normal;

    let mut launch = reflected + normal * config.wall_jump_push;
    launch.z = config.wall_jump_vertical_velocity;
    launch
}

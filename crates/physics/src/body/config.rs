//! Reference body tuning.

use serde::{Deserialize, Serialize};

use crate::collision::TraceShape;

/// Configuration for [`SimulatedBody`](super::SimulatedBody).
///
/// Distances are in world units (centimetres), times in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    // ========================================================================
    // Capsule
    // ========================================================================
    /// Collision radius.
    pub capsule_radius: f32,

    /// Distance from the capsule center to its top or bottom.
    pub capsule_half_height: f32,

    // ========================================================================
    // Movement
    // ========================================================================
    /// Downward acceleration while falling.
    pub gravity: f32,

    /// Speed input alone can reach on the ground.
    pub max_walk_speed: f32,

    /// Vertical velocity of a standard jump.
    pub jump_z_velocity: f32,

    /// Acceleration cap until something tunes it.
    pub initial_max_acceleration: f32,

    /// Fraction of acceleration available in the air.
    pub air_control: f32,

    /// Deceleration on the ground without input. Ground friction is zero.
    pub braking_deceleration: f32,

    // ========================================================================
    // Collision Response
    // ========================================================================
    /// Overbounce factor for velocity clipping.
    pub overbounce: f32,

    /// Maximum number of slide iterations per step.
    pub max_clip_planes: usize,

    /// Extra reach of the ground probe below the capsule.
    pub ground_probe_slack: f32,

    /// Minimum normal Z for a surface to count as ground.
    pub min_ground_normal: f32,

    // ========================================================================
    // View
    // ========================================================================
    /// Look pitch limit in degrees, both up and down.
    pub pitch_limit_deg: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            capsule_radius: 42.0,
            capsule_half_height: 96.0,

            gravity: 980.0,
            max_walk_speed: 500.0,
            jump_z_velocity: 700.0,
            initial_max_acceleration: 2048.0,
            air_control: 0.35,
            braking_deceleration: 2048.0,

            overbounce: 1.001,
            max_clip_planes: 4,
            ground_probe_slack: 2.0,
            min_ground_normal: 0.7,

            pitch_limit_deg: 89.0,
        }
    }
}

impl BodyConfig {
    pub fn shape(&self) -> TraceShape {
        TraceShape {
            radius: self.capsule_radius,
            half_height: self.capsule_half_height,
        }
    }
}

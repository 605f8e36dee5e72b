//! Trace results and shapes for collision queries.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::flags::ContentFlags;

/// Result of a collision trace through the world.
///
/// Traces sweep a shape from a start position to an end position and
/// report what was hit along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceResult {
    /// How far along the trace path we got before hitting something.
    ///
    /// - `1.0` = traveled the full distance (no collision)
    /// - `0.0` = hit something immediately at start
    pub fraction: f32,

    /// Final position after the trace.
    pub end_position: Vec3,

    /// Surface normal at the impact point, pointing away from the surface.
    /// `None` if nothing was hit.
    pub hit_normal: Option<Vec3>,

    /// Content flags of what was hit.
    pub hit_contents: ContentFlags,

    /// Whether the trace started inside solid geometry.
    pub started_in_solid: bool,

    /// Whether the whole trace was inside solid geometry.
    pub all_solid: bool,

    /// Brush that was hit, if any.
    pub hit_brush: Option<u32>,
}

impl TraceResult {
    /// Create a trace result indicating no collision occurred.
    pub fn no_hit(end_position: Vec3) -> Self {
        Self {
            fraction: 1.0,
            end_position,
            hit_normal: None,
            hit_contents: ContentFlags::EMPTY,
            started_in_solid: false,
            all_solid: false,
            hit_brush: None,
        }
    }

    /// Check if this trace hit something.
    #[inline]
    pub fn hit_something(&self) -> bool {
        self.fraction < 1.0
    }
}

/// Upright capsule swept by traces. Positions passed with it are its center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceShape {
    /// Radius of the cylinder and end caps.
    pub radius: f32,
    /// Distance from the center to the top of the upper cap.
    pub half_height: f32,
}

impl TraceShape {
    /// Default character capsule.
    pub const CHARACTER: Self = Self {
        radius: 42.0,
        half_height: 96.0,
    };

    /// Spacing between sweep samples. Anything below the capsule's diameter
    /// cannot step over a wall.
    #[inline]
    pub fn max_sweep_step(&self) -> f32 {
        self.radius.max(0.5)
    }
}

impl Default for TraceShape {
    fn default() -> Self {
        Self::CHARACTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_result_no_hit() {
        let result = TraceResult::no_hit(Vec3::new(10.0, 0.0, 0.0));
        assert!(!result.hit_something());
        assert_eq!(result.fraction, 1.0);
        assert!(result.hit_normal.is_none());
    }

    #[test]
    fn test_sweep_step_follows_radius() {
        assert_eq!(TraceShape::CHARACTER.max_sweep_step(), 42.0);
        let needle = TraceShape {
            radius: 0.1,
            half_height: 10.0,
        };
        assert_eq!(needle.max_sweep_step(), 0.5);
    }
}

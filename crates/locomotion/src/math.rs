//! Small math helpers shared by the ability code.
//!
//! Everything here works in a Z-up frame with yaw measured around +Z.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// World up axis.
pub const UP: Vec3 = Vec3::Z;

/// Orientation as pitch/yaw/roll in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    /// A rotation around the up axis only.
    pub const fn from_yaw(yaw: f32) -> Self {
        Self {
            pitch: 0.0,
            yaw,
            roll: 0.0,
        }
    }

    /// Horizontal forward axis for this rotation's yaw.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        yaw_axes(self.yaw).0
    }

    /// Horizontal right axis for this rotation's yaw.
    #[inline]
    pub fn right(&self) -> Vec3 {
        yaw_axes(self.yaw).1
    }
}

/// Forward and right unit axes for a yaw angle.
///
/// Yaw 0 faces +X with +Y to the right; positive yaw turns toward +Y.
#[inline]
pub fn yaw_axes(yaw: f32) -> (Vec3, Vec3) {
    let (sin_yaw, cos_yaw) = yaw.sin_cos();
    (
        Vec3::new(cos_yaw, sin_yaw, 0.0),
        Vec3::new(-sin_yaw, cos_yaw, 0.0),
    )
}

/// Rotate a 2D input (x = right, y = forward) into a world-space direction.
///
/// The result is not normalized.
#[inline]
pub fn input_to_world(input: Vec2, yaw: f32) -> Vec3 {
    let (forward, right) = yaw_axes(yaw);
    forward * input.y + right * input.x
}

/// Velocity with the vertical component removed.
#[inline]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Linearly remap `value` from `input` range to `output` range, clamping to
/// the output range.
pub fn map_range_clamped(input: (f32, f32), output: (f32, f32), value: f32) -> f32 {
    let span = input.1 - input.0;
    let alpha = if span.abs() < f32::EPSILON {
        if value >= input.1 { 1.0 } else { 0.0 }
    } else {
        ((value - input.0) / span).clamp(0.0, 1.0)
    };
    output.0 + (output.1 - output.0) * alpha
}

/// Ease-in interpolation between `a` and `b`.
///
/// `alpha` is clamped to `[0, 1]` and shaped by `alpha.powf(exponent)`.
pub fn ease_in(a: f32, b: f32, alpha: f32, exponent: f32) -> f32 {
    let shaped = alpha.clamp(0.0, 1.0).powf(exponent);
    a + (b - a) * shaped
}

/// Frame-rate independent exponential approach of `current` toward `target`.
pub fn smooth_towards(current: Vec3, target: Vec3, rate: f32, delta_time: f32) -> Vec3 {
    if rate <= 0.0 || delta_time <= 0.0 {
        return current;
    }
    let blend = 1.0 - (-rate * delta_time).exp();
    current.lerp(target, blend)
}

/// Angle in degrees between two unit vectors.
///
/// The dot product is clamped so that slightly denormalized inputs never
/// produce NaN. Zero vectors yield 90°.
pub fn angle_between_deg(a: Vec3, b: Vec3) -> f32 {
    a.dot(b).clamp(-1.0, 1.0).acos().to_degrees()
}

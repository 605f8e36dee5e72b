//! Wall-run velocity shaping.
//!
//! While running, the horizontal velocity is kept parallel to the wall and
//! the character is eased toward a fixed standoff from the surface. Falling
//! follows the physics for a grace period; after that the wall catches the
//! fall and lets it go again along an ease-in curve.

use glam::Vec3;

use crate::config::LocomotionConfig;
use crate::math::{ease_in, horizontal, smooth_towards, UP};
use crate::probe::WallContact;

/// Direction along the wall, oriented to agree with `facing_forward`.
///
/// The raw tangent is `cross(normal, up)`; it is flipped when it points
/// against the facing.
pub fn wall_tangent(wall_normal: Vec3, facing_forward: Vec3) -> Vec3 {
    let tangent = wall_normal.cross(UP).normalize_or_zero();
    if tangent.dot(facing_forward) < 0.0 {
        -tangent
    } else {
        tangent
    }
}

/// Redirect the horizontal part of `velocity` along `tangent`, keeping its
/// magnitude. The vertical component is passed through.
pub fn redirect_along(velocity: Vec3, tangent: Vec3) -> Vec3 {
    let speed = horizontal(velocity).length();
    let mut redirected = tangent * speed;
    redirected.z = velocity.z;
    redirected
}

/// Progress of the gravity taper in `[0, 1]` after `elapsed` seconds.
///
/// Zero through the pre-drop window, then an ease-in ramp over the drop
/// duration. Non-decreasing in `elapsed`.
pub fn gravity_taper(elapsed: f32, config: &LocomotionConfig) -> f32 {
    let alpha = (elapsed - config.wall_run_pre_drop_duration) / config.wall_run_drop_duration;
    ease_in(0.0, 1.0, alpha, config.wall_run_drop_exponent)
}

/// Apply the gravity taper to the physics vertical velocity.
///
/// Inside the pre-drop window and for upward motion the value is returned
/// unchanged. Afterwards a downward velocity is scaled by the taper, so its
/// magnitude never exceeds the untapered one.
pub fn taper_vertical_velocity(vertical: f32, elapsed: f32, config: &LocomotionConfig) -> f32 {
    if elapsed <= config.wall_run_pre_drop_duration || vertical >= 0.0 {
        return vertical;
    }
    vertical * gravity_taper(elapsed, config)
}

/// Position the character is pulled toward while running along `contact`.
///
/// The impact point pushed out by the standoff distance, at the character's
/// current height.
pub fn standoff_target(contact: &WallContact, position: Vec3, config: &LocomotionConfig) -> Vec3 {
    let mut target = contact.point() + contact.normal() * config.wall_run_standoff;
    target.z = position.z;
    target
}

/// One smoothing step toward the standoff target.
pub fn approach_standoff(
    contact: &WallContact,
    position: Vec3,
    config: &LocomotionConfig,
    delta_time: f32,
) -> Vec3 {
    let target = standoff_target(contact, position, config);
    smooth_towards(position, target, config.wall_run_smoothing_rate, delta_time)
}

//! Kinematic body capability.
//!
//! The physics collaborator owns the body; the controller borrows it once per
//! handler call or step and mutates it in place. The collaborator integrates
//! whatever the controller leaves behind.

use glam::Vec3;

use crate::math::Rotator;

/// Physics-owned movement state of one character, as seen by the controller.
///
/// Implement this for the engine's character movement component. The
/// `panther-physics` crate has a self-contained implementation for tests and
/// headless simulation.
pub trait KinematicBody {
    // ========================================================================
    // Kinematics
    // ========================================================================

    /// Current velocity in world space.
    fn velocity(&self) -> Vec3;

    /// Overwrite the velocity without changing the movement mode.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Current position in world space.
    fn position(&self) -> Vec3;

    /// Teleport to a new position without sweeping.
    fn set_position(&mut self, position: Vec3);

    /// Whether the body is falling or otherwise off the ground.
    fn is_airborne(&self) -> bool;

    /// Whether the body is walking on a surface.
    ///
    /// Not necessarily `!is_airborne()`: engines may have modes that are
    /// neither (swimming, flying).
    fn is_grounded(&self) -> bool;

    /// Set the acceleration cap used when integrating movement input.
    fn set_max_acceleration(&mut self, max_acceleration: f32);

    // ========================================================================
    // Movement Primitives
    // ========================================================================

    /// Accumulate movement input for the next integration. Additive.
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);

    /// Force a new velocity and switch to airborne.
    ///
    /// When an override flag is false the corresponding components are added
    /// to the current velocity instead of replacing it.
    fn launch(&mut self, velocity: Vec3, override_xy: bool, override_z: bool);

    /// Standard ground jump.
    fn jump(&mut self);

    // ========================================================================
    // Orientation
    // ========================================================================

    /// Facing orientation of the character.
    fn rotation(&self) -> Rotator;

    /// Set the facing orientation of the character.
    fn set_rotation(&mut self, rotation: Rotator);

    /// Yaw of the controlling view (radians).
    fn control_yaw(&self) -> f32;

    /// Add yaw to the controlling view.
    fn add_yaw(&mut self, delta: f32);

    /// Add pitch to the controlling view. Clamping is the implementor's job.
    fn add_pitch(&mut self, delta: f32);
}

//! Locomotion controller.
//!
//! This is the main entry point for the ability logic. Input handlers are
//! called by the host's input dispatch as events arrive; [`update`] is called
//! once per simulation step before the physics integrates the body.
//!
//! [`update`]: LocomotionController::update

use glam::Vec2;

use crate::body::KinematicBody;
use crate::config::LocomotionConfig;
use crate::diagnostics::{DiagnosticsSink, LocomotionEvent, TracingSink, WallRunEndReason};
use crate::launch::{self, DoubleJump};
use crate::math::{horizontal, input_to_world, map_range_clamped, yaw_axes, Rotator};
use crate::probe::{detect_wall, EnvironmentProbe, WallContact};
use crate::state::LocomotionState;
use crate::wall_run;

/// Per-component tolerance below which a 2D input counts as zero.
const INPUT_DEADZONE: f32 = 1e-4;

/// Squared horizontal speed below which facing is left alone.
const MIN_FACING_SPEED_SQ: f32 = 1e-8;

/// Movement-ability state machine for one character.
///
/// Handles:
/// - Speed-dependent acceleration tuning and facing
/// - Ground jump and directional double jump
/// - Wall run and wall jump
///
/// # Example
///
/// ```ignore
/// let mut controller = LocomotionController::new(LocomotionConfig::default());
///
/// // Input events:
/// controller.on_move_input(&mut body, right, forward);
/// controller.on_jump_pressed(&mut body);
///
/// // Each frame:
/// controller.update(&mut body, &probe, delta_time);
/// ```
#[derive(Debug, Clone)]
pub struct LocomotionController<S = TracingSink> {
    /// Ability tuning.
    pub config: LocomotionConfig,
    state: LocomotionState,
    sink: S,
}

impl LocomotionController<TracingSink> {
    /// Create a controller that logs through `tracing`.
    pub fn new(config: LocomotionConfig) -> Self {
        Self::with_sink(config, TracingSink)
    }
}

impl<S: DiagnosticsSink> LocomotionController<S> {
    /// Create a controller reporting to `sink`.
    pub fn with_sink(config: LocomotionConfig, sink: S) -> Self {
        let state = LocomotionState::new(&config);
        Self { config, state, sink }
    }

    /// Current ability state.
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// The diagnostics sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    // ========================================================================
    // Input Handlers
    // ========================================================================

    /// Movement input (x = right, y = forward), relative to the view yaw.
    ///
    /// Accumulates on the body; several calls in one step add up.
    pub fn on_move_input<B>(&mut self, body: &mut B, right: f32, forward: f32)
    where
        B: KinematicBody + ?Sized,
    {
        self.state.last_input_direction = Vec2::new(right, forward);

        let (forward_axis, right_axis) = yaw_axes(body.control_yaw());
        body.add_movement_input(forward_axis, forward);
        body.add_movement_input(right_axis, right);
    }

    /// Look input. Forwarded as-is; pitch limits belong to the view owner.
    pub fn on_look_input<B>(&mut self, body: &mut B, yaw_delta: f32, pitch_delta: f32)
    where
        B: KinematicBody + ?Sized,
    {
        body.add_yaw(yaw_delta);
        body.add_pitch(pitch_delta);
    }

    /// Jump pressed.
    pub fn on_jump_pressed<B>(&mut self, body: &mut B)
    where
        B: KinematicBody + ?Sized,
    {
        self.state.is_holding_jump_input = true;

        if body.is_airborne() && self.state.can_double_jump {
            self.try_double_jump(body);
        } else if body.is_grounded() {
            body.jump();
            self.sink.record(LocomotionEvent::GroundJump);
        }
    }

    /// Jump released. Ends any wall run and, in the air, tries a wall jump.
    pub fn on_jump_released<B, P>(&mut self, body: &mut B, probe: &P)
    where
        B: KinematicBody + ?Sized,
        P: EnvironmentProbe + ?Sized,
    {
        self.state.is_holding_jump_input = false;
        self.stop_wall_run(WallRunEndReason::JumpReleased);

        if body.is_airborne() && self.state.can_wall_jump {
            self.try_wall_jump(body, probe);
        }
    }

    /// Ground contact began.
    pub fn on_landed(&mut self) {
        self.state.can_double_jump = true;
        self.sink.record(LocomotionEvent::Landed);
    }

    // ========================================================================
    // Per-Step Update
    // ========================================================================

    /// Advance the controller by one simulation step.
    pub fn update<B, P>(&mut self, body: &mut B, probe: &P, delta_time: f32)
    where
        B: KinematicBody + ?Sized,
        P: EnvironmentProbe + ?Sized,
    {
        let delta_time = delta_time.max(0.0);

        self.update_wall_run(body, probe, delta_time);
        self.tune_acceleration(body);
        self.face_velocity(body);
    }

    // ========================================================================
    // Jumps
    // ========================================================================

    fn try_double_jump<B>(&mut self, body: &mut B)
    where
        B: KinematicBody + ?Sized,
    {
        let input = self.state.last_input_direction;
        if input.abs().max_element() <= INPUT_DEADZONE {
            self.sink.record(LocomotionEvent::DoubleJumpNoInput);
            return;
        }

        let desired_direction = input_to_world(input, body.control_yaw()).normalize_or_zero();

        // Spent before the angle gate: a rejected turn still uses up the jump.
        self.state.can_double_jump = false;

        match launch::double_jump(body.velocity(), desired_direction, &self.config) {
            DoubleJump::Launch {
                velocity,
                angle_deg,
                speed_loss,
            } => {
                body.launch(velocity, true, true);
                self.sink.record(LocomotionEvent::DoubleJump {
                    angle_deg,
                    speed_loss,
                });
            }
            DoubleJump::TooSharp { angle_deg } => {
                self.sink.record(LocomotionEvent::DoubleJumpTooSharp { angle_deg });
            }
        }
    }

    fn try_wall_jump<B, P>(&mut self, body: &mut B, probe: &P)
    where
        B: KinematicBody + ?Sized,
        P: EnvironmentProbe + ?Sized,
    {
        let Some(contact) = self.find_wall(body, probe) else {
            return;
        };

        let velocity = launch::wall_jump_velocity(body.velocity(), contact.normal(), &self.config);
        body.launch(velocity, true, true);
        self.sink.record(LocomotionEvent::WallJump { side: contact.side });
    }

    // ========================================================================
    // Wall Run
    // ========================================================================

    fn update_wall_run<B, P>(&mut self, body: &mut B, probe: &P, delta_time: f32)
    where
        B: KinematicBody + ?Sized,
        P: EnvironmentProbe + ?Sized,
    {
        if !self.state.is_wall_running {
            if !self.state.is_holding_jump_input {
                return;
            }
            if let Some(contact) = self.find_wall(body, probe) {
                self.start_wall_run(body, &contact);
            }
            return;
        }

        if !self.state.is_holding_jump_input {
            self.stop_wall_run(WallRunEndReason::JumpReleased);
            return;
        }

        let Some(contact) = self.find_wall(body, probe) else {
            self.stop_wall_run(WallRunEndReason::LostWall);
            return;
        };

        self.state.wall_run_elapsed_time += delta_time;

        let mut velocity = body.velocity();
        velocity.z = wall_run::taper_vertical_velocity(
            velocity.z,
            self.state.wall_run_elapsed_time,
            &self.config,
        );

        let tangent = wall_run::wall_tangent(contact.normal(), body.rotation().forward());
        body.set_velocity(wall_run::redirect_along(velocity, tangent));

        let position =
            wall_run::approach_standoff(&contact, body.position(), &self.config, delta_time);
        body.set_position(position);
    }

    fn start_wall_run<B>(&mut self, body: &mut B, contact: &WallContact)
    where
        B: KinematicBody + ?Sized,
    {
        self.state.begin_wall_run();

        let tangent = wall_run::wall_tangent(contact.normal(), body.rotation().forward());
        let mut velocity = wall_run::redirect_along(body.velocity(), tangent);
        velocity.z = velocity.z.max(0.0);
        body.set_velocity(velocity);

        self.sink.record(LocomotionEvent::WallRunStarted { side: contact.side });
    }

    fn stop_wall_run(&mut self, reason: WallRunEndReason) {
        if self.state.is_wall_running {
            self.sink.record(LocomotionEvent::WallRunEnded { reason });
        }
        self.state.clear_wall_run();
    }

    fn find_wall<B, P>(&self, body: &B, probe: &P) -> Option<WallContact>
    where
        B: KinematicBody + ?Sized,
        P: EnvironmentProbe + ?Sized,
    {
        detect_wall(
            probe,
            body.position(),
            body.rotation(),
            self.config.wall_probe_distance,
        )
    }

    // ========================================================================
    // Acceleration & Facing
    // ========================================================================

    fn tune_acceleration<B>(&self, body: &mut B)
    where
        B: KinematicBody + ?Sized,
    {
        let speed = horizontal(body.velocity()).length();
        let max_acceleration = self.max_acceleration_for(speed);
        tracing::trace!(speed, max_acceleration, "acceleration tuned");
        body.set_max_acceleration(max_acceleration);
    }

    /// Acceleration cap for a given horizontal speed.
    ///
    /// Fast movement leaves less headroom; from rest the fallback gives a
    /// quick ramp-up.
    pub fn max_acceleration_for(&self, speed: f32) -> f32 {
        if speed >= self.config.accel_speed_range.0 {
            map_range_clamped(
                self.config.accel_speed_range,
                self.config.accel_output_range,
                speed,
            )
        } else {
            self.config.accel_fallback
        }
    }

    fn face_velocity<B>(&self, body: &mut B)
    where
        B: KinematicBody + ?Sized,
    {
        let planar = horizontal(body.velocity());
        if planar.length_squared() <= MIN_FACING_SPEED_SQ {
            return;
        }
        body.set_rotation(Rotator::from_yaw(planar.y.atan2(planar.x)));
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Self-contained [`KinematicBody`] for tests and headless simulation.

use glam::Vec3;
use panther_locomotion::math::{horizontal, Rotator};
use panther_locomotion::KinematicBody;
use serde::{Deserialize, Serialize};

use super::config::BodyConfig;
use super::slide_move::slide_move;
use crate::collision::{CollisionWorld, ContentFlags, QueryFilter, TraceShape};

/// Gap kept between the capsule and the ground it rests on.
const FLOOR_GAP: f32 = 0.1;

/// Largest upward speed treated as overbounce off a surface rather than
/// real upward motion.
const MAX_CLIP_REBOUND: f32 = 5.0;

/// Movement mode of a [`SimulatedBody`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementMode {
    Walking,
    #[default]
    Falling,
}

/// What happened during one [`SimulatedBody::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepOutcome {
    /// The body touched ground after falling.
    pub landed: bool,
    /// The slide move hit something.
    pub blocked: bool,
}

/// Capsule character body integrated against a [`CollisionWorld`].
///
/// Positions are capsule centers. Movement input accumulates between steps
/// and is consumed by the next [`step`](Self::step).
#[derive(Debug, Clone)]
pub struct SimulatedBody {
    config: BodyConfig,
    position: Vec3,
    velocity: Vec3,
    rotation: Rotator,
    control_rotation: Rotator,
    mode: MovementMode,
    max_acceleration: f32,
    pending_input: Vec3,
    filter: QueryFilter,
}

impl SimulatedBody {
    /// Create a falling body at `position`.
    pub fn new(config: BodyConfig, position: Vec3) -> Self {
        Self {
            max_acceleration: config.initial_max_acceleration,
            config,
            position,
            velocity: Vec3::ZERO,
            rotation: Rotator::default(),
            control_rotation: Rotator::default(),
            mode: MovementMode::Falling,
            pending_input: Vec3::ZERO,
            filter: QueryFilter::new(ContentFlags::MASK_CHARACTER_SOLID),
        }
    }

    /// Skip the given brush in every query, usually the body's own volume.
    pub fn ignoring(mut self, brush: u32) -> Self {
        self.filter = self.filter.ignoring(brush);
        self
    }

    pub fn config(&self) -> &BodyConfig {
        &self.config
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn max_acceleration(&self) -> f32 {
        self.max_acceleration
    }

    pub fn control_rotation(&self) -> Rotator {
        self.control_rotation
    }

    /// Brush this body's queries skip, if any.
    pub fn ignored_brush(&self) -> Option<u32> {
        self.filter.ignore
    }

    pub fn shape(&self) -> TraceShape {
        self.config.shape()
    }

    /// Integrate one step of movement through `world`.
    pub fn step(&mut self, world: &CollisionWorld, delta_time: f32) -> StepOutcome {
        let delta_time = delta_time.max(0.0);
        let input = std::mem::take(&mut self.pending_input).clamp_length_max(1.0);

        match self.mode {
            MovementMode::Walking => {
                self.calc_velocity(input, delta_time, 1.0, self.config.braking_deceleration);
                self.velocity.z = 0.0;
            }
            MovementMode::Falling => {
                self.calc_velocity(input, delta_time, self.config.air_control, 0.0);
                self.velocity.z -= self.config.gravity * delta_time;
            }
        }

        let mut position = self.position;
        let mut velocity = self.velocity;
        let clear = slide_move(
            world,
            &mut position,
            &mut velocity,
            self.shape(),
            self.filter,
            delta_time,
            self.config.overbounce,
            self.config.max_clip_planes,
        );
        self.position = position;
        self.velocity = velocity;

        if !clear && self.velocity.z > 0.0 && self.velocity.z <= MAX_CLIP_REBOUND {
            self.velocity.z = 0.0;
        }

        let was_falling = self.mode == MovementMode::Falling;
        let floor = if self.velocity.z <= 0.0 {
            self.find_floor(world)
        } else {
            None
        };

        match floor {
            Some(floor_z) => {
                self.position.z = floor_z + self.config.capsule_half_height + FLOOR_GAP;
                self.velocity.z = 0.0;
                self.mode = MovementMode::Walking;
            }
            None => self.mode = MovementMode::Falling,
        }

        let landed = was_falling && self.mode == MovementMode::Walking;
        if landed {
            tracing::debug!(position = ?self.position, "body landed");
        }

        StepOutcome {
            landed,
            blocked: !clear,
        }
    }

    /// Apply input acceleration, or braking without input, to the
    /// horizontal velocity. There is no ground friction.
    fn calc_velocity(&mut self, input: Vec3, delta_time: f32, control: f32, braking: f32) {
        let mut planar = horizontal(self.velocity);
        let prior_speed = planar.length();

        if input.length_squared() > 0.0 {
            planar += input * self.max_acceleration * control * delta_time;
            // Input alone never pushes past the walk speed, but a faster
            // launch is kept
            let limit = self.config.max_walk_speed.max(prior_speed);
            planar = planar.clamp_length_max(limit);
        } else if braking > 0.0 && prior_speed > 0.0 {
            let drop = braking * delta_time;
            planar = if prior_speed <= drop {
                Vec3::ZERO
            } else {
                planar * (1.0 - drop / prior_speed)
            };
        }

        self.velocity.x = planar.x;
        self.velocity.y = planar.y;
    }

    /// Height of walkable ground just below the capsule, if any.
    fn find_floor(&self, world: &CollisionWorld) -> Option<f32> {
        let reach = self.config.capsule_half_height + self.config.ground_probe_slack;
        let hit = world.raycast(self.position, Vec3::NEG_Z, reach, self.filter);
        let normal = hit.hit_normal.filter(|_| hit.hit_something())?;
        (normal.z >= self.config.min_ground_normal).then_some(hit.end_position.z)
    }
}

impl KinematicBody for SimulatedBody {
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
        self.mode == MovementMode::Falling
    }

    fn is_grounded(&self) -> bool {
        self.mode == MovementMode::Walking
    }

    fn set_max_acceleration(&mut self, max_acceleration: f32) {
        self.max_acceleration = max_acceleration.max(0.0);
    }

    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.pending_input += horizontal(direction) * scale;
    }

    fn launch(&mut self, velocity: Vec3, override_xy: bool, override_z: bool) {
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
        self.mode = MovementMode::Falling;
    }

    fn jump(&mut self) {
        if self.mode != MovementMode::Walking {
            return;
        }
        self.velocity.z = self.config.jump_z_velocity;
        self.mode = MovementMode::Falling;
    }

    fn rotation(&self) -> Rotator {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Rotator) {
        self.rotation = rotation;
    }

    fn control_yaw(&self) -> f32 {
        self.control_rotation.yaw
    }

    fn add_yaw(&mut self, delta: f32) {
        self.control_rotation.yaw += delta;
    }

    fn add_pitch(&mut self, delta: f32) {
        let limit = self.config.pitch_limit_deg.to_radians();
        self.control_rotation.pitch = (self.control_rotation.pitch + delta).clamp(-limit, limit);
    }
}

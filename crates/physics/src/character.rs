//! A simulated body driven by a locomotion controller.

use glam::Vec3;
use panther_locomotion::{
    DiagnosticsSink, KinematicBody, LocomotionConfig, LocomotionController, Rotator,
    TracingSink,
};

use crate::body::{BodyConfig, SimulatedBody, StepOutcome};
use crate::collision::{CollisionWorld, WorldProbe};

/// One player character: physics body plus ability controller.
///
/// Input handlers forward to the controller with the body attached. Each
/// [`tick`](Self::tick) runs the controller update, integrates the body and
/// reports a landing back to the controller.
#[derive(Debug, Clone)]
pub struct Character<S = TracingSink> {
    pub body: SimulatedBody,
    pub locomotion: LocomotionController<S>,
}

impl Character<TracingSink> {
    pub fn new(body_config: BodyConfig, config: LocomotionConfig, position: Vec3) -> Self {
        Self {
            body: SimulatedBody::new(body_config, position),
            locomotion: LocomotionController::new(config),
        }
    }
}

impl<S: DiagnosticsSink> Character<S> {
    pub fn with_sink(
        body_config: BodyConfig,
        config: LocomotionConfig,
        position: Vec3,
        sink: S,
    ) -> Self {
        Self {
            body: SimulatedBody::new(body_config, position),
            locomotion: LocomotionController::with_sink(config, sink),
        }
    }

    /// Face the body and its view along `yaw` (radians).
    pub fn face(&mut self, yaw: f32) {
        self.body.set_rotation(Rotator::from_yaw(yaw));
        let current = self.body.control_yaw();
        self.body.add_yaw(yaw - current);
    }

    pub fn move_input(&mut self, right: f32, forward: f32) {
        self.locomotion.on_move_input(&mut self.body, right, forward);
    }

    pub fn look_input(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.locomotion.on_look_input(&mut self.body, yaw_delta, pitch_delta);
    }

    pub fn jump_pressed(&mut self) {
        self.locomotion.on_jump_pressed(&mut self.body);
    }

    pub fn jump_released(&mut self, world: &CollisionWorld) {
        let probe = self.probe(world);
        self.locomotion.on_jump_released(&mut self.body, &probe);
    }

    /// Advance one frame.
    pub fn tick(&mut self, world: &CollisionWorld, delta_time: f32) -> StepOutcome {
        let probe = self.probe(world);
        self.locomotion.update(&mut self.body, &probe, delta_time);

        let outcome = self.body.step(world, delta_time);
        if outcome.landed {
            self.locomotion.on_landed();
        }
        outcome
    }

    fn probe<'w>(&self, world: &'w CollisionWorld) -> WorldProbe<'w> {
        let probe = WorldProbe::new(world);
        match self.body.ignored_brush() {
            Some(brush) => probe.ignoring(brush),
            None => probe,
        }
    }
}

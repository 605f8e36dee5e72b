//! Panther Physics
//!
//! Reference physics collaborator for `panther-locomotion`. Provides a
//! collision world, a capsule body that implements
//! [`KinematicBody`](panther_locomotion::KinematicBody), a raycast
//! [`EnvironmentProbe`](panther_locomotion::EnvironmentProbe), and a
//! [`Character`] that wires them to a locomotion controller.
//!
//! # Architecture
//!
//! - **Collision**: Traces capsules and rays through box brushes
//! - **Body**: Integrates input, gravity and launches with slide-move response
//! - **Character**: Runs controller update, physics step and landing each tick
//!
//! The world is Z-up and measured in centimetres.

pub mod body;
pub mod character;
pub mod collision;

pub use body::{BodyConfig, MovementMode, SimulatedBody, StepOutcome};
pub use character::Character;
pub use collision::{
    CollisionWorld, ContentFlags, QueryFilter, TraceResult, TraceShape, WorldProbe,
};

//! Reference character body.
//!
//! A capsule that walks and falls through a [`CollisionWorld`](crate::CollisionWorld),
//! driven through the [`KinematicBody`](panther_locomotion::KinematicBody)
//! capability the locomotion controller expects.

mod config;
mod simulated;
mod slide_move;

pub use config::BodyConfig;
pub use simulated::{MovementMode, SimulatedBody, StepOutcome};
pub use slide_move::{clip_velocity, slide_move};

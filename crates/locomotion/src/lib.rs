//! Panther Locomotion
//!
//! Movement-ability state machine for a third-person character. The crate owns
//! the ability logic and nothing else: physics integration, collision and input
//! devices are supplied by the host through two capability traits.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   handlers    ┌──────────────────────┐   reads/writes   ┌───────────────┐
//! │ Input glue   │──────────────►│ LocomotionController │─────────────────►│ KinematicBody │
//! └──────────────┘   update(dt)  │  (LocomotionState)   │                  └───────────────┘
//!                                │                      │   lateral casts  ┌────────────────┐
//!                                │                      │─────────────────►│EnvironmentProbe│
//!                                └──────────────────────┘                  └────────────────┘
//! ```
//!
//! - **Ground**: acceleration headroom shrinks as horizontal speed grows.
//! - **Double jump**: one in-air jump toward the last input direction, paying
//!   a speed penalty that grows with the turn angle.
//! - **Wall run**: while jump is held next to a wall, velocity is redirected
//!   along the wall and gravity is tapered in after a grace period.
//! - **Wall jump**: releasing jump next to a wall reflects the character off it.
//!
//! All coordinates are Z-up. Yaw is measured in radians around +Z, with yaw 0
//! facing +X.

pub mod body;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod error;
pub mod launch;
pub mod math;
pub mod probe;
pub mod state;
pub mod wall_run;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use body::KinematicBody;
pub use config::LocomotionConfig;
pub use controller::LocomotionController;
pub use diagnostics::{DiagnosticsSink, LocomotionEvent, NullSink, TracingSink, WallRunEndReason};
pub use error::ConfigError;
pub use math::Rotator;
pub use probe::{EnvironmentProbe, ProbeHit, WallContact, WallSide};
pub use state::LocomotionState;

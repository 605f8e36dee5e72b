//! Collision detection for the reference character.
//!
//! Provides world collision testing with upright capsules, boxes and rays.
//!
//! # Key Types
//!
//! - [`CollisionWorld`]: The collision environment containing all geometry
//! - [`TraceResult`]: Output from a collision trace
//! - [`TraceShape`]: Shape used for tracing (capsule, box or point)
//! - [`WorldProbe`]: Wall probe for the locomotion controller

mod flags;
mod probe;
mod trace;
mod world;

pub use flags::ContentFlags;
pub use probe::WorldProbe;
pub use trace::{TraceResult, TraceShape};
pub use world::{CollisionBrush, CollisionWorld, QueryFilter};

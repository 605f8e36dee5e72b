//! Diagnostics sink for ability events.
//!
//! The controller reports what it did through an injected [`DiagnosticsSink`]
//! instead of writing to a global debug overlay. The default sink forwards
//! to `tracing`; tests collect events into a `Vec`.

use serde::{Deserialize, Serialize};

use crate::probe::WallSide;

/// Why a wall run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallRunEndReason {
    JumpReleased,
    LostWall,
}

/// Something noteworthy the controller did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LocomotionEvent {
    GroundJump,
    DoubleJump { angle_deg: f32, speed_loss: f32 },
    DoubleJumpTooSharp { angle_deg: f32 },
    DoubleJumpNoInput,
    WallJump { side: WallSide },
    WallRunStarted { side: WallSide },
    WallRunEnded { reason: WallRunEndReason },
    Landed,
}

/// Receiver for [`LocomotionEvent`]s.
pub trait DiagnosticsSink {
    fn record(&mut self, event: LocomotionEvent);
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&mut self, event: LocomotionEvent) {
        match event {
            LocomotionEvent::GroundJump => tracing::debug!("ground jump"),
            LocomotionEvent::DoubleJump { angle_deg, speed_loss } => tracing::debug!(
                angle_deg,
                loss_pct = speed_loss * 100.0,
                "double jump"
            ),
            LocomotionEvent::DoubleJumpTooSharp { angle_deg } => {
                tracing::debug!(angle_deg, "double jump angle too sharp")
            }
            LocomotionEvent::DoubleJumpNoInput => tracing::trace!("double jump without input"),
            LocomotionEvent::WallJump { side } => tracing::debug!(?side, "wall jump"),
            LocomotionEvent::WallRunStarted { side } => tracing::debug!(?side, "wall run started"),
            LocomotionEvent::WallRunEnded { reason } => tracing::debug!(?reason, "wall run ended"),
            LocomotionEvent::Landed => tracing::debug!("landed"),
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn record(&mut self, _event: LocomotionEvent) {}
}

impl DiagnosticsSink for Vec<LocomotionEvent> {
    fn record(&mut self, event: LocomotionEvent) {
        self.push(event);
    }
}

//! Per-character ability state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::LocomotionConfig;

/// Ability state owned by one [`LocomotionController`].
///
/// Lives for the character's lifetime. Fields are re-initialized, never torn
/// down: `can_double_jump` is restored on landing, the wall-run fields are
/// cleared when wall contact is lost or jump is released.
///
/// [`LocomotionController`]: crate::LocomotionController
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocomotionState {
    /// Last movement input (x = right, y = forward). Last write wins.
    pub last_input_direction: Vec2,

    /// Whether the in-air jump is still available.
    pub can_double_jump: bool,

    /// Gate for wall jumping. Seeded from config, never changed by the controller.
    pub can_wall_jump: bool,

    /// True between a jump press and the matching release.
    pub is_holding_jump_input: bool,

    /// True while running along a wall.
    pub is_wall_running: bool,

    /// Seconds since the current wall run began.
    pub wall_run_elapsed_time: f32,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::new(&LocomotionConfig::default())
    }
}

impl LocomotionState {
    /// Fresh state for a newly spawned character.
    pub fn new(config: &LocomotionConfig) -> Self {
        Self {
            last_input_direction: Vec2::ZERO,
            can_double_jump: true,
            can_wall_jump: config.wall_jump_enabled,
            is_holding_jump_input: false,
            is_wall_running: false,
            wall_run_elapsed_time: 0.0,
        }
    }

    /// Leave the wall-run state. Safe to call when not running.
    #[inline]
    pub fn clear_wall_run(&mut self) {
        self.is_wall_running = false;
        self.wall_run_elapsed_time = 0.0;
    }

    /// Enter the wall-run state with a fresh timer.
    #[inline]
    pub fn begin_wall_run(&mut self) {
        self.is_wall_running = true;
        self.wall_run_elapsed_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = LocomotionState::default();
        assert!(state.can_double_jump);
        assert!(state.can_wall_jump);
        assert!(!state.is_holding_jump_input);
        assert!(!state.is_wall_running);
        assert_eq!(state.last_input_direction, Vec2::ZERO);
    }

    #[test]
    fn test_wall_jump_gate_follows_config() {
        let config = LocomotionConfig {
            wall_jump_enabled: false,
            ..Default::default()
        };
        assert!(!LocomotionState::new(&config).can_wall_jump);
    }

    #[test]
    fn test_clear_wall_run_is_idempotent() {
        let mut state = LocomotionState::default();
        state.begin_wall_run();
        state.wall_run_elapsed_time = 0.7;

        state.clear_wall_run();
        let once = state.clone();
        state.clear_wall_run();

        assert_eq!(state, once);
        assert!(!state.is_wall_running);
        assert_eq!(state.wall_run_elapsed_time, 0.0);
    }
}

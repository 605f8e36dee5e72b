//! Locomotion tuning constants.
//!
//! All ability parameters are grouped here for easy tuning. Distances are in
//! engine units (centimeters), speeds in units/second, durations in seconds.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for the locomotion abilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    // ========================================================================
    // Ground Acceleration
    // ========================================================================
    /// Horizontal speed range over which acceleration is remapped.
    /// Below the lower bound the fallback is used.
    pub accel_speed_range: (f32, f32),

    /// Max acceleration at the two ends of `accel_speed_range`.
    pub accel_output_range: (f32, f32),

    /// Max acceleration used below the remap range (fast ramp-up from rest).
    pub accel_fallback: f32,

    // ========================================================================
    // Double Jump
    // ========================================================================
    /// Turn angle above which a double jump is rejected (degrees).
    pub double_jump_max_angle_deg: f32,

    /// Angle splitting the gentle and steep penalty slopes (degrees).
    pub double_jump_knee_angle_deg: f32,

    /// Speed loss at the knee angle (0.0-1.0).
    pub double_jump_knee_loss: f32,

    /// Speed loss at the maximum angle (0.0-1.0).
    pub double_jump_max_loss: f32,

    /// Upward velocity forced by a double jump.
    pub double_jump_vertical_velocity: f32,

    // ========================================================================
    // Wall Detection
    // ========================================================================
    /// Length of each lateral wall probe.
    pub wall_probe_distance: f32,

    // ========================================================================
    // Wall Jump
    // ========================================================================
    /// Initial value of the wall-jump gate.
    pub wall_jump_enabled: bool,

    /// Impulse along the wall normal added on a wall jump.
    pub wall_jump_push: f32,

    /// Upward velocity forced by a wall jump.
    pub wall_jump_vertical_velocity: f32,

    // ========================================================================
    // Wall Run
    // ========================================================================
    /// Time spent on the wall before gravity starts tapering in.
    pub wall_run_pre_drop_duration: f32,

    /// Time over which the taper ramps from zero to full.
    pub wall_run_drop_duration: f32,

    /// Ease-in exponent of the taper curve.
    pub wall_run_drop_exponent: f32,

    /// Distance kept between the character and the wall surface.
    pub wall_run_standoff: f32,

    /// Exponential smoothing rate used to pull toward the standoff position.
    pub wall_run_smoothing_rate: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            accel_speed_range: (300.0, 500.0),
            accel_output_range: (1500.0, 250.0),
            accel_fallback: 10000.0,

            double_jump_max_angle_deg: 135.0,
            double_jump_knee_angle_deg: 45.0,
            double_jump_knee_loss: 0.15,
            double_jump_max_loss: 0.8,
            double_jump_vertical_velocity: 1000.0,

            wall_probe_distance: 100.0,

            wall_jump_enabled: true,
            wall_jump_push: 600.0,
            wall_jump_vertical_velocity: 800.0,

            wall_run_pre_drop_duration: 1.0,
            wall_run_drop_duration: 1.0,
            wall_run_drop_exponent: 0.5,
            wall_run_standoff: 50.0,
            wall_run_smoothing_rate: 20.0,
        }
    }
}

impl LocomotionConfig {
    /// Parse a config from RON. Missing fields fall back to defaults.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed RON.
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (speed_lo, speed_hi) = self.accel_speed_range;
        if !(speed_lo >= 0.0 && speed_hi > speed_lo) {
            return Err(ConfigError::invalid(
                "accel_speed_range",
                "must be non-negative and increasing",
            ));
        }
        let (out_a, out_b) = self.accel_output_range;
        if out_a < 0.0 || out_b < 0.0 {
            return Err(ConfigError::invalid("accel_output_range", "must be non-negative"));
        }
        if self.accel_fallback <= 0.0 {
            return Err(ConfigError::invalid("accel_fallback", "must be positive"));
        }

        let knee = self.double_jump_knee_angle_deg;
        let max = self.double_jump_max_angle_deg;
        if !(knee > 0.0 && max > knee && max <= 180.0) {
            return Err(ConfigError::invalid(
                "double_jump_max_angle_deg",
                "must satisfy 0 < knee < max <= 180",
            ));
        }
        for (field, loss) in [
            ("double_jump_knee_loss", self.double_jump_knee_loss),
            ("double_jump_max_loss", self.double_jump_max_loss),
        ] {
            if !(0.0..=1.0).contains(&loss) {
                return Err(ConfigError::invalid(field, "must be within [0, 1]"));
            }
        }

        for (field, value) in [
            ("wall_probe_distance", self.wall_probe_distance),
            ("wall_run_drop_duration", self.wall_run_drop_duration),
            ("wall_run_drop_exponent", self.wall_run_drop_exponent),
            ("wall_run_smoothing_rate", self.wall_run_smoothing_rate),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::invalid(field, "must be positive"));
            }
        }
        if self.wall_run_pre_drop_duration < 0.0 {
            return Err(ConfigError::invalid(
                "wall_run_pre_drop_duration",
                "must not be negative",
            ));
        }
        if self.wall_run_standoff < 0.0 {
            return Err(ConfigError::invalid("wall_run_standoff", "must not be negative"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LocomotionConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.wall_jump_enabled);
    }

    #[test]
    fn test_ron_roundtrip_preserves_tuning() {
        let config = LocomotionConfig {
            wall_jump_push: 750.0,
            ..Default::default()
        };
        let text = config.to_ron_string().unwrap();
        let parsed = LocomotionConfig::from_ron_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let parsed = LocomotionConfig::from_ron_str("(wall_run_standoff: 30.0)").unwrap();
        assert_eq!(parsed.wall_run_standoff, 30.0);
        assert_eq!(parsed.accel_fallback, 10000.0);
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let err = LocomotionConfig::from_ron_str("(wall_run_standoff: )").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let config = LocomotionConfig {
            accel_speed_range: (500.0, 300.0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "accel_speed_range", .. }));
    }

    #[test]
    fn test_rejects_loss_out_of_range() {
        let config = LocomotionConfig {
            double_jump_max_loss: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "double_jump_max_loss", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_probe_distance() {
        let config = LocomotionConfig {
            wall_probe_distance: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

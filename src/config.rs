// config.rs - Controller tuning, loadable from JSON
use std::path::Path;

use anyhow::{ensure, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::Smoothing;

/// Translation and rotation multipliers for one speed mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedScale {
    pub translation: f32,
    pub rotation: f32,
}

/// Pose restored by `reset_view`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeView {
    pub translation: [f32; 3],
    /// Degrees
    pub pitch: f32,
    /// Degrees
    pub yaw: f32,
}

impl HomeView {
    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.translation)
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            translation: [0.0, 1.5, 0.25],
            pitch: 0.0,
            yaw: 90.0,
        }
    }
}

/// Free-look controller tuning. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Units per second at full scale
    pub move_speed: f32,
    /// Degrees per second of gamepad look at full deflection
    pub look_speed: f32,
    /// Degrees per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Scales used while boost is not held
    pub normal_scale: SpeedScale,
    /// Scales used while boost is held
    pub boost_scale: SpeedScale,
    pub smoothing: Smoothing,
    /// Pitch is clamped to [-pitch_limit, pitch_limit] degrees
    pub pitch_limit: f32,
    /// Positive pitch input looks down when set
    pub invert_y: bool,
    pub home: HomeView,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            look_speed: 180.0,
            mouse_sensitivity: 0.1,
            normal_scale: SpeedScale {
                translation: 0.1,
                rotation: 0.5,
            },
            boost_scale: SpeedScale {
                translation: 1.0,
                rotation: 1.0,
            },
            smoothing: Smoothing::default(),
            pitch_limit: 90.0,
            invert_y: true,
            home: HomeView::default(),
        }
    }
}

impl ControllerConfig {
    /// Pick the scale for the current boost state
    pub fn scale(&self, boost: bool) -> SpeedScale {
        if boost {
            self.boost_scale
        } else {
            self.normal_scale
        }
    }

    /// `pitch_limit` folded into [0, 90]; NaN falls back to 90
    pub fn clamped_pitch_limit(&self) -> f32 {
        if self.pitch_limit.is_nan() {
            90.0
        } else {
            self.pitch_limit.abs().min(90.0)
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse controller config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read controller config: {:?}", path))?;
        Self::from_json_str(&text).with_context(|| format!("Invalid controller config: {:?}", path))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize controller config")
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("move_speed", self.move_speed),
            ("look_speed", self.look_speed),
            ("mouse_sensitivity", self.mouse_sensitivity),
            ("smoothing.reference_rate", self.smoothing.reference_rate),
        ];
        for (name, value) in positive {
            ensure!(value.is_finite() && value > 0.0, "{} must be positive, got {}", name, value);
        }

        for (name, scale) in [("normal_scale", self.normal_scale), ("boost_scale", self.boost_scale)] {
            ensure!(
                scale.translation.is_finite() && scale.translation >= 0.0,
                "{}.translation must be non-negative, got {}",
                name,
                scale.translation
            );
            ensure!(
                scale.rotation.is_finite() && scale.rotation >= 0.0,
                "{}.rotation must be non-negative, got {}",
                name,
                scale.rotation
            );
        }

        for (name, base) in [
            ("smoothing.speed_up", self.smoothing.speed_up),
            ("smoothing.slow_down", self.smoothing.slow_down),
        ] {
            ensure!(base > 0.0 && base <= 1.0, "{} must be in (0, 1], got {}", name, base);
        }

        ensure!(
            self.pitch_limit > 0.0 && self.pitch_limit <= 90.0,
            "pitch_limit must be in (0, 90], got {}",
            self.pitch_limit
        );
        ensure!(
            self.home.translation.iter().all(|c| c.is_finite())
                && self.home.pitch.is_finite()
                && self.home.yaw.is_finite(),
            "home view must be finite"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ControllerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.move_speed, 10.0);
        assert_eq!(config.look_speed, 180.0);
        assert_eq!(config.mouse_sensitivity, 0.1);
        assert!(config.invert_y);
        assert_eq!(config.home.translation(), Vec3::new(0.0, 1.5, 0.25));
    }

    #[test]
    fn test_scale_selection() {
        let config = ControllerConfig::default();
        assert_eq!(config.scale(false).translation, 0.1);
        assert_eq!(config.scale(false).rotation, 0.5);
        assert_eq!(config.scale(true).translation, 1.0);
        assert_eq!(config.scale(true).rotation, 1.0);
    }

    #[test]
    fn test_clamped_pitch_limit() {
        let limit = |pitch_limit| ControllerConfig { pitch_limit, ..Default::default() }.clamped_pitch_limit();
        assert_eq!(limit(45.0), 45.0);
        assert_eq!(limit(-10.0), 10.0);
        assert_eq!(limit(400.0), 90.0);
        assert_eq!(limit(f32::NAN), 90.0);
        assert_eq!(limit(f32::NEG_INFINITY), 90.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ControllerConfig::from_json_str(r#"{ "move_speed": 4.0, "invert_y": false }"#).unwrap();
        assert_eq!(config.move_speed, 4.0);
        assert!(!config.invert_y);
        assert_eq!(config.look_speed, 180.0);
        assert_eq!(config.smoothing, Smoothing::default());
    }

    #[test]
    fn test_nested_partial_json() {
        let config =
            ControllerConfig::from_json_str(r#"{ "smoothing": { "speed_up": 0.5 }, "home": { "yaw": 0.0 } }"#).unwrap();
        assert_eq!(config.smoothing.speed_up, 0.5);
        assert_eq!(config.smoothing.slow_down, 0.8);
        assert_eq!(config.home.yaw, 0.0);
        assert_eq!(config.home.translation, [0.0, 1.5, 0.25]);
    }

    #[test]
    fn test_round_trip() {
        let config = ControllerConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(ControllerConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(ControllerConfig::from_json_str(r#"{ "move_speed": -1.0 }"#).is_err());
        assert!(ControllerConfig::from_json_str(r#"{ "pitch_limit": 120.0 }"#).is_err());
        assert!(ControllerConfig::from_json_str(r#"{ "smoothing": { "slow_down": 1.5 } }"#).is_err());
        assert!(ControllerConfig::from_json_str(r#"{ "normal_scale": { "translation": -0.1, "rotation": 0.5 } }"#).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ControllerConfig::from_json_str("{ move_speed: ").unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ControllerConfig::load("/nonexistent/freelook.json").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read"));
    }
}

use std::{fs, ops::RangeInclusive, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    physics::PendulumConfig,
    simulation::{InitialState, Simulation, DEFAULT_TIME_STEP},
    ConfigError,
};

pub const DEFAULT_FRAME_RATE: f64 = 60.0;
pub const FRAME_RATE_RANGE: RangeInclusive<f64> = 1.0..=1000.0;

/// Everything needed to start a simulation, usually read from a JSON file.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub pendulum: PendulumConfig,
    pub initial: InitialState,
    pub time_step_s: f64,
    pub frame_rate_hz: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            pendulum: PendulumConfig::default(),
            initial: InitialState::default(),
            time_step_s: DEFAULT_TIME_STEP,
            frame_rate_hz: DEFAULT_FRAME_RATE,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        let settings = Settings::from_json(&json)?;

        info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pendulum.validate()?;
        self.initial.validate()?;

        if !(self.time_step_s.is_finite() && self.time_step_s > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.time_step_s));
        }
        if !FRAME_RATE_RANGE.contains(&self.frame_rate_hz) {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate_hz));
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Simulation, ConfigError> {
        self.validate()?;
        Simulation::new(self.pendulum, self.time_step_s, self.initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.pendulum.length_m, 10.0);
        assert_eq!(settings.initial.speed_multiplier, 3600.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings = Settings::from_json(
            r#"{ "pendulum": { "length_m": 67.0 }, "initial": { "fixed_mode": true } }"#,
        )
        .unwrap();
        assert_eq!(settings.pendulum.length_m, 67.0);
        assert_eq!(settings.pendulum.gravity_m_s2, 9.81);
        assert!(settings.initial.fixed_mode);
        assert_eq!(settings.initial.amplitude_px, 130.0);
        assert_eq!(settings.frame_rate_hz, 60.0);
    }

    #[test]
    fn bundled_settings_file() {
        let settings = Settings::from_json(include_str!("../../foucault.json")).unwrap();
        assert_eq!(settings.pendulum.length_m, 67.0);
        assert_eq!(settings.initial, InitialState::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "pendulum": { "length_m": -1.0 } }"#),
            Err(ConfigError::InvalidLength(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "time_step_s": 0.0 }"#),
            Err(ConfigError::InvalidTimeStep(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "frame_rate_hz": -60.0 }"#),
            Err(ConfigError::InvalidFrameRate(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "frame_rate_hz": 1e12 }"#),
            Err(ConfigError::InvalidFrameRate(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "frame_rate_hz": 1e-300 }"#),
            Err(ConfigError::InvalidFrameRate(_))
        ));
        assert!(Settings::from_json(r#"{ "frame_rate_hz": 1000.0 }"#).is_ok());
        assert!(Settings::from_json(r#"{ "frame_rate_hz": 1.0 }"#).is_ok());
        assert!(matches!(
            Settings::from_json(r#"{ "initial": { "latitude_deg": -95.0 } }"#),
            Err(ConfigError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        let err = Settings::load("/nonexistent/foucault.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/foucault.json"));
    }

    #[test]
    fn build_uses_settings() {
        let mut settings = Settings::default();
        settings.initial.latitude_deg = 0.0;
        let sim = settings.build().unwrap();
        assert_eq!(sim.state().latitude_deg, 0.0);
        assert_eq!(sim.time_step(), DEFAULT_TIME_STEP);
    }
}

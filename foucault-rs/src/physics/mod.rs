mod location;

pub use location::{LocationKind, LocationPreset};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{math::rotate, ConfigError};

pub const STANDARD_GRAVITY: f64 = 9.81;

/// Sidereal rotation rate of the Earth, in rad/s.
pub const EARTH_ANGULAR_VELOCITY: f64 = 7.2921e-5;

pub const DEFAULT_LENGTH: f64 = 10.0;

// The oscillating bob traces a flattened ellipse rather than a real swing
// path. This is purely visual and has no physical derivation.
pub const SWING_FLATTENING: f64 = 0.3;

// Below this |sin(latitude)| the precession period is treated as infinite.
const EQUATOR_SINGULARITY: f64 = 0.01;

const SIDEREAL_DAY_HOURS: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PendulumConfig {
    pub length_m: f64,
    pub gravity_m_s2: f64,
    pub earth_angular_velocity_rad_s: f64,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        PendulumConfig {
            length_m: DEFAULT_LENGTH,
            gravity_m_s2: STANDARD_GRAVITY,
            earth_angular_velocity_rad_s: EARTH_ANGULAR_VELOCITY,
        }
    }
}

impl PendulumConfig {
    pub fn new(length_m: f64) -> Result<Self, ConfigError> {
        let config = PendulumConfig {
            length_m,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.length_m.is_finite() && self.length_m > 0.0) {
            return Err(ConfigError::InvalidLength(self.length_m));
        }
        if !(self.gravity_m_s2.is_finite() && self.gravity_m_s2 > 0.0) {
            return Err(ConfigError::InvalidGravity(self.gravity_m_s2));
        }
        if !self.earth_angular_velocity_rad_s.is_finite() {
            return Err(ConfigError::InvalidAngularVelocity(
                self.earth_angular_velocity_rad_s,
            ));
        }
        Ok(())
    }

    /// `sqrt(g / L)`, the swing frequency of the bob in rad/s.
    pub fn natural_angular_frequency(&self) -> f64 {
        (self.gravity_m_s2 / self.length_m).sqrt()
    }
}

/// Everything the transform needs for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendulumInput {
    pub elapsed_time_s: f64,
    pub amplitude: f64,
    pub latitude_deg: f64,
    pub speed_multiplier: f64,
    pub fixed_mode: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PendulumSample {
    /// Bob position in the Earth (display) frame.
    pub position: DVec2,
    pub rotation_angle_rad: f64,
}

pub fn inertial_position(
    config: &PendulumConfig,
    elapsed_time_s: f64,
    amplitude: f64,
    fixed_mode: bool,
) -> DVec2 {
    if fixed_mode {
        return DVec2::new(amplitude, 0.0);
    }

    let phase = config.natural_angular_frequency() * elapsed_time_s;
    DVec2::new(
        amplitude * phase.cos(),
        SWING_FLATTENING * amplitude * phase.sin(),
    )
}

/// Angle the oscillation plane has turned through, following Foucault's law
/// `Ω sin(φ) t`. Only this angle is sped up by `speed_multiplier`, the swing
/// itself keeps its natural rate.
pub fn precession_angle(
    config: &PendulumConfig,
    elapsed_time_s: f64,
    latitude_deg: f64,
    speed_multiplier: f64,
) -> f64 {
    let precession_rate = config.earth_angular_velocity_rad_s * latitude_deg.to_radians().sin();
    precession_rate * elapsed_time_s * speed_multiplier
}

pub fn to_earth_frame(inertial: DVec2, rotation_angle_rad: f64) -> DVec2 {
    rotate(inertial, rotation_angle_rad)
}

pub fn transform(config: &PendulumConfig, input: &PendulumInput) -> PendulumSample {
    let inertial = inertial_position(
        config,
        input.elapsed_time_s,
        input.amplitude,
        input.fixed_mode,
    );
    let rotation_angle_rad = precession_angle(
        config,
        input.elapsed_time_s,
        input.latitude_deg,
        input.speed_multiplier,
    );

    PendulumSample {
        position: to_earth_frame(inertial, rotation_angle_rad),
        rotation_angle_rad,
    }
}

/// Hours for the oscillation plane to turn a full circle. Returns `None` near
/// the equator, where the period grows without bound.
pub fn precession_period_hours(latitude_deg: f64) -> Option<f64> {
    let sin_lat = latitude_deg.to_radians().sin();
    if sin_lat.abs() < EQUATOR_SINGULARITY {
        None
    } else {
        Some(SIDEREAL_DAY_HOURS / sin_lat.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn input(elapsed_time_s: f64, latitude_deg: f64, fixed_mode: bool) -> PendulumInput {
        PendulumInput {
            elapsed_time_s,
            amplitude: 130.0,
            latitude_deg,
            speed_multiplier: 3600.0,
            fixed_mode,
        }
    }

    #[test]
    fn natural_frequency() {
        let config = PendulumConfig::default();
        assert!((config.natural_angular_frequency() - 0.981f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn rejects_bad_length() {
        assert!(matches!(
            PendulumConfig::new(0.0),
            Err(ConfigError::InvalidLength(_))
        ));
        assert!(matches!(
            PendulumConfig::new(-2.0),
            Err(ConfigError::InvalidLength(_))
        ));
        assert!(matches!(
            PendulumConfig::new(f64::NAN),
            Err(ConfigError::InvalidLength(_))
        ));
        assert!(PendulumConfig::new(2.5).is_ok());
    }

    #[test]
    fn equator_never_precesses() {
        let config = PendulumConfig::default();
        for t in [0.0, 0.016, 1.0, 250.0, 1.0e6] {
            assert_eq!(precession_angle(&config, t, 0.0, 10000.0), 0.0);
        }
    }

    #[test]
    fn pole_precesses_at_full_rate() {
        let config = PendulumConfig::default();
        let (t, speed) = (12.5, 2400.0);
        let expected = EARTH_ANGULAR_VELOCITY * t * speed;
        let angle = precession_angle(&config, t, 90.0, speed);
        assert_eq!(angle, expected);
    }

    #[test]
    fn mid_latitude_scenario() {
        let config = PendulumConfig::default();
        let sample = transform(&config, &input(1.0, 45.0, false));
        assert!((sample.rotation_angle_rad - 0.18566).abs() < 1e-4);
    }

    #[test]
    fn starts_at_amplitude() {
        let config = PendulumConfig::default();
        for fixed_mode in [false, true] {
            let sample = transform(&config, &input(0.0, 48.8566, fixed_mode));
            assert_eq!(sample.position, DVec2::new(130.0, 0.0));
            assert_eq!(sample.rotation_angle_rad, 0.0);
        }
    }

    #[test]
    fn oscillation_is_flattened() {
        let config = PendulumConfig::default();
        let quarter = std::f64::consts::FRAC_PI_2 / config.natural_angular_frequency();
        let inertial = inertial_position(&config, quarter, 100.0, false);
        assert!(inertial.x.abs() < 1e-9);
        assert!((inertial.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn speed_does_not_change_swing() {
        let config = PendulumConfig::default();
        let slow = PendulumInput {
            speed_multiplier: 100.0,
            ..input(3.0, 0.0, false)
        };
        let fast = PendulumInput {
            speed_multiplier: 10000.0,
            ..slow
        };
        // No precession at the equator, so only the swing shows.
        assert_eq!(
            transform(&config, &slow).position,
            transform(&config, &fast).position
        );
    }

    #[test]
    fn precession_period() {
        assert!((precession_period_hours(30.0).unwrap() - 48.0).abs() < 1e-9);
        assert!((precession_period_hours(-30.0).unwrap() - 48.0).abs() < 1e-9);
        assert!((precession_period_hours(90.0).unwrap() - 24.0).abs() < 1e-9);
        assert_eq!(precession_period_hours(0.0), None);
        assert_eq!(precession_period_hours(0.5), None);
    }

    proptest! {
        #[test]
        fn rotation_is_odd_in_latitude(
            latitude in -90.0f64..=90.0,
            t in 0.0f64..1.0e4,
            speed in 100.0f64..=10000.0,
        ) {
            let config = PendulumConfig::default();
            let north = precession_angle(&config, t, latitude, speed);
            let south = precession_angle(&config, t, -latitude, speed);
            prop_assert!((north + south).abs() <= 1e-12 * north.abs().max(1.0));
        }

        #[test]
        fn fixed_mode_keeps_radius(
            latitude in -90.0f64..=90.0,
            t in 0.0f64..1.0e5,
            amplitude in 10.0f64..=160.0,
        ) {
            let config = PendulumConfig::default();
            let sample = transform(&config, &PendulumInput {
                elapsed_time_s: t,
                amplitude,
                latitude_deg: latitude,
                speed_multiplier: 3600.0,
                fixed_mode: true,
            });
            prop_assert!((sample.position.length() - amplitude).abs() < 1e-9);
        }
    }
}

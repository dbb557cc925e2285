use std::ops::RangeInclusive;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::{
    physics::{
        precession_period_hours, transform, LocationKind, LocationPreset, PendulumConfig,
        PendulumInput, PendulumSample,
    },
    trail::Trail,
    ConfigError,
};

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const SPEED_RANGE: RangeInclusive<f64> = 100.0..=10000.0;
pub const AMPLITUDE_RANGE: RangeInclusive<f64> = 10.0..=160.0;

/// Simulated seconds added per tick.
pub const DEFAULT_TIME_STEP: f64 = 0.016;

fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    #[default]
    Running,
    Paused,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }
}

/// Reconfiguration requests coming from the control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetLatitude(f64),
    Preset(LocationPreset),
    SetSpeed(f64),
    SetAmplitude(f64),
    ToggleFixedMode,
    TogglePause,
    Reset,
}

/// Where a fresh simulation starts.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InitialState {
    pub latitude_deg: f64,
    pub amplitude_px: f64,
    pub speed_multiplier: f64,
    pub fixed_mode: bool,
}

impl Default for InitialState {
    fn default() -> Self {
        InitialState {
            // Paris, home of the first public demonstration.
            latitude_deg: 48.8566,
            amplitude_px: 130.0,
            speed_multiplier: 3600.0,
            fixed_mode: false,
        }
    }
}

impl InitialState {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LATITUDE_RANGE.contains(&self.latitude_deg) {
            return Err(ConfigError::LatitudeOutOfRange(self.latitude_deg));
        }
        if !AMPLITUDE_RANGE.contains(&self.amplitude_px) {
            return Err(ConfigError::InvalidAmplitude(self.amplitude_px));
        }
        if !SPEED_RANGE.contains(&self.speed_multiplier) {
            return Err(ConfigError::InvalidSpeed(self.speed_multiplier));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub elapsed_time_s: f64,
    pub latitude_deg: f64,
    pub amplitude_px: f64,
    pub speed_multiplier: f64,
    pub fixed_mode: bool,
    pub run_state: RunState,
    /// Output of the last transform, never set directly.
    pub rotation_angle_rad: f64,
}

impl SimulationState {
    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }
}

/// Single owner of the simulation state. Commands and ticks are the only way
/// anything changes.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: PendulumConfig,
    time_step_s: f64,
    state: SimulationState,
    position: DVec2,
    trail: Trail,
}

impl Simulation {
    pub fn new(
        config: PendulumConfig,
        time_step_s: f64,
        initial: InitialState,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        initial.validate()?;
        if !(time_step_s.is_finite() && time_step_s > 0.0) {
            return Err(ConfigError::InvalidTimeStep(time_step_s));
        }

        let mut simulation = Simulation {
            config,
            time_step_s,
            state: SimulationState {
                elapsed_time_s: 0.0,
                latitude_deg: initial.latitude_deg,
                amplitude_px: initial.amplitude_px,
                speed_multiplier: initial.speed_multiplier,
                fixed_mode: initial.fixed_mode,
                run_state: RunState::Running,
                rotation_angle_rad: 0.0,
            },
            position: DVec2::ZERO,
            trail: Trail::default(),
        };
        simulation.recompute();
        Ok(simulation)
    }

    pub fn config(&self) -> &PendulumConfig {
        &self.config
    }

    pub fn time_step(&self) -> f64 {
        self.time_step_s
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn sample(&self) -> PendulumSample {
        PendulumSample {
            position: self.position,
            rotation_angle_rad: self.state.rotation_angle_rad,
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn location(&self) -> LocationKind {
        LocationKind::classify(self.state.latitude_deg, self.state.fixed_mode)
    }

    pub fn precession_period_hours(&self) -> Option<f64> {
        precession_period_hours(self.state.latitude_deg)
    }

    /// Advances one frame. Does nothing while paused.
    pub fn tick(&mut self) {
        if self.state.is_paused() {
            return;
        }

        self.state.elapsed_time_s += self.time_step_s;
        self.recompute();

        if !self.state.fixed_mode {
            self.trail.push(self.position);
        }
    }

    pub fn apply(&mut self, command: Command) {
        debug!(?command, "applying command");

        match command {
            Command::SetLatitude(latitude) => {
                if latitude.is_nan() {
                    warn!("ignoring NaN latitude");
                    return;
                }
                self.state.latitude_deg = clamp_to(latitude, &LATITUDE_RANGE);
                self.reset();
            }
            Command::Preset(preset) => {
                self.state.latitude_deg = preset.latitude_deg();
                self.reset();
            }
            Command::SetSpeed(speed) => {
                if speed.is_nan() {
                    warn!("ignoring NaN speed");
                    return;
                }
                self.state.speed_multiplier = clamp_to(speed, &SPEED_RANGE);
                self.recompute();
            }
            Command::SetAmplitude(amplitude) => {
                if amplitude.is_nan() {
                    warn!("ignoring NaN amplitude");
                    return;
                }
                self.state.amplitude_px = clamp_to(amplitude, &AMPLITUDE_RANGE);
                self.reset();
            }
            Command::ToggleFixedMode => {
                self.state.fixed_mode = !self.state.fixed_mode;
                self.reset();
            }
            Command::TogglePause => {
                self.state.run_state = self.state.run_state.toggled();
            }
            Command::Reset => self.reset(),
        }
    }

    pub fn reset(&mut self) {
        trace!("resetting simulation");

        self.state.elapsed_time_s = 0.0;
        self.trail.clear();
        self.recompute();
    }

    fn input(&self) -> PendulumInput {
        PendulumInput {
            elapsed_time_s: self.state.elapsed_time_s,
            amplitude: self.state.amplitude_px,
            latitude_deg: self.state.latitude_deg,
            speed_multiplier: self.state.speed_multiplier,
            fixed_mode: self.state.fixed_mode,
        }
    }

    // The only place rotation_angle_rad is written.
    fn recompute(&mut self) {
        let sample = transform(&self.config, &self.input());
        self.position = sample.position;
        self.state.rotation_angle_rad = sample.rotation_angle_rad;
    }
}

use std::path::PathBuf;

use thiserror::Error;

pub mod math;
pub mod physics;
pub mod settings;
pub mod simulation;
pub mod trail;

pub use physics::{LocationKind, LocationPreset, PendulumConfig, PendulumSample};
pub use settings::Settings;
pub use simulation::{Command, RunState, Simulation, SimulationState};
pub use trail::Trail;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read settings from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse settings")]
    Parse(#[from] serde_json::Error),
    #[error("pendulum length must be positive, got {0}")]
    InvalidLength(f64),
    #[error("gravity must be positive, got {0}")]
    InvalidGravity(f64),
    #[error("earth angular velocity must be finite, got {0}")]
    InvalidAngularVelocity(f64),
    #[error("time step must be positive, got {0}")]
    InvalidTimeStep(f64),
    #[error("frame rate must be within [1, 1000] Hz, got {0}")]
    InvalidFrameRate(f64),
    #[error("latitude must be within [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),
    #[error("amplitude out of range, got {0}")]
    InvalidAmplitude(f64),
    #[error("speed multiplier out of range, got {0}")]
    InvalidSpeed(f64),
}

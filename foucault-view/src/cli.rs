use std::path::PathBuf;

use clap::Parser;
use foucault_rs::Settings;

#[derive(Parser, Debug)]
#[command(name = "foucault-view", about = "Watch a Foucault pendulum precess")]
pub struct Cli {
    /// JSON settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Starting latitude in degrees, south is negative
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,

    /// Simulated seconds of Earth rotation per real second
    #[arg(long)]
    pub speed: Option<f64>,

    /// Swing amplitude in pixels
    #[arg(long)]
    pub amplitude: Option<f64>,

    /// Pendulum length in metres
    #[arg(long)]
    pub length: Option<f64>,

    /// Start in fixed pendulum mode, `--fixed=false` forces normal mode
    #[arg(long, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub fixed: Option<bool>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Flags win over whatever the settings file said.
    pub fn override_settings(&self, mut settings: Settings) -> Settings {
        if let Some(latitude) = self.latitude {
            settings.initial.latitude_deg = latitude;
        }
        if let Some(speed) = self.speed {
            settings.initial.speed_multiplier = speed;
        }
        if let Some(amplitude) = self.amplitude {
            settings.initial.amplitude_px = amplitude;
        }
        if let Some(length) = self.length {
            settings.pendulum.length_m = length;
        }
        if let Some(fixed) = self.fixed {
            settings.initial.fixed_mode = fixed;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_keeps_settings() {
        let cli = Cli::parse_from(["foucault-view"]);
        assert_eq!(cli.override_settings(Settings::default()), Settings::default());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn flags_override() {
        let cli = Cli::parse_from([
            "foucault-view",
            "--latitude",
            "-33.9",
            "--speed",
            "7200",
            "--length",
            "67",
            "--amplitude",
            "90",
            "--fixed",
        ]);
        let settings = cli.override_settings(Settings::default());
        assert_eq!(settings.initial.latitude_deg, -33.9);
        assert_eq!(settings.initial.speed_multiplier, 7200.0);
        assert_eq!(settings.pendulum.length_m, 67.0);
        assert_eq!(settings.initial.amplitude_px, 90.0);
        assert!(settings.initial.fixed_mode);
    }

    #[test]
    fn fixed_can_be_turned_off() {
        let mut from_file = Settings::default();
        from_file.initial.fixed_mode = true;

        let cli = Cli::parse_from(["foucault-view", "--fixed=false"]);
        assert_eq!(cli.fixed, Some(false));
        assert!(!cli.override_settings(from_file).initial.fixed_mode);

        let cli = Cli::parse_from(["foucault-view"]);
        assert_eq!(cli.fixed, None);
        assert!(cli.override_settings(from_file).initial.fixed_mode);
    }

    #[test]
    fn config_path() {
        let cli = Cli::parse_from(["foucault-view", "-c", "paris.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("paris.json")));
    }
}

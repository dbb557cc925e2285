use anyhow::{anyhow, Context};
use clap::Parser;
use eframe::egui;
use foucault_rs::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod input;
mod pacing;
mod palette;
mod panels;
mod scene;

use app::FoucaultApp;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    let settings = cli.override_settings(settings);
    let simulation = settings.build().context("invalid settings")?;

    info!(
        latitude = settings.initial.latitude_deg,
        speed = settings.initial.speed_multiplier,
        length = settings.pendulum.length_m,
        "starting simulation"
    );
    for line in input::KEY_HELP {
        info!("{line}");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Foucault Pendulum Simulator")
            .with_inner_size([1100.0, 750.0])
            .with_resizable(false),
        ..Default::default()
    };

    let app = FoucaultApp::new(simulation, settings.frame_rate_hz);
    eframe::run_native(
        "Foucault Pendulum Simulator",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))
}

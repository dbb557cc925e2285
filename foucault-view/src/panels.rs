use eframe::egui::{self, Button, RichText, Slider};
use foucault_rs::{
    simulation::{AMPLITUDE_RANGE, LATITUDE_RANGE, SPEED_RANGE},
    Command, LocationKind, LocationPreset, Simulation,
};

use crate::{
    input::{Action, KEY_HELP},
    palette,
};

fn preset_color(preset: LocationPreset) -> egui::Color32 {
    match preset {
        LocationPreset::Equator => palette::DANGER,
        LocationPreset::MidLatitude => palette::ACCENT,
        LocationPreset::NorthPole => palette::SUCCESS,
    }
}

fn colored_button(text: &str, fill: egui::Color32) -> Button<'static> {
    Button::new(RichText::new(text).color(palette::TEXT_PRIMARY)).fill(fill)
}

/// Sliders and buttons. Only returns what the user asked for, the caller
/// decides how to apply it.
pub fn control_panel(ctx: &egui::Context, simulation: &Simulation) -> Vec<Action> {
    let state = simulation.state();
    let mut actions = Vec::new();

    egui::SidePanel::right("controls")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(RichText::new("Controls").color(palette::PRIMARY));
            ui.add_space(8.0);

            let mut latitude = state.latitude_deg;
            let latitude_slider = Slider::new(&mut latitude, LATITUDE_RANGE)
                .text("Latitude")
                .suffix("°")
                .fixed_decimals(1);
            if ui.add(latitude_slider).changed() {
                actions.push(Action::Simulation(Command::SetLatitude(latitude)));
            }

            let mut speed = state.speed_multiplier;
            let speed_slider = Slider::new(&mut speed, SPEED_RANGE)
                .text("Speed")
                .suffix("x")
                .fixed_decimals(0);
            if ui.add(speed_slider).changed() {
                actions.push(Action::Simulation(Command::SetSpeed(speed)));
            }

            let mut amplitude = state.amplitude_px;
            let amplitude_slider = Slider::new(&mut amplitude, AMPLITUDE_RANGE)
                .text("Amplitude")
                .suffix(" px")
                .fixed_decimals(0);
            if ui.add(amplitude_slider).changed() {
                actions.push(Action::Simulation(Command::SetAmplitude(amplitude)));
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                for preset in LocationPreset::ALL {
                    if ui
                        .add(colored_button(preset.label(), preset_color(preset)))
                        .clicked()
                    {
                        actions.push(Action::Simulation(Command::Preset(preset)));
                    }
                }
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let pause_text = if state.is_paused() { "Resume" } else { "Pause" };
                if ui.add(colored_button(pause_text, palette::PRIMARY)).clicked() {
                    actions.push(Action::Simulation(Command::TogglePause));
                }
                if ui.add(colored_button("Reset", palette::SECONDARY)).clicked() {
                    actions.push(Action::Simulation(Command::Reset));
                }
            });

            ui.add_space(8.0);
            if ui
                .add(colored_button("Toggle Info", palette::PRIMARY))
                .clicked()
            {
                actions.push(Action::ToggleInfoPanel);
            }

            let (fixed_text, fixed_color) = if state.fixed_mode {
                ("Normal Mode", palette::SECONDARY)
            } else {
                ("Fixed Pendulum Mode", palette::PRIMARY)
            };
            if ui.add(colored_button(fixed_text, fixed_color)).clicked() {
                actions.push(Action::Simulation(Command::ToggleFixedMode));
            }
        });

    actions
}

pub fn status_lines(simulation: &Simulation) -> Vec<String> {
    let state = simulation.state();
    let degrees = state.rotation_angle_rad.to_degrees();

    match simulation.location() {
        LocationKind::Fixed => vec![
            "Mode: Fixed Pendulum".to_owned(),
            format!("Latitude: {:.1}°", state.latitude_deg),
            format!("Earth Rotation: {degrees:.1}°"),
        ],
        kind => vec![
            format!("Latitude: {:.1}°", state.latitude_deg),
            format!("Rotation: {degrees:.1}°"),
            format!("Period: {}", kind.period_label(state.latitude_deg)),
        ],
    }
}

pub fn info_panel(ctx: &egui::Context, simulation: &Simulation, visible: bool) {
    let location = simulation.location();

    egui::SidePanel::left("info")
        .resizable(false)
        .default_width(300.0)
        .show_animated(ctx, visible, |ui| {
            ui.add_space(8.0);
            ui.heading(
                RichText::new(format!("Location: {}", location.name()))
                    .color(palette::location_color(location)),
            );

            ui.add_space(12.0);
            ui.strong("What's Happening:");
            ui.label(location.description());
            ui.label(location.explanation());

            ui.add_space(12.0);
            ui.strong("Current Status:");
            for line in status_lines(simulation) {
                ui.label(line);
            }

            ui.add_space(12.0);
            ui.strong("Controls:");
            for line in KEY_HELP {
                ui.label(RichText::new(line).small());
            }
        });
}

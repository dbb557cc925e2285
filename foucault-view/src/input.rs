use eframe::egui::{self, Key};
use foucault_rs::{Command, LocationPreset};

/// Anything the user can ask for, whether or not it touches the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Simulation(Command),
    ToggleInfoPanel,
    Exit,
}

pub const KEY_BINDINGS: [(Key, Action); 8] = [
    (Key::Num1, Action::Simulation(Command::Preset(LocationPreset::Equator))),
    (Key::Num2, Action::Simulation(Command::Preset(LocationPreset::MidLatitude))),
    (Key::Num3, Action::Simulation(Command::Preset(LocationPreset::NorthPole))),
    (Key::F, Action::Simulation(Command::ToggleFixedMode)),
    (Key::Space, Action::Simulation(Command::TogglePause)),
    (Key::R, Action::Simulation(Command::Reset)),
    (Key::I, Action::ToggleInfoPanel),
    (Key::Escape, Action::Exit),
];

pub const KEY_HELP: [&str; 8] = [
    "1: Jump to Equator",
    "2: Jump to Mid-Latitude",
    "3: Jump to Pole",
    "F: Toggle Fixed Mode",
    "SPACE: Pause/Resume",
    "R: Reset Simulation",
    "I: Toggle This Panel",
    "ESC: Exit Program",
];

pub fn action_for_key(key: Key) -> Option<Action> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, action)| *action)
}

pub fn pressed_actions(ctx: &egui::Context) -> Vec<Action> {
    // Typing into a focused widget should not fire shortcuts.
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }

    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => action_for_key(*key),
                _ => None,
            })
            .collect()
    })
}

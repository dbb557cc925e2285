use std::time::Instant;

use eframe::egui;
use foucault_rs::Simulation;
use tracing::{debug, info};

use crate::{
    input::{self, Action},
    pacing::FramePacer,
    palette, panels, scene,
};

pub struct FoucaultApp {
    simulation: Simulation,
    pacer: FramePacer,
    show_info: bool,
}

impl FoucaultApp {
    pub fn new(simulation: Simulation, frame_rate_hz: f64) -> Self {
        let pacer = FramePacer::new(frame_rate_hz);
        debug!(period = ?pacer.period(), "frame pacing");

        FoucaultApp {
            simulation,
            pacer,
            show_info: true,
        }
    }

    fn handle(&mut self, ctx: &egui::Context, action: Action) {
        match action {
            Action::Simulation(command) => self.simulation.apply(command),
            Action::ToggleInfoPanel => {
                self.show_info = !self.show_info;
                debug!(visible = self.show_info, "toggled info panel");
            }
            Action::Exit => {
                info!("exit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

impl eframe::App for FoucaultApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in input::pressed_actions(ctx) {
            self.handle(ctx, action);
        }
        for action in panels::control_panel(ctx, &self.simulation) {
            self.handle(ctx, action);
        }

        for _ in 0..self.pacer.advance(Instant::now()) {
            self.simulation.tick();
        }

        panels::info_panel(ctx, &self.simulation, self.show_info);
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(palette::BG_DARK))
            .show(ctx, |ui| scene::show(ui, &self.simulation));

        ctx.request_repaint_after(self.pacer.until_next());
    }
}

use eframe::{
    egui::{self, Align2, FontId, Painter, Sense, Shape},
    epaint::{vec2, Pos2, Stroke, Vec2},
};
use foucault_rs::{math::rescale, Simulation, Trail};
use glam::DVec2;

use crate::palette;

const FLOOR_RADIUS: f32 = 170.0;
const FLOOR_RINGS: [f32; 4] = [45.0, 90.0, 135.0, 170.0];
const COMPASS_REACH: f32 = 0.85;
const COMPASS_BADGE: f32 = 16.0;
// The floor sits a little below the middle to leave room for the title.
const FLOOR_OFFSET: Vec2 = vec2(0.0, 30.0);
const SUSPENSION_HEIGHT: f32 = 130.0;
const BOB_RADIUS: f32 = 11.0;
const INERTIAL_ARROW_LENGTH: f32 = 90.0;

// (label, angle in degrees with north straight up)
const DIRECTIONS: [(&str, f32); 4] = [("N", 90.0), ("E", 0.0), ("S", -90.0), ("W", 180.0)];

// Simulation points are y-down, same as the screen.
fn to_screen(center: Pos2, point: DVec2) -> Pos2 {
    center + vec2(point.x as f32, point.y as f32)
}

pub fn show(ui: &mut egui::Ui, simulation: &Simulation) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
    let rect = response.rect;
    let center = rect.center() + FLOOR_OFFSET;

    let state = simulation.state();
    let sample = simulation.sample();

    painter.rect_filled(rect, 0.0, palette::BG_DARK);
    draw_title(&painter, rect);
    draw_floor(&painter, center, sample.rotation_angle_rad as f32);
    draw_inertial_reference(&painter, center);

    if !state.fixed_mode {
        draw_trail(&painter, center, simulation.trail());
    }
    draw_pendulum(&painter, center, to_screen(center, sample.position), state.fixed_mode);
}

fn draw_title(painter: &Painter, rect: egui::Rect) {
    painter.text(
        rect.center_top() + vec2(0.0, 32.0),
        Align2::CENTER_CENTER,
        "Foucault Pendulum",
        FontId::proportional(34.0),
        palette::PRIMARY,
    );
    painter.text(
        rect.center_top() + vec2(0.0, 60.0),
        Align2::CENTER_CENTER,
        "Earth's Rotation Revealed",
        FontId::proportional(16.0),
        palette::TEXT_SECONDARY,
    );
}

fn draw_floor(painter: &Painter, center: Pos2, rotation_angle: f32) {
    painter.circle(
        center,
        FLOOR_RADIUS,
        palette::FLOOR,
        Stroke::new(2.0, palette::BORDER),
    );
    for radius in FLOOR_RINGS {
        painter.circle_stroke(center, radius, Stroke::new(1.0, palette::BORDER));
    }

    // The compass turns with the Earth, opposite to the precession angle.
    for (label, degrees) in DIRECTIONS {
        let angle = degrees.to_radians() - rotation_angle;
        let reach = FLOOR_RADIUS * COMPASS_REACH;
        let end = center + vec2(reach * angle.cos(), -reach * angle.sin());

        painter.line_segment([center, end], Stroke::new(2.0, palette::COMPASS));
        painter.circle(
            end,
            COMPASS_BADGE,
            palette::BG_MEDIUM,
            Stroke::new(2.0, palette::COMPASS),
        );
        painter.text(
            end,
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(18.0),
            palette::TEXT_PRIMARY,
        );
    }

    painter.circle(
        center,
        7.0,
        palette::ACCENT,
        Stroke::new(2.0, palette::TEXT_PRIMARY),
    );
}

fn draw_inertial_reference(painter: &Painter, center: Pos2) {
    let start = center - Vec2::splat(FLOOR_RADIUS + 70.0);
    let end = start + vec2(INERTIAL_ARROW_LENGTH, 0.0);

    painter.line_segment([start, end], Stroke::new(4.0, palette::INERTIAL_REF));
    painter.add(Shape::convex_polygon(
        vec![end, end + vec2(-14.0, -7.0), end + vec2(-14.0, 7.0)],
        palette::INERTIAL_REF,
        Stroke::NONE,
    ));
    painter.text(
        start - vec2(0.0, 12.0),
        Align2::LEFT_BOTTOM,
        "Inertial Frame",
        FontId::proportional(16.0),
        palette::INERTIAL_REF,
    );
}

// Older segments are thinner and bluer, newer ones thicker and more purple.
fn draw_trail(painter: &Painter, center: Pos2, trail: &Trail) {
    let points: Vec<Pos2> = trail.iter().map(|p| to_screen(center, p)).collect();
    let count = points.len() as f64;

    for (i, segment) in points.windows(2).enumerate() {
        let alpha = rescale((i + 1) as f64, 0.0, count) as f32;
        let width = (1.0 + alpha * 3.0).floor();
        let color = palette::mix(palette::TRAIL_START, palette::TRAIL_END, alpha);

        painter.line_segment([segment[0], segment[1]], Stroke::new(width, color));
    }
}

fn draw_pendulum(painter: &Painter, center: Pos2, bob: Pos2, fixed_mode: bool) {
    painter.line_segment(
        [center - vec2(0.0, SUSPENSION_HEIGHT), bob],
        Stroke::new(3.0, palette::TEXT_SECONDARY),
    );

    if fixed_mode {
        for ring in 1..=4 {
            let fade = 1.0 - ring as f32 / 5.0;
            painter.circle_stroke(
                bob,
                BOB_RADIUS + ring as f32,
                Stroke::new(1.0, palette::SECONDARY.gamma_multiply(fade)),
            );
        }
    }

    let fill = if fixed_mode {
        palette::SECONDARY
    } else {
        palette::PENDULUM
    };
    painter.circle(
        bob,
        BOB_RADIUS,
        fill,
        Stroke::new(2.0, palette::TEXT_PRIMARY),
    );
}

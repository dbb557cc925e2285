use eframe::epaint::Color32;
use foucault_rs::LocationKind;

pub const BG_DARK: Color32 = Color32::from_rgb(15, 23, 42);
pub const BG_MEDIUM: Color32 = Color32::from_rgb(30, 41, 59);
pub const BORDER: Color32 = Color32::from_rgb(71, 85, 105);

pub const PRIMARY: Color32 = Color32::from_rgb(59, 130, 246);
pub const SECONDARY: Color32 = Color32::from_rgb(168, 85, 247);
pub const ACCENT: Color32 = Color32::from_rgb(234, 179, 8);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const DANGER: Color32 = Color32::from_rgb(239, 68, 68);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(248, 250, 252);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(203, 213, 225);

pub const PENDULUM: Color32 = DANGER;
pub const TRAIL_START: Color32 = PRIMARY;
pub const TRAIL_END: Color32 = SECONDARY;
pub const FLOOR: Color32 = Color32::from_rgb(51, 65, 85);
pub const COMPASS: Color32 = Color32::from_rgb(148, 163, 184);
pub const INERTIAL_REF: Color32 = ACCENT;

pub fn location_color(kind: LocationKind) -> Color32 {
    match kind {
        LocationKind::Fixed => SECONDARY,
        LocationKind::Equator => DANGER,
        LocationKind::Pole => SUCCESS,
        LocationKind::MidLatitude => ACCENT,
    }
}

/// Linear blend between two opaque colors, `t` in `[0, 1]`.
pub fn mix(from: Color32, to: Color32, t: f32) -> Color32 {
    let channel = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_endpoints() {
        assert_eq!(mix(TRAIL_START, TRAIL_END, 0.0), TRAIL_START);
        assert_eq!(mix(TRAIL_START, TRAIL_END, 1.0), TRAIL_END);
        assert_eq!(
            mix(Color32::BLACK, Color32::from_rgb(200, 100, 50), 0.5),
            Color32::from_rgb(100, 50, 25)
        );
    }
}

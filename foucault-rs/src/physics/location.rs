use super::precession_period_hours;

const EQUATOR_BAND_DEG: f64 = 5.0;
const POLE_BAND_DEG: f64 = 85.0;

/// How the current setup should be described to the viewer. Nothing numeric
/// depends on this, it only picks display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Fixed,
    Equator,
    Pole,
    MidLatitude,
}

impl LocationKind {
    pub fn classify(latitude_deg: f64, fixed_mode: bool) -> Self {
        if fixed_mode {
            LocationKind::Fixed
        } else if latitude_deg.abs() < EQUATOR_BAND_DEG {
            LocationKind::Equator
        } else if latitude_deg.abs() > POLE_BAND_DEG {
            LocationKind::Pole
        } else {
            LocationKind::MidLatitude
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LocationKind::Fixed => "FIXED PENDULUM",
            LocationKind::Equator => "EQUATOR",
            LocationKind::Pole => "POLE",
            LocationKind::MidLatitude => "MID-LATITUDE",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            LocationKind::Fixed => "Earth rotates beneath pendulum",
            LocationKind::Equator => "No visible rotation",
            LocationKind::Pole => "Full rotation visible",
            LocationKind::MidLatitude => "Partial rotation visible",
        }
    }

    pub fn explanation(self) -> &'static str {
        match self {
            LocationKind::Fixed => "Pendulum stays fixed while Earth rotates",
            LocationKind::Equator => "Pendulum plane stays aligned with Earth",
            LocationKind::Pole => "Complete 360° rotation in 24 hours",
            LocationKind::MidLatitude => "Rotation rate depends on latitude",
        }
    }

    // Equator and pole labels are fixed even though the latitude can sit
    // anywhere inside their bands.
    pub fn period_label(self, latitude_deg: f64) -> String {
        match self {
            LocationKind::Fixed => "N/A".to_owned(),
            LocationKind::Equator => "Infinite".to_owned(),
            LocationKind::Pole => "24.0 hrs".to_owned(),
            LocationKind::MidLatitude => match precession_period_hours(latitude_deg) {
                Some(hours) => format!("{hours:.1} hrs"),
                None => "Infinite".to_owned(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationPreset {
    Equator,
    MidLatitude,
    NorthPole,
}

impl LocationPreset {
    pub const ALL: [LocationPreset; 3] = [
        LocationPreset::Equator,
        LocationPreset::MidLatitude,
        LocationPreset::NorthPole,
    ];

    pub fn latitude_deg(self) -> f64 {
        match self {
            LocationPreset::Equator => 0.0,
            LocationPreset::MidLatitude => 45.0,
            LocationPreset::NorthPole => 90.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LocationPreset::Equator => "Equator",
            LocationPreset::MidLatitude => "Mid-Lat",
            LocationPreset::NorthPole => "Pole",
        }
    }
}

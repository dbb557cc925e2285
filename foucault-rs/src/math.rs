use glam::DVec2;

/// Counter-clockwise rotation of `point` about the origin by `angle` radians.
pub fn rotate(point: DVec2, angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    DVec2::new(
        point.x * cos - point.y * sin,
        point.x * sin + point.y * cos,
    )
}

/// Rescales `t` from `[lower, upper]` to `[0, 1]`
pub fn rescale(t: f64, lower: f64, upper: f64) -> f64 {
    (t - lower) / (upper - lower)
}

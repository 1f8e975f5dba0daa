use super::tolerance::EPS_MM;

/// Angle between an A-frame rail and the centreline, given the half width at
/// the body front and the physical drawbar length. Zero for a degenerate
/// (zero-length) drawbar.
pub fn rail_angle_rad(half_width_mm: f64, physical_drawbar_mm: f64) -> f64 {
    if physical_drawbar_mm <= EPS_MM {
        return 0.0;
    }
    (half_width_mm / physical_drawbar_mm).atan()
}

/// Cut length of one A-frame rail: the hypotenuse from a body front corner
/// to the drawbar tip on the centreline.
pub fn rail_length_mm(half_width_mm: f64, physical_drawbar_mm: f64) -> f64 {
    if physical_drawbar_mm <= EPS_MM && half_width_mm <= EPS_MM {
        return 0.0;
    }
    physical_drawbar_mm.hypot(half_width_mm)
}

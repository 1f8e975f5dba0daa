// Centralized tolerances and numeric guards

pub const EPS_MM: f64 = 1e-6;             // length coincidence threshold
pub const EPS_KG: f64 = 1e-9;             // mass balance denominator guard
pub const EPS_REL: f64 = 1e-9;            // relative compare slack for tests/invariants

#[inline] pub fn near_zero(x: f64, eps: f64) -> bool { x.abs() <= eps }
#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

/// Clamp a user-supplied dimension: negatives and non-finite values fold to 0.
#[inline]
pub fn non_negative(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 { x } else { 0.0 }
}

//! Core of the light-trailer designer: turns a validated input snapshot
//! into a scaled, dimension-labelled plan-view drawing plan. Pure and
//! synchronous; the canvas shell owns input widgets and painting and calls
//! back in here on every change.

pub mod constants;
pub mod model;
pub mod plan;
pub mod solver;
pub mod geometry {
    pub mod frame;
    pub mod math;
    pub mod tolerance;
}

pub use model::{BodyType, ConfigurationSnapshot, RawConfig};
pub use plan::{DrawingPlan, Primitive};
pub use solver::{AxlePlacement, LoadAnalysis};

use geometry::frame::Frame;

/// The one entry point the shell needs: snapshot + scale factor in,
/// ordered drawing plan out. Recomputes everything; holds no state.
pub fn compute_drawing_plan(
    snapshot: &ConfigurationSnapshot,
    scale_factor: f64,
) -> DrawingPlan {
    let frame = Frame::derive(snapshot);
    let analysis = solver::solve(snapshot);
    plan::assemble(snapshot, &frame, &analysis, scale_factor)
}

/// Same pipeline with an explicit tongue-load fraction; the production
/// entry point pins it to `constants::TARGET_TONGUE_LOAD_FRACTION`.
pub fn compute_drawing_plan_with_fraction(
    snapshot: &ConfigurationSnapshot,
    scale_factor: f64,
    fraction: f64,
) -> DrawingPlan {
    let frame = Frame::derive(snapshot);
    let analysis = solver::solve_with_fraction(snapshot, fraction);
    plan::assemble(snapshot, &frame, &analysis, scale_factor)
}

//! Renderer-agnostic drawing plan. Assembly multiplies model millimetres by
//! the scale factor once; dimension and note labels keep the literal
//! model-space values, which is the whole point of a dimensioned sketch
//! that is not to scale.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CENTRELINE_OVERHANG_MM, COUPLER_BODY_WIDTH_MM, DEFAULT_SCALE_FACTOR,
    DIMENSION_COLUMN_FAR_MM, DIMENSION_COLUMN_NEAR_MM, DIMENSION_OFFSET_MM, DIMENSION_TICK_MM,
    NOTE_LINE_STEP_MM, TOWBALL_MARKER_DIAMETER_MM,
};
use crate::geometry::frame::{Frame, RectMm, SegMm};
use crate::model::ConfigurationSnapshot;
use crate::solver::{AxlePlacement, LoadAnalysis};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        dashed: bool,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Arc {
        cx: f64,
        cy: f64,
        r: f64,
        start_rad: f64,
        end_rad: f64,
    },
    /// Dimension call-out: two anchors in draw space, extension tick half
    /// length, and the literal measurement text.
    Dimension {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        tick: f64,
        label: String,
        vertical: bool,
    },
    Note {
        x: f64,
        y: f64,
        text: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawingPlan {
    pub scale_factor: f64,
    pub primitives: Vec<Primitive>,
}

impl DrawingPlan {
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn fmt_quantity(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.1}", v)
    }
}

pub fn fmt_mm(v: f64) -> String {
    format!("{} mm", fmt_quantity(v))
}

pub fn fmt_kg(v: f64) -> String {
    format!("{} kg", fmt_quantity(v))
}

struct Emitter {
    s: f64,
    out: Vec<Primitive>,
}

impl Emitter {
    fn rect(&mut self, r: RectMm) {
        self.out.push(Primitive::Rect {
            x: r.x * self.s,
            y: r.y * self.s,
            w: r.w * self.s,
            h: r.h * self.s,
        });
    }

    fn line(&mut self, seg: SegMm, dashed: bool) {
        self.out.push(Primitive::Line {
            x1: seg.x1 * self.s,
            y1: seg.y1 * self.s,
            x2: seg.x2 * self.s,
            y2: seg.y2 * self.s,
            dashed,
        });
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64) {
        self.out.push(Primitive::Circle {
            cx: cx * self.s,
            cy: cy * self.s,
            r: r * self.s,
        });
    }

    fn arc(&mut self, cx: f64, cy: f64, r: f64, start_rad: f64, end_rad: f64) {
        self.out.push(Primitive::Arc {
            cx: cx * self.s,
            cy: cy * self.s,
            r: r * self.s,
            start_rad,
            end_rad,
        });
    }

    fn dimension(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, label: String, vertical: bool) {
        self.out.push(Primitive::Dimension {
            x1: x1 * self.s,
            y1: y1 * self.s,
            x2: x2 * self.s,
            y2: y2 * self.s,
            tick: DIMENSION_TICK_MM * self.s,
            label,
            vertical,
        });
    }

    fn note(&mut self, x: f64, y: f64, text: String) {
        self.out.push(Primitive::Note {
            x: x * self.s,
            y: y * self.s,
            text,
        });
    }
}

/// Merge geometry and load analysis into the ordered primitive list the
/// shell walks to paint the canvas.
pub fn assemble(
    snapshot: &ConfigurationSnapshot,
    frame: &Frame,
    analysis: &LoadAnalysis,
    scale_factor: f64,
) -> DrawingPlan {
    let s = if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        DEFAULT_SCALE_FACTOR
    };
    let mut e = Emitter { s, out: Vec::new() };

    // centreline first so everything else paints over it
    e.line(frame.centreline, true);

    e.rect(frame.body_outer);
    e.rect(frame.body_inner);
    for rail in frame.rails {
        e.line(rail, false);
    }

    // coupling: housing, towball centre marker, socket mouth
    e.rect(frame.coupler_body);
    e.circle(frame.coupling.x, frame.coupling.y, TOWBALL_MARKER_DIAMETER_MM / 2.0);
    e.arc(
        frame.coupling.x,
        frame.coupling.y,
        COUPLER_BODY_WIDTH_MM / 2.0,
        std::f64::consts::FRAC_PI_2,
        3.0 * std::f64::consts::FRAC_PI_2,
    );

    if let Some(toolbox) = frame.toolbox {
        e.rect(toolbox);
    }

    let axle_centres: &[f64] = match &analysis.placement {
        AxlePlacement::Resolved { axle_centres_mm, .. } => axle_centres_mm,
        AxlePlacement::Undefined => &[],
    };
    for guard in frame.guard_rects(snapshot, axle_centres) {
        e.rect(guard);
    }
    for wheel in frame.wheel_rects(axle_centres) {
        e.rect(wheel);
    }
    for axle in frame.axle_lines(snapshot, axle_centres) {
        e.line(axle, false);
    }

    emit_dimensions(&mut e, snapshot, frame, analysis);
    emit_notes(&mut e, snapshot, frame, analysis);

    DrawingPlan {
        scale_factor: s,
        primitives: e.out,
    }
}

fn emit_dimensions(
    e: &mut Emitter,
    snapshot: &ConfigurationSnapshot,
    frame: &Frame,
    analysis: &LoadAnalysis,
) {
    let guard = snapshot.guard_width_mm;
    let dim_top_y = -(frame.half_body_width + guard + DIMENSION_OFFSET_MM);
    let dim_bottom_y = frame.half_body_width + guard + DIMENSION_OFFSET_MM;
    let half_drawbar = snapshot.drawbar_width_mm / 2.0;
    let half_total = snapshot.total_width_mm() / 2.0;

    // drawbar measurement, from the coupling reference to the body front
    e.dimension(
        0.0,
        dim_top_y,
        frame.body_front_x,
        dim_top_y,
        fmt_mm(snapshot.measured_drawbar_length_mm),
        false,
    );
    e.dimension(
        frame.body_front_x,
        dim_top_y,
        frame.body_rear_x,
        dim_top_y,
        fmt_mm(snapshot.body_length_mm),
        false,
    );
    e.dimension(
        frame.body_rear_x + DIMENSION_COLUMN_NEAR_MM,
        -half_drawbar,
        frame.body_rear_x + DIMENSION_COLUMN_NEAR_MM,
        half_drawbar,
        fmt_mm(snapshot.drawbar_width_mm),
        true,
    );
    e.dimension(
        frame.body_rear_x + DIMENSION_COLUMN_FAR_MM,
        -frame.half_body_width,
        frame.body_rear_x + DIMENSION_COLUMN_FAR_MM,
        frame.half_body_width,
        fmt_mm(snapshot.body_width_mm),
        true,
    );
    e.dimension(
        frame.body_rear_x + DIMENSION_COLUMN_FAR_MM + DIMENSION_COLUMN_NEAR_MM,
        -half_total,
        frame.body_rear_x + DIMENSION_COLUMN_FAR_MM + DIMENSION_COLUMN_NEAR_MM,
        half_total,
        fmt_mm(snapshot.total_width_mm()),
        true,
    );

    if let Some(centre) = analysis.placement.centre_mm() {
        e.dimension(0.0, dim_bottom_y, centre, dim_bottom_y, fmt_mm(centre), false);
    }
}

fn emit_notes(
    e: &mut Emitter,
    snapshot: &ConfigurationSnapshot,
    frame: &Frame,
    analysis: &LoadAnalysis,
) {
    let mut lines = vec![
        "Light Trailer – Plan View (not to scale)".to_string(),
        format!("ATM: {}", fmt_kg(snapshot.atm_kg)),
        format!(
            "Drawbar measurement: {} (from 130 mm ahead of drawbar to trailer front)",
            fmt_mm(snapshot.measured_drawbar_length_mm)
        ),
        format!(
            "Physical drawbar (approx.): {}",
            fmt_mm(snapshot.physical_drawbar_length_mm())
        ),
        format!("Drawbar main member: {}", fmt_mm(frame.rail_length_mm)),
        format!("Axles: {}", analysis.axle_count),
        format!("Frame mass (est.): {}", fmt_kg(analysis.frame_mass_kg)),
        format!("Payload capacity (est.): {}", fmt_kg(analysis.capacity_kg)),
        format!("Tongue load target: {}", fmt_kg(analysis.tongue_load_kg)),
    ];
    match analysis.placement.centre_mm() {
        Some(centre) => lines.push(format!("Axle centre: {} behind coupling", fmt_mm(centre))),
        None => lines.push("Axle position undefined (tongue load equals ATM)".to_string()),
    }

    let guard = snapshot.guard_width_mm;
    let block_top = -(frame.half_body_width
        + guard
        + DIMENSION_OFFSET_MM
        + NOTE_LINE_STEP_MM * (lines.len() as f64 + 1.0));
    for (i, text) in lines.into_iter().enumerate() {
        e.note(
            -CENTRELINE_OVERHANG_MM,
            block_top + NOTE_LINE_STEP_MM * i as f64,
            text,
        );
    }
}

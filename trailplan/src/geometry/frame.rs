//! Plan-view geometry of the trailer in one model frame: origin at the
//! coupling reference point (towball centre), x in mm rearward, y in mm
//! lateral with the centreline at y = 0. Scaling to draw units happens
//! later, in plan assembly.

use serde::{Deserialize, Serialize};

use super::math::{rail_angle_rad, rail_length_mm};
use crate::constants::{
    CENTRELINE_OVERHANG_MM, COUPLER_BODY_LENGTH_MM, COUPLER_BODY_WIDTH_MM,
    COUPLER_REFERENCE_OFFSET_MM, GUARD_MARGIN_MM, TOOLBOX_DEPTH_MM, TYRE_DIAMETER_MM,
    TYRE_WIDTH_MM, WALL_INSET_MM,
};
use crate::model::ConfigurationSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointMm {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle; x/y is the front/left corner (smallest
/// coordinates), w runs rearward, h laterally.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectMm {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectMm {
    /// Shrink by a uniform wall inset; collapses to a zero-size rectangle
    /// at the centre instead of inverting.
    pub fn inset(&self, by: f64) -> RectMm {
        let w = (self.w - 2.0 * by).max(0.0);
        let h = (self.h - 2.0 * by).max(0.0);
        RectMm {
            x: self.x + (self.w - w) / 2.0,
            y: self.y + (self.h - h) / 2.0,
            w,
            h,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SegMm {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Every fixed shape of the sketch that does not depend on the axle
/// placement. Derived in full from a snapshot; no partial updates.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub coupling: PointMm,
    pub drawbar_tip: PointMm,
    pub body_front_x: f64,
    pub body_rear_x: f64,
    pub half_body_width: f64,
    pub body_outer: RectMm,
    pub body_inner: RectMm,
    /// Outer and inner line of each A-frame rail, four segments total.
    pub rails: [SegMm; 4],
    pub coupler_body: RectMm,
    pub toolbox: Option<RectMm>,
    pub centreline: SegMm,
    pub rail_angle_rad: f64,
    pub rail_length_mm: f64,
}

impl Frame {
    pub fn derive(snapshot: &ConfigurationSnapshot) -> Frame {
        let measured = snapshot.measured_drawbar_length_mm;
        let body_front_x = measured;
        let body_rear_x = measured + snapshot.body_length_mm;
        let half_body_width = snapshot.body_width_mm / 2.0;
        let half_drawbar_width = snapshot.drawbar_width_mm / 2.0;

        let body_outer = RectMm {
            x: body_front_x,
            y: -half_body_width,
            w: snapshot.body_length_mm,
            h: snapshot.body_width_mm,
        };

        // Rails converge on the drawbar tip, 130 mm behind the reference
        // point. The inner lines run one wall inset in and land just short
        // of the apex.
        let tip_x = COUPLER_REFERENCE_OFFSET_MM.min(measured);
        let inner_reach = (half_drawbar_width - WALL_INSET_MM).max(0.0);
        let rails = [
            SegMm { x1: body_front_x, y1: -half_drawbar_width, x2: tip_x, y2: 0.0 },
            SegMm { x1: body_front_x, y1: -inner_reach, x2: tip_x + WALL_INSET_MM, y2: 0.0 },
            SegMm { x1: body_front_x, y1: half_drawbar_width, x2: tip_x, y2: 0.0 },
            SegMm { x1: body_front_x, y1: inner_reach, x2: tip_x + WALL_INSET_MM, y2: 0.0 },
        ];

        let toolbox = if snapshot.has_toolbox {
            let depth = TOOLBOX_DEPTH_MM.min(measured);
            Some(RectMm {
                x: body_front_x - depth,
                y: -half_drawbar_width,
                w: depth,
                h: snapshot.drawbar_width_mm,
            })
        } else {
            None
        };

        Frame {
            coupling: PointMm { x: 0.0, y: 0.0 },
            drawbar_tip: PointMm { x: tip_x, y: 0.0 },
            body_front_x,
            body_rear_x,
            half_body_width,
            body_outer,
            body_inner: body_outer.inset(WALL_INSET_MM),
            rails,
            coupler_body: RectMm {
                x: 0.0,
                y: -COUPLER_BODY_WIDTH_MM / 2.0,
                w: COUPLER_BODY_LENGTH_MM,
                h: COUPLER_BODY_WIDTH_MM,
            },
            toolbox,
            centreline: SegMm {
                x1: -CENTRELINE_OVERHANG_MM,
                y1: 0.0,
                x2: body_rear_x + CENTRELINE_OVERHANG_MM,
                y2: 0.0,
            },
            rail_angle_rad: rail_angle_rad(
                half_drawbar_width,
                snapshot.physical_drawbar_length_mm(),
            ),
            rail_length_mm: rail_length_mm(
                half_drawbar_width,
                snapshot.physical_drawbar_length_mm(),
            ),
        }
    }

    /// Wheel guard footprints straddling the axle group, one rectangle per
    /// side, outboard of the body width envelope. Empty when no guard width
    /// is modelled.
    pub fn guard_rects(
        &self,
        snapshot: &ConfigurationSnapshot,
        axle_centres_mm: &[f64],
    ) -> Vec<RectMm> {
        if snapshot.guard_width_mm == 0.0 || axle_centres_mm.is_empty() {
            return Vec::new();
        }
        let first = axle_centres_mm[0];
        let last = axle_centres_mm[axle_centres_mm.len() - 1];
        let length = (last - first) + TYRE_DIAMETER_MM + GUARD_MARGIN_MM;
        let x = (first + last) / 2.0 - length / 2.0;
        vec![
            RectMm {
                x,
                y: -(self.half_body_width + snapshot.guard_width_mm),
                w: length,
                h: snapshot.guard_width_mm,
            },
            RectMm {
                x,
                y: self.half_body_width,
                w: length,
                h: snapshot.guard_width_mm,
            },
        ]
    }

    /// Tyre footprints, one per axle per side, sitting outboard of the body.
    pub fn wheel_rects(&self, axle_centres_mm: &[f64]) -> Vec<RectMm> {
        let mut rects = Vec::with_capacity(axle_centres_mm.len() * 2);
        for &centre in axle_centres_mm {
            let x = centre - TYRE_DIAMETER_MM / 2.0;
            rects.push(RectMm {
                x,
                y: -(self.half_body_width + TYRE_WIDTH_MM),
                w: TYRE_DIAMETER_MM,
                h: TYRE_WIDTH_MM,
            });
            rects.push(RectMm {
                x,
                y: self.half_body_width,
                w: TYRE_DIAMETER_MM,
                h: TYRE_WIDTH_MM,
            });
        }
        rects
    }

    /// One cross line per axle, spanning the trailer plus the tyres.
    pub fn axle_lines(
        &self,
        snapshot: &ConfigurationSnapshot,
        axle_centres_mm: &[f64],
    ) -> Vec<SegMm> {
        let half_span = self.half_body_width + snapshot.guard_width_mm.max(TYRE_WIDTH_MM);
        axle_centres_mm
            .iter()
            .map(|&x| SegMm {
                x1: x,
                y1: -half_span,
                x2: x,
                y2: half_span,
            })
            .collect()
    }
}

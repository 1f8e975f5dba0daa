//! Axle-count and axle-position solver.
//!
//! A static-moment balance places the axle group so that the coupling
//! carries `TARGET_TONGUE_LOAD_FRACTION` of the loaded mass. Summing
//! moments about the coupling reference and requiring the coupling
//! reaction to equal the target tongue load gives a single linear
//! equation in the axle position `A`:
//!
//!   A = (frame*com + toolbox*toolbox_pos + capacity*payload_pos)
//!       / (atm - tongue_load)

use serde::{Deserialize, Serialize};

use crate::constants::{
    FRAME_MASS_PER_MM, MASS_PER_AXLE_KG, SINGLE_AXLE_ATM_LIMIT_KG, TANDEM_HALF_SPACING_MM,
    TARGET_TONGUE_LOAD_FRACTION, TOOLBOX_MASS_KG, TOOLBOX_OFFSET_FROM_FRONT_MM,
};
use crate::geometry::tolerance::{near_zero, EPS_KG};
use crate::model::ConfigurationSnapshot;

/// Where the axle group landed. `Undefined` is the degenerate case where
/// the balance denominator vanishes; it must surface as data, never as a
/// non-finite position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AxlePlacement {
    Resolved {
        /// Centre of the axle group, mm rearward of the coupling reference.
        centre_mm: f64,
        /// Individual axle centres; one entry per axle.
        axle_centres_mm: Vec<f64>,
    },
    Undefined,
}

impl AxlePlacement {
    pub fn centre_mm(&self) -> Option<f64> {
        match self {
            AxlePlacement::Resolved { centre_mm, .. } => Some(*centre_mm),
            AxlePlacement::Undefined => None,
        }
    }
}

/// Mass breakdown and axle placement for one snapshot. Recomputed from
/// scratch on every call; nothing here persists between renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoadAnalysis {
    pub axle_count: u32,
    pub frame_mass_kg: f64,
    pub toolbox_mass_kg: f64,
    /// Payload mass left over once frame and fittings are subtracted from
    /// ATM. Can go negative when the inputs describe an overweight frame.
    pub capacity_kg: f64,
    pub tongue_load_kg: f64,
    pub placement: AxlePlacement,
}

/// One axle up to the single-axle ATM limit, tandem above it. Strict
/// threshold; no hysteresis band.
pub fn axle_count_for(atm_kg: f64) -> u32 {
    if atm_kg <= SINGLE_AXLE_ATM_LIMIT_KG {
        1
    } else {
        2
    }
}

pub fn solve(snapshot: &ConfigurationSnapshot) -> LoadAnalysis {
    solve_with_fraction(snapshot, TARGET_TONGUE_LOAD_FRACTION)
}

/// Same balance with an explicit tongue-load fraction. The production
/// fraction is 0.10; the parameter exists so the degenerate denominator
/// (fraction 1.0) stays reachable in tests.
pub fn solve_with_fraction(snapshot: &ConfigurationSnapshot, fraction: f64) -> LoadAnalysis {
    let atm = snapshot.atm_kg;
    let measured = snapshot.measured_drawbar_length_mm;
    let body = snapshot.body_length_mm;

    let axle_count = axle_count_for(atm);
    let frame_mass_kg = (body + measured) * FRAME_MASS_PER_MM
        + axle_count as f64 * MASS_PER_AXLE_KG
        + snapshot.body_type_base_mass_kg;

    let toolbox_mass_kg = if snapshot.has_toolbox { TOOLBOX_MASS_KG } else { 0.0 };
    let toolbox_position_mm = if snapshot.has_toolbox {
        measured - TOOLBOX_OFFSET_FROM_FRONT_MM
    } else {
        0.0
    };

    let capacity_kg = atm - toolbox_mass_kg - frame_mass_kg;
    let payload_position_mm = measured + body / 2.0;
    let tongue_load_kg = atm * fraction;

    // Frame centroid: chassis steel runs from the reference point to the
    // body rear, so its mass centre sits halfway along that run.
    let centre_of_mass_mm = (measured + body) / 2.0;

    let denominator = atm - tongue_load_kg;
    let placement = if near_zero(denominator, EPS_KG) {
        AxlePlacement::Undefined
    } else {
        let centre_mm = (frame_mass_kg * centre_of_mass_mm
            + toolbox_mass_kg * toolbox_position_mm
            + capacity_kg * payload_position_mm)
            / denominator;
        let axle_centres_mm = if axle_count == 2 {
            vec![
                centre_mm - TANDEM_HALF_SPACING_MM,
                centre_mm + TANDEM_HALF_SPACING_MM,
            ]
        } else {
            vec![centre_mm]
        };
        AxlePlacement::Resolved {
            centre_mm,
            axle_centres_mm,
        }
    };

    LoadAnalysis {
        axle_count,
        frame_mass_kg,
        toolbox_mass_kg,
        capacity_kg,
        tongue_load_kg,
        placement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axle_count_threshold_is_strict() {
        assert_eq!(axle_count_for(0.0), 1);
        assert_eq!(axle_count_for(2000.0), 1);
        assert_eq!(axle_count_for(2000.0001), 2);
        assert_eq!(axle_count_for(3500.0), 2);
    }

    #[test]
    fn zero_atm_is_degenerate() {
        let s = ConfigurationSnapshot::new(0.0, 1500.0, 1800.0, 3000.0, 2000.0, 0.0, 180.0, false);
        let a = solve(&s);
        assert_eq!(a.placement, AxlePlacement::Undefined);
    }
}

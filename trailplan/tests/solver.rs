use trailplan::constants::{
    FRAME_MASS_PER_MM, MASS_PER_AXLE_KG, TANDEM_HALF_SPACING_MM, TOOLBOX_MASS_KG,
    TOOLBOX_OFFSET_FROM_FRONT_MM,
};
use trailplan::solver::{axle_count_for, solve, solve_with_fraction};
use trailplan::{AxlePlacement, ConfigurationSnapshot};

fn reference_snapshot() -> ConfigurationSnapshot {
    ConfigurationSnapshot::new(2200.0, 1500.0, 1800.0, 3000.0, 2000.0, 0.0, 50.0, false)
}

#[test]
fn axle_count_rule_over_the_whole_range() {
    for atm in (0..4000).step_by(25) {
        let atm = atm as f64;
        let expect = if atm <= 2000.0 { 1 } else { 2 };
        assert_eq!(axle_count_for(atm), expect, "atm {}", atm);
    }
}

#[test]
fn mass_breakdown_matches_the_linear_model() {
    let a = solve(&reference_snapshot());
    // (3000 + 1500) * 0.022 + 2 * 150 + 50
    let expected_frame = 4500.0 * FRAME_MASS_PER_MM + 2.0 * MASS_PER_AXLE_KG + 50.0;
    assert!((a.frame_mass_kg - expected_frame).abs() < 1e-9);
    assert!((a.frame_mass_kg - 449.0).abs() < 1e-9);
    assert!((a.capacity_kg - (2200.0 - 449.0)).abs() < 1e-9);
    assert!((a.tongue_load_kg - 220.0).abs() < 1e-9);
}

#[test]
fn axle_position_satisfies_the_moment_balance() {
    let s = reference_snapshot();
    let a = solve(&s);
    let centre = a.placement.centre_mm().expect("resolved");

    let com = (s.measured_drawbar_length_mm + s.body_length_mm) / 2.0;
    let payload_pos = s.measured_drawbar_length_mm + s.body_length_mm / 2.0;
    let lhs = a.frame_mass_kg * com + a.capacity_kg * payload_pos;
    let rhs = centre * (s.atm_kg - a.tongue_load_kg);
    assert!((lhs - rhs).abs() <= 1e-6 * rhs.abs().max(1.0));
}

#[test]
fn toolbox_shifts_the_axle_forward() {
    let bare = reference_snapshot();
    let boxed = ConfigurationSnapshot::new(2200.0, 1500.0, 1800.0, 3000.0, 2000.0, 0.0, 50.0, true);
    let a_bare = solve(&bare).placement.centre_mm().unwrap();
    let a_boxed = solve(&boxed).placement.centre_mm().unwrap();
    // 40 kg moves from the body midpoint to the drawbar, ahead of the axle
    assert!(a_boxed < a_bare);

    let a = solve(&boxed);
    assert_eq!(a.toolbox_mass_kg, TOOLBOX_MASS_KG);
    let com = 2250.0;
    let toolbox_pos = 1500.0 - TOOLBOX_OFFSET_FROM_FRONT_MM;
    let payload_pos = 3000.0;
    let lhs =
        a.frame_mass_kg * com + a.toolbox_mass_kg * toolbox_pos + a.capacity_kg * payload_pos;
    let rhs = a_boxed * (2200.0 - a.tongue_load_kg);
    assert!((lhs - rhs).abs() <= 1e-6 * rhs.abs().max(1.0));
}

#[test]
fn tandem_axles_sit_symmetrically_about_the_centre() {
    let a = solve(&reference_snapshot());
    assert_eq!(a.axle_count, 2);
    match &a.placement {
        AxlePlacement::Resolved {
            centre_mm,
            axle_centres_mm,
        } => {
            assert_eq!(axle_centres_mm.len(), 2);
            assert!((axle_centres_mm[0] - (centre_mm - TANDEM_HALF_SPACING_MM)).abs() < 1e-9);
            assert!((axle_centres_mm[1] - (centre_mm + TANDEM_HALF_SPACING_MM)).abs() < 1e-9);
        }
        AxlePlacement::Undefined => panic!("expected a resolved placement"),
    }
}

#[test]
fn single_axle_sits_on_the_balanced_centre() {
    let s = ConfigurationSnapshot::new(750.0, 1500.0, 1800.0, 3000.0, 2000.0, 0.0, 180.0, false);
    let a = solve(&s);
    assert_eq!(a.axle_count, 1);
    match &a.placement {
        AxlePlacement::Resolved {
            centre_mm,
            axle_centres_mm,
        } => assert_eq!(axle_centres_mm.as_slice(), &[*centre_mm]),
        AxlePlacement::Undefined => panic!("expected a resolved placement"),
    }
}

#[test]
fn full_tongue_fraction_is_reported_undefined() {
    let a = solve_with_fraction(&reference_snapshot(), 1.0);
    assert_eq!(a.placement, AxlePlacement::Undefined);
    assert_eq!(a.placement.centre_mm(), None);
    // the rest of the breakdown stays finite and usable
    assert!(a.frame_mass_kg.is_finite());
    assert!(a.capacity_kg.is_finite());
    assert!(a.tongue_load_kg.is_finite());
}

#[test]
fn overweight_frame_leaves_negative_capacity_but_solves() {
    // 100 kg ATM on a long heavy frame: capacity goes negative, the
    // balance still has a finite solution.
    let s = ConfigurationSnapshot::new(100.0, 2000.0, 1800.0, 4000.0, 2000.0, 0.0, 300.0, false);
    let a = solve(&s);
    assert!(a.capacity_kg < 0.0);
    let centre = a.placement.centre_mm().expect("resolved");
    assert!(centre.is_finite());
}

#[test]
fn solving_twice_gives_identical_results() {
    let s = reference_snapshot();
    assert_eq!(solve(&s), solve(&s));
}

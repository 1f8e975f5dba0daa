// Centralized dimensional and mass constants. All lengths are millimetres,
// all masses kilograms, matching the input units of the designer.

// -- Coupling / drawbar --

/// The drawbar measurement is taken from a point this far ahead of the
/// physical drawbar tip (the towball centre sits at the reference point).
pub const COUPLER_REFERENCE_OFFSET_MM: f64 = 130.0;

/// Empirical linear mass of chassis rail + drawbar steel.
pub const FRAME_MASS_PER_MM: f64 = 0.022;

/// Plan-view footprint of the coupling body, rearward from the reference point.
pub const COUPLER_BODY_LENGTH_MM: f64 = 286.0; // 2.2 x COUPLER_REFERENCE_OFFSET_MM
pub const COUPLER_BODY_WIDTH_MM: f64 = 100.0;

/// Diameter of the towball centre marker.
pub const TOWBALL_MARKER_DIAMETER_MM: f64 = 75.0;

// -- Axles / wheels --

/// ATM at or below this rides on a single axle; above it, tandem.
pub const SINGLE_AXLE_ATM_LIMIT_KG: f64 = 2000.0;

/// Sprung mass added per axle (axle beam, suspension, wheels).
pub const MASS_PER_AXLE_KG: f64 = 150.0;

/// Tandem axle centres sit this far either side of the balanced centre.
pub const TANDEM_HALF_SPACING_MM: f64 = 437.5;

pub const TYRE_DIAMETER_MM: f64 = 800.0;
pub const TYRE_WIDTH_MM: f64 = 230.0;

/// Wheel guards overhang the tyre footprint by this much in total.
pub const GUARD_MARGIN_MM: f64 = 200.0;

// -- Body / fittings --

/// Inner wall inset of double-walled outlines (body and drawbar rails).
pub const WALL_INSET_MM: f64 = 5.0;

/// Drawbar toolbox: fixed front-to-back depth, mass, and the distance of
/// its mass centre ahead of the body front face.
pub const TOOLBOX_DEPTH_MM: f64 = 400.0;
pub const TOOLBOX_MASS_KG: f64 = 40.0;
pub const TOOLBOX_OFFSET_FROM_FRONT_MM: f64 = 200.0;

// -- Body archetype base masses (unladen, less axles and chassis steel) --

pub const BODY_BASE_MASS_BOX_KG: f64 = 180.0;
pub const BODY_BASE_MASS_BOAT_KG: f64 = 150.0;
pub const BODY_BASE_MASS_CAR_KG: f64 = 350.0;
pub const BODY_BASE_MASS_CAMPER_KG: f64 = 300.0;
pub const BODY_BASE_MASS_HORSE_FLOAT_KG: f64 = 450.0;

// -- Load distribution --

/// Share of ATM the tow coupling should carry.
pub const TARGET_TONGUE_LOAD_FRACTION: f64 = 0.10;

// -- Sketch furniture (model-space, so labels scale with the drawing) --

/// Dashed centreline overhang past the coupler and the body rear.
pub const CENTRELINE_OVERHANG_MM: f64 = 250.0;

/// Offset of horizontal dimension lines above the body top edge.
pub const DIMENSION_OFFSET_MM: f64 = 437.5;

/// Extension-line half length at dimension ends.
pub const DIMENSION_TICK_MM: f64 = 100.0;

/// Columns for the vertical dimensions behind the body rear.
pub const DIMENSION_COLUMN_NEAR_MM: f64 = 312.5;
pub const DIMENSION_COLUMN_FAR_MM: f64 = 625.0;

/// Line step of the notes block above the sketch.
pub const NOTE_LINE_STEP_MM: f64 = 200.0;

/// Scale used when the caller supplies an unusable factor (px per mm).
pub const DEFAULT_SCALE_FACTOR: f64 = 0.08;

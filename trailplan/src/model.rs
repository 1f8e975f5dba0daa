use serde::{Deserialize, Serialize};

use crate::constants::{
    BODY_BASE_MASS_BOAT_KG, BODY_BASE_MASS_BOX_KG, BODY_BASE_MASS_CAMPER_KG,
    BODY_BASE_MASS_CAR_KG, BODY_BASE_MASS_HORSE_FLOAT_KG, COUPLER_REFERENCE_OFFSET_MM,
};
use crate::geometry::tolerance::non_negative;

/// Trailer archetypes selectable in the designer; each carries a nominal
/// unladen body mass (floor, sides, fit-out — not axles or chassis steel).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyType {
    Box,
    Boat,
    Car,
    Camper,
    HorseFloat,
}

impl BodyType {
    pub fn base_mass_kg(self) -> f64 {
        match self {
            BodyType::Box => BODY_BASE_MASS_BOX_KG,
            BodyType::Boat => BODY_BASE_MASS_BOAT_KG,
            BodyType::Car => BODY_BASE_MASS_CAR_KG,
            BodyType::Camper => BODY_BASE_MASS_CAMPER_KG,
            BodyType::HorseFloat => BODY_BASE_MASS_HORSE_FLOAT_KG,
        }
    }

    /// Lenient parse of the selector value; anything unrecognized is a box.
    pub fn parse(s: &str) -> BodyType {
        match s.trim().to_ascii_lowercase().as_str() {
            "boat" => BodyType::Boat,
            "car" => BodyType::Car,
            "camper" => BodyType::Camper,
            "horse-float" | "horse_float" | "horsefloat" | "float" => BodyType::HorseFloat,
            _ => BodyType::Box,
        }
    }
}

impl Default for BodyType {
    fn default() -> BodyType {
        BodyType::Box
    }
}

/// Untrusted input exactly as the form widgets hand it over. Numeric fields
/// arrive as text; missing fields deserialize to empty strings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub atm_kg: String,
    #[serde(default)]
    pub drawbar_length_mm: String,
    #[serde(default)]
    pub drawbar_width_mm: String,
    #[serde(default)]
    pub body_length_mm: String,
    #[serde(default)]
    pub body_width_mm: String,
    #[serde(default)]
    pub guard_width_mm: String,
    #[serde(default)]
    pub body_type: String,
    #[serde(default)]
    pub has_toolbox: bool,
}

/// Parse a dimension or mass field. Unparsable, non-finite and negative
/// input all fold to 0 so the preview keeps rendering.
pub fn parse_field(s: &str) -> f64 {
    non_negative(s.trim().parse::<f64>().unwrap_or(0.0))
}

/// Validated, immutable input record. Lengths in mm, masses in kg, all
/// fields finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationSnapshot {
    pub atm_kg: f64,
    /// From the coupling reference point to the body front face.
    pub measured_drawbar_length_mm: f64,
    pub drawbar_width_mm: f64,
    pub body_length_mm: f64,
    pub body_width_mm: f64,
    pub guard_width_mm: f64,
    pub body_type_base_mass_kg: f64,
    pub has_toolbox: bool,
}

impl ConfigurationSnapshot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        atm_kg: f64,
        measured_drawbar_length_mm: f64,
        drawbar_width_mm: f64,
        body_length_mm: f64,
        body_width_mm: f64,
        guard_width_mm: f64,
        body_type_base_mass_kg: f64,
        has_toolbox: bool,
    ) -> ConfigurationSnapshot {
        ConfigurationSnapshot {
            atm_kg: non_negative(atm_kg),
            measured_drawbar_length_mm: non_negative(measured_drawbar_length_mm),
            drawbar_width_mm: non_negative(drawbar_width_mm),
            body_length_mm: non_negative(body_length_mm),
            body_width_mm: non_negative(body_width_mm),
            guard_width_mm: non_negative(guard_width_mm),
            body_type_base_mass_kg: non_negative(body_type_base_mass_kg),
            has_toolbox,
        }
    }

    pub fn from_raw(raw: &RawConfig) -> ConfigurationSnapshot {
        ConfigurationSnapshot::new(
            parse_field(&raw.atm_kg),
            parse_field(&raw.drawbar_length_mm),
            parse_field(&raw.drawbar_width_mm),
            parse_field(&raw.body_length_mm),
            parse_field(&raw.body_width_mm),
            parse_field(&raw.guard_width_mm),
            BodyType::parse(&raw.body_type).base_mass_kg(),
            raw.has_toolbox,
        )
    }

    /// The part of the drawbar measurement that is real chassis steel; the
    /// first 130 mm is reference overhang ahead of the tip.
    pub fn physical_drawbar_length_mm(&self) -> f64 {
        (self.measured_drawbar_length_mm - COUPLER_REFERENCE_OFFSET_MM).max(0.0)
    }

    /// Overall width across the wheel guards.
    pub fn total_width_mm(&self) -> f64 {
        self.body_width_mm + 2.0 * self.guard_width_mm
    }

    /// True when every numeric field collapsed to 0 — the usual sign that
    /// the form was empty or entirely malformed.
    pub fn is_all_zero(&self) -> bool {
        self.atm_kg == 0.0
            && self.measured_drawbar_length_mm == 0.0
            && self.drawbar_width_mm == 0.0
            && self.body_length_mm == 0.0
            && self.body_width_mm == 0.0
            && self.guard_width_mm == 0.0
    }
}

impl Default for ConfigurationSnapshot {
    fn default() -> ConfigurationSnapshot {
        ConfigurationSnapshot::from_raw(&RawConfig::default())
    }
}

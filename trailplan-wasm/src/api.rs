use wasm_bindgen::prelude::*;

use trailplan::{compute_drawing_plan, ConfigurationSnapshot, Primitive, RawConfig};

use crate::{error, interop};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn snapshot_from(config: JsValue) -> ConfigurationSnapshot {
    match serde_wasm_bindgen::from_value::<RawConfig>(config) {
        Ok(raw) => ConfigurationSnapshot::from_raw(&raw),
        Err(_) => {
            // live preview keeps rendering; the shell gets an empty sketch
            web_sys::console::warn_1(&JsValue::from_str(
                "trailplan: config was not an object, rendering empty inputs",
            ));
            ConfigurationSnapshot::default()
        }
    }
}

/// Full drawing plan as a plain JS object: `{scale_factor, primitives}`
/// with `kind`-tagged primitives. Malformed config fields degrade to 0.
#[wasm_bindgen]
pub fn compute_plan(config: JsValue, scale_factor: f64) -> JsValue {
    let snapshot = snapshot_from(config);
    let plan = compute_drawing_plan(&snapshot, scale_factor);
    serde_wasm_bindgen::to_value(&plan).unwrap_or(JsValue::NULL)
}

/// Envelope form of `compute_plan`: rejects an unusable scale factor
/// instead of silently substituting the default.
#[wasm_bindgen]
pub fn compute_plan_res(config: JsValue, scale_factor: f64) -> JsValue {
    if !scale_factor.is_finite() {
        return error::non_finite("scale_factor");
    }
    if scale_factor <= 0.0 {
        return error::not_positive("scale_factor", scale_factor);
    }
    let snapshot = snapshot_from(config);
    let plan = compute_drawing_plan(&snapshot, scale_factor);
    match serde_wasm_bindgen::to_value(&plan) {
        Ok(v) => error::ok(v),
        Err(e) => error::err("serialize", e.to_string(), None),
    }
}

/// Solver numbers alone, for the shell's info panel: axle count, mass
/// breakdown and the (possibly undefined) axle placement.
#[wasm_bindgen]
pub fn analyze_load(config: JsValue) -> JsValue {
    let snapshot = snapshot_from(config);
    let analysis = trailplan::solver::solve(&snapshot);
    serde_wasm_bindgen::to_value(&analysis).unwrap_or(JsValue::NULL)
}

/// Typed-array fast path for the canvas stroke pass:
/// `{lines, line_dashed, rects, circles, arcs}`. Dimension call-outs and
/// notes carry text and stay on the `compute_plan` object path.
#[wasm_bindgen]
pub fn plan_arrays(config: JsValue, scale_factor: f64) -> JsValue {
    let snapshot = snapshot_from(config);
    let plan = compute_drawing_plan(&snapshot, scale_factor);

    let mut lines: Vec<f32> = Vec::new();
    let mut line_dashed: Vec<u8> = Vec::new();
    let mut rects: Vec<f32> = Vec::new();
    let mut circles: Vec<f32> = Vec::new();
    let mut arcs: Vec<f32> = Vec::new();
    for p in &plan.primitives {
        match p {
            Primitive::Line { x1, y1, x2, y2, dashed } => {
                lines.extend([*x1 as f32, *y1 as f32, *x2 as f32, *y2 as f32]);
                line_dashed.push(u8::from(*dashed));
            }
            Primitive::Rect { x, y, w, h } => {
                rects.extend([*x as f32, *y as f32, *w as f32, *h as f32]);
            }
            Primitive::Circle { cx, cy, r } => {
                circles.extend([*cx as f32, *cy as f32, *r as f32]);
            }
            Primitive::Arc { cx, cy, r, start_rad, end_rad } => {
                arcs.extend([
                    *cx as f32,
                    *cy as f32,
                    *r as f32,
                    *start_rad as f32,
                    *end_rad as f32,
                ]);
            }
            Primitive::Dimension { .. } | Primitive::Note { .. } => {}
        }
    }

    let obj = interop::new_obj();
    interop::set_kv(&obj, "lines", &interop::arr_f32(&lines).into());
    interop::set_kv(&obj, "line_dashed", &interop::arr_u8(&line_dashed).into());
    interop::set_kv(&obj, "rects", &interop::arr_f32(&rects).into());
    interop::set_kv(&obj, "circles", &interop::arr_f32(&circles).into());
    interop::set_kv(&obj, "arcs", &interop::arr_f32(&arcs).into());
    obj.into()
}

/// The designer's stock starting values.
#[wasm_bindgen]
pub fn default_config() -> JsValue {
    let raw = RawConfig {
        atm_kg: "750".to_string(),
        drawbar_length_mm: "1500".to_string(),
        drawbar_width_mm: "1800".to_string(),
        body_length_mm: "3000".to_string(),
        body_width_mm: "2000".to_string(),
        guard_width_mm: "0".to_string(),
        body_type: "box".to_string(),
        has_toolbox: false,
    };
    serde_wasm_bindgen::to_value(&raw).unwrap_or(JsValue::NULL)
}

use js_sys::{Float32Array, Reflect, Uint8Array};
use serde::Deserialize;
use trailplan_wasm::{compute_plan, default_config, plan_arrays};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize)]
struct PlanDoc {
    scale_factor: f64,
    primitives: Vec<serde_json::Value>,
}

fn field(v: &JsValue, k: &str) -> JsValue {
    Reflect::get(v, &JsValue::from_str(k)).unwrap()
}

#[wasm_bindgen_test]
fn default_config_produces_a_full_plan() {
    let plan = compute_plan(default_config(), 0.08);
    let doc: PlanDoc = serde_wasm_bindgen::from_value(plan).unwrap();
    assert_eq!(doc.scale_factor, 0.08);
    assert!(!doc.primitives.is_empty());
    assert!(doc.primitives.iter().any(|p| p["kind"] == "rect"));
    assert!(doc.primitives.iter().any(|p| p["kind"] == "dimension"));
    assert!(doc.primitives.iter().any(|p| p["kind"] == "note"));
}

#[wasm_bindgen_test]
fn dimension_labels_survive_the_boundary() {
    let plan = compute_plan(default_config(), 0.08);
    let doc: PlanDoc = serde_wasm_bindgen::from_value(plan).unwrap();
    let labels: Vec<String> = doc
        .primitives
        .iter()
        .filter(|p| p["kind"] == "dimension")
        .map(|p| p["label"].as_str().unwrap().to_string())
        .collect();
    assert!(labels.iter().any(|l| l == "1500 mm"));
    assert!(labels.iter().any(|l| l == "3000 mm"));
}

#[wasm_bindgen_test]
fn a_null_config_still_renders() {
    let plan = compute_plan(JsValue::NULL, 0.08);
    let doc: PlanDoc = serde_wasm_bindgen::from_value(plan).unwrap();
    assert!(!doc.primitives.is_empty());
}

#[wasm_bindgen_test]
fn plan_arrays_pack_the_stroke_pass() {
    let pa = plan_arrays(default_config(), 0.08);
    let lines = Float32Array::new(&field(&pa, "lines"));
    let dashed = Uint8Array::new(&field(&pa, "line_dashed"));
    let rects = Float32Array::new(&field(&pa, "rects"));
    let circles = Float32Array::new(&field(&pa, "circles"));
    assert!(lines.length() > 0);
    assert_eq!(lines.length() % 4, 0);
    assert_eq!(dashed.length(), lines.length() / 4);
    assert!(rects.length() > 0);
    assert_eq!(rects.length() % 4, 0);
    // one towball marker
    assert_eq!(circles.length(), 3);
}

#[wasm_bindgen_test]
fn plan_arrays_scale_linearly() {
    let a = plan_arrays(default_config(), 0.08);
    let b = plan_arrays(default_config(), 0.16);
    for key in ["lines", "rects", "circles"] {
        let va = Float32Array::new(&field(&a, key)).to_vec();
        let vb = Float32Array::new(&field(&b, key)).to_vec();
        assert_eq!(va.len(), vb.len());
        for (x, y) in va.iter().zip(&vb) {
            assert_eq!(*y, *x * 2.0, "{} mismatch", key);
        }
    }
}

mod api;
mod error;
mod interop;

pub use api::{
    analyze_load, compute_plan, compute_plan_res, default_config, plan_arrays, set_panic_hook,
};

use wasm_bindgen::prelude::*;

/// Snapshot of the last step's timings and probe counts
#[wasm_bindgen]
#[derive(Clone)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) body_count: u32,
    pub(super) bodies_grounded: u32,
    pub(super) edge_probes: u32,
    pub(super) edge_hits: u32,
    pub(super) speed_max: f32,
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }

    #[wasm_bindgen(getter)]
    pub fn bodies_grounded(&self) -> u32 { self.bodies_grounded }

    #[wasm_bindgen(getter)]
    pub fn edge_probes(&self) -> u32 { self.edge_probes }

    #[wasm_bindgen(getter)]
    pub fn edge_hits(&self) -> u32 { self.edge_hits }

    #[wasm_bindgen(getter)]
    pub fn speed_max(&self) -> f32 { self.speed_max }
}

impl PerfStats {
    pub(super) fn new() -> Self {
        Self {
            step_ms: 0.0,
            body_count: 0,
            bodies_grounded: 0,
            edge_probes: 0,
            edge_hits: 0,
            speed_max: 0.0,
        }
    }

    pub(super) fn reset(&mut self) {
        *self = Self::new();
    }
}

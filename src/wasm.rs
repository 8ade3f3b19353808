//! Browser bindings
//!
//! The page owns the canvas, the `setInterval` timer and the touch handlers;
//! it calls into [`WasmSimulation`] and renders the returned snapshot JSON.

use wasm_bindgen::prelude::*;

use crate::sim::{Playfield, SimulationCore, Snapshot};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("Tap Pong (web) starting...");
}

fn to_json(snapshot: &Snapshot) -> Result<String, JsValue> {
    serde_json::to_string(snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct WasmSimulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl WasmSimulation {
    /// Build from a playfield JSON string; empty string means defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmSimulation, JsValue> {
        let playfield = if config_json.trim().is_empty() {
            Playfield::default()
        } else {
            Playfield::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let core = SimulationCore::new(playfield).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    pub fn tick(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.tick())
    }

    pub fn set_paddle_position(&mut self, raw_x: f32) {
        self.core.set_paddle_position(raw_x);
    }

    pub fn set_touch_x(&mut self, touch_x: f32) {
        self.core.set_touch_x(touch_x);
    }

    pub fn reset(&mut self) -> Result<String, JsValue> {
        to_json(&self.core.reset())
    }

    /// Tap handler: restarts only while the game-over banner is up
    pub fn restart_if_over(&mut self) -> bool {
        self.core.restart_if_over()
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        to_json(&self.core.snapshot())
    }

    /// Events from the latest tick as a JSON array
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.core.drain_events())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

//! WASM bindings for Circuit Tree.
//!
//! This module provides JavaScript-friendly bindings for a browser circuit
//! editor: the page draws the tree, the simulator runs here.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'circuit_tree';
//!
//! await init();
//!
//! const circuit = new WasmCircuit(20, 20, 64);
//! const lamp = circuit.insert(0, 1);      // lamp under the source
//! circuit.insert(0, 3);                   // switch beside it
//!
//! // In the animation loop:
//! circuit.simulate(dt);
//! if (circuit.has_failed()) { ... }
//!
//! localStorage.setItem('circuit', circuit.to_json());
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{Circuit, ComponentId, Layout};
use crate::components::{Component, ComponentKind};
use crate::error::CircuitError;
use crate::snapshot;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: CircuitError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible circuit tree.
///
/// Component ids cross the boundary as plain numbers; `-1` means
/// "no component" where a number is returned.
#[wasm_bindgen]
pub struct WasmCircuit {
    circuit: Circuit,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Create a circuit with only a power source, drawn at (x, y).
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, cell_size: f64) -> WasmCircuit {
        WasmCircuit {
            circuit: Circuit::new(Layout::new(x, y, cell_size)),
        }
    }

    /// Rebuild a circuit from a saved JSON snapshot.
    #[wasm_bindgen]
    pub fn from_json(json: &str) -> Result<WasmCircuit, JsValue> {
        let snapshot = snapshot::from_json(json).map_err(to_js)?;
        Ok(WasmCircuit {
            circuit: Circuit::from_snapshot(&snapshot),
        })
    }

    /// Replace the tree with a saved JSON snapshot.
    #[wasm_bindgen]
    pub fn load_json(&mut self, json: &str) -> Result<(), JsValue> {
        let snapshot = snapshot::from_json(json).map_err(to_js)?;
        self.circuit.load_snapshot(&snapshot);
        Ok(())
    }

    /// Save the circuit as a JSON snapshot.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        snapshot::to_json(&self.circuit.snapshot()).map_err(to_js)
    }

    /// Insert a default component of the given kind code under `parent_id`.
    ///
    /// # Returns
    /// The new id, or `-1` if the parent does not exist.
    #[wasm_bindgen]
    pub fn insert(&mut self, parent_id: u32, kind_code: i32) -> i64 {
        let kind = ComponentKind::from_code(kind_code as i64).unwrap_or(ComponentKind::Generic);
        self.circuit
            .insert(ComponentId(parent_id), Component::template(kind))
            .map_or(-1, |id| id.0 as i64)
    }

    /// Delete a component. Returns `false` for the root or an unknown id.
    #[wasm_bindgen]
    pub fn delete(&mut self, id: u32) -> bool {
        self.circuit.delete(ComponentId(id))
    }

    /// Flip a switch. Returns `false` if `id` is not a switch.
    #[wasm_bindgen]
    pub fn toggle_switch(&mut self, id: u32) -> bool {
        self.circuit
            .component_mut(ComponentId(id))
            .is_some_and(Component::toggle_switch)
    }

    /// Set the resistance of a component.
    #[wasm_bindgen]
    pub fn set_resistance(&mut self, id: u32, resistance: f64) -> bool {
        match self.circuit.component_mut(ComponentId(id)) {
            Some(c) => {
                c.resistance = resistance;
                true
            }
            None => false,
        }
    }

    /// Mark one component as focused and clear focus everywhere else.
    #[wasm_bindgen]
    pub fn focus(&mut self, id: u32) -> bool {
        let ids = self.ids();
        for other in ids {
            if let Some(c) = self.circuit.component_mut(ComponentId(other)) {
                c.has_focus = other == id;
            }
        }
        self.circuit.component(ComponentId(id)).is_some()
    }

    /// Id of the component at a screen position, or `-1`.
    #[wasm_bindgen]
    pub fn component_at(&self, x: f64, y: f64) -> i64 {
        self.circuit
            .component_at(x, y)
            .map_or(-1, |c| c.id().0 as i64)
    }

    /// Id of the last component on the spine.
    #[wasm_bindgen]
    pub fn last_spine_id(&self) -> u32 {
        self.circuit.last_spine_id().0
    }

    /// Solve the circuit for `time` seconds.
    #[wasm_bindgen]
    pub fn simulate(&mut self, time: f64) {
        self.circuit.simulate(time);
    }

    /// Zero every consumption counter.
    #[wasm_bindgen]
    pub fn reset_consumption(&mut self) {
        self.circuit.reset_consumption();
    }

    /// Total resistance from the last solve.
    #[wasm_bindgen(getter)]
    pub fn resistance(&self) -> f64 {
        self.circuit.resistance()
    }

    /// Source current from the last solve.
    #[wasm_bindgen(getter)]
    pub fn current(&self) -> f64 {
        self.circuit.current()
    }

    /// Whether any component failed on the last solve.
    #[wasm_bindgen]
    pub fn has_failed(&self) -> bool {
        self.circuit.has_failed()
    }

    /// Voltage across a component, or `undefined` if it doesn't exist.
    #[wasm_bindgen]
    pub fn voltage_of(&self, id: u32) -> Option<f64> {
        self.circuit.component(ComponentId(id)).map(|c| c.voltage)
    }

    /// Current through a component, or `undefined` if it doesn't exist.
    #[wasm_bindgen]
    pub fn current_of(&self, id: u32) -> Option<f64> {
        self.circuit.component(ComponentId(id)).map(|c| c.current)
    }

    /// All component ids, parent before children.
    #[wasm_bindgen]
    pub fn ids(&self) -> Vec<u32> {
        let mut ids = Vec::with_capacity(self.circuit.len());
        self.circuit.root().walk(&mut |c| ids.push(c.id().0));
        ids
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

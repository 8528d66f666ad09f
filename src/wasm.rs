//! WASM bindings for Qucsim Core.
//!
//! This module provides JavaScript-friendly bindings so a browser frontend
//! can simulate netlists without a server round trip.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { run_netlist, WasmDataset } from 'qucsim_core';
//!
//! await init();
//!
//! const netlist = `
//!   Vdc:V1 in 0 U="10"
//!   R:R1 in out R="1000"
//!   R:R2 out 0 R="1000"
//! `;
//!
//! const text = run_netlist(netlist);
//! const data = new WasmDataset(text);
//! data.values("out"); // Float64Array [5, 5]
//! ```

use std::collections::HashMap;

use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Simulate a netlist and return the dataset text.
///
/// Fails only when a parameter value is not numeric.
#[wasm_bindgen]
pub fn run_netlist(netlist: &str) -> Result<String, JsValue> {
    crate::run(netlist).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Decoded dataset text.
#[wasm_bindgen]
pub struct WasmDataset {
    results: HashMap<String, Vec<f64>>,
}

#[wasm_bindgen]
impl WasmDataset {
    /// Decode dataset text produced by `run_netlist` or any compatible tool.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> WasmDataset {
        WasmDataset {
            results: crate::decode(text),
        }
    }

    /// Block names, sorted.
    #[wasm_bindgen]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.results.keys().cloned().collect();
        names.sort();
        names
    }

    /// Values of a named block, or `undefined` if absent.
    #[wasm_bindgen]
    pub fn values(&self, name: &str) -> Option<Vec<f64>> {
        self.results.get(name).cloned()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

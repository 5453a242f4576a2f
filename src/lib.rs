//! # Circuit Tree
//!
//! A simulator for simple resistive circuits drawn as a tree.
//!
//! This library provides:
//! - A component model (power source, lamp, resistor, switch)
//! - A tree store with id-stable insertion, deletion and lookup
//! - Rehydration of typed trees from plain JSON snapshots
//! - A steady-state solver computing voltage, current, consumption and
//!   overload for every component
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`components`] - Component model and kind-specific defaults
//! - [`circuit`] - The [`Circuit`] tree store, ids, layout and hit testing
//! - [`snapshot`] - Snapshot records, JSON transport and rehydration
//! - [`solver`] - Series/parallel solve and a fixed-step [`Simulator`]
//!
//! ## Usage
//!
//! ```
//! use circuit_tree::{Circuit, Component, ComponentId};
//!
//! let mut circuit = Circuit::default();
//! let lamp = circuit.insert(ComponentId::ROOT, Component::lamp(4.0, 0.5)).unwrap();
//! circuit.insert(ComponentId::ROOT, Component::resistor_default());
//!
//! let summary = circuit.simulate(1.0 / 60.0);
//! assert!(summary.current > 0.0);
//! assert!(circuit.component(lamp).unwrap().voltage > 0.0);
//! ```
//!
//! ### Native CLI
//!
//! ```bash
//! circuit-tree saved.json --steps 600 --time-step 0.0166
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuit } from 'circuit_tree';
//!
//! const circuit = WasmCircuit.from_json(savedJson);
//! circuit.simulate(1 / 60);
//! ```

pub mod circuit;
pub mod components;
pub mod error;
pub mod snapshot;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{Circuit, ComponentId, Layout, SolveSummary};
pub use components::{Component, ComponentKind};
pub use error::{CircuitError, Result};
pub use solver::Simulator;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuit;

/// Default grid cell size used for layout and hit testing
pub const DEFAULT_CELL_SIZE: f64 = 64.0;

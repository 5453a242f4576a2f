//! Steady-state circuit solver.
//!
//! This module computes the electrical state of a circuit tree.
//!
//! ## Series/parallel reduction
//!
//! The tree is read as a ladder. Walking the spine (root, first child,
//! first child's first child, ...), the children of each visited node form
//! one parallel block:
//!
//! ```text
//! R_block = 1 / Σ (1 / R_child)
//! ```
//!
//! The blocks are in series with the source's internal resistance:
//!
//! ```text
//! R_total = R_source + Σ R_block
//! I       = V_source / R_total
//! V_block = R_block * I
//! I_child = V_block / R_child
//! ```
//!
//! A component fails when `I_child > I_max`. Divisions that produce NaN or
//! infinity (shorts, open switches, sources without load) are replaced by
//! zero where they feed a current or voltage.

mod simulator;
mod steady;

pub use simulator::{Simulator, SimulatorConfig};
pub use steady::parallel_resistance;

/// Default simulated time per step, in seconds.
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 60.0;

/// Replace NaN and infinities by zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

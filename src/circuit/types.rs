//! Core types for circuit representation.

use std::fmt;

use crate::DEFAULT_CELL_SIZE;

/// A unique identifier for a component in the circuit.
/// Component 0 is always the root power source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// The root component (always id 0).
    pub const ROOT: ComponentId = ComponentId(0);

    /// Check if this is the root component.
    pub fn is_root(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// Placement of the circuit drawing: origin and grid cell size.
///
/// Carried by the circuit only so position queries use the same coordinate
/// space as whatever renders it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub x: f64,
    pub y: f64,
    pub cell_size: f64,
}

impl Layout {
    pub fn new(x: f64, y: f64, cell_size: f64) -> Self {
        Self { x, y, cell_size }
    }

    /// Grid cell (column, row) containing a point, or `None` if the point
    /// lies above or left of the origin.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let col = (x - self.x) / self.cell_size;
        let row = (y - self.y) / self.cell_size;
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }
        Some((col.floor() as usize, row.floor() as usize))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_CELL_SIZE)
    }
}

/// Circuit-level result of the last solve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolveSummary {
    /// Total series resistance seen by the source
    pub resistance: f64,
    /// Current drawn from the source
    pub current: f64,
    /// Set when any component was overloaded
    pub has_failed: bool,
}

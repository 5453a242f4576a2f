//! Linear loads: Lamp, Resistor and the Generic fallback.

use super::{Component, Variant};

/// Electrical defaults for a passive load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadDefaults {
    /// Resistance in ohms
    pub resistance: f64,
    /// Current limit in amperes
    pub max_current: f64,
}

/// A small bulb: low resistance, fails early.
pub const LAMP_DEFAULTS: LoadDefaults = LoadDefaults {
    resistance: 4.0,
    max_current: 0.5,
};

/// A fixed resistor with a generous current rating.
pub const RESISTOR_DEFAULTS: LoadDefaults = LoadDefaults {
    resistance: 10.0,
    max_current: 100.0,
};

/// Unknown components only hold the shared fields. They never fail.
pub const GENERIC_DEFAULTS: LoadDefaults = LoadDefaults {
    resistance: 0.0,
    max_current: f64::INFINITY,
};

impl Component {
    /// Create a new lamp.
    pub fn lamp(resistance: f64, max_current: f64) -> Self {
        Self::with_variant(Variant::Lamp, resistance, max_current)
    }

    /// Create a lamp with [`LAMP_DEFAULTS`].
    pub fn lamp_default() -> Self {
        Self::lamp(LAMP_DEFAULTS.resistance, LAMP_DEFAULTS.max_current)
    }

    /// Create a new resistor.
    pub fn resistor(resistance: f64, max_current: f64) -> Self {
        Self::with_variant(Variant::Resistor, resistance, max_current)
    }

    /// Create a resistor with [`RESISTOR_DEFAULTS`].
    pub fn resistor_default() -> Self {
        Self::resistor(RESISTOR_DEFAULTS.resistance, RESISTOR_DEFAULTS.max_current)
    }

    /// Create a component with no kind-specific behaviour.
    pub fn generic(resistance: f64, max_current: f64) -> Self {
        Self::with_variant(Variant::Generic, resistance, max_current)
    }

    /// Create a generic component with [`GENERIC_DEFAULTS`].
    pub fn generic_default() -> Self {
        Self::generic(GENERIC_DEFAULTS.resistance, GENERIC_DEFAULTS.max_current)
    }

    /// Get the conductance (1/R). Infinite for a zero resistance.
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }
}

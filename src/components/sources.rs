//! Power source, the component at the root of every circuit.

use super::{Component, Variant};

/// Electrical defaults for a power source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSourceDefaults {
    /// Source voltage in volts
    pub voltage: f64,
    /// Internal resistance in ohms
    pub resistance: f64,
    /// Current limit in amperes
    pub max_current: f64,
}

/// Defaults used for a fresh circuit root and for rehydration templates.
pub const POWER_SOURCE_DEFAULTS: PowerSourceDefaults = PowerSourceDefaults {
    voltage: 2.0,
    resistance: 0.0,
    max_current: 1.0,
};

impl Component {
    /// Create a new power source.
    ///
    /// The source voltage is held in the shared `voltage` field; the solver
    /// reads it but never overwrites it.
    pub fn power_source(voltage: f64, resistance: f64, max_current: f64) -> Self {
        let mut source = Self::with_variant(Variant::PowerSource, resistance, max_current);
        source.voltage = voltage;
        source
    }

    /// Create a power source with [`POWER_SOURCE_DEFAULTS`].
    pub fn power_source_default() -> Self {
        let d = POWER_SOURCE_DEFAULTS;
        Self::power_source(d.voltage, d.resistance, d.max_current)
    }

    /// Get the source voltage, if this is a power source.
    pub fn source_voltage(&self) -> Option<f64> {
        match self.variant {
            Variant::PowerSource => Some(self.voltage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentKind;

    #[test]
    fn test_power_source_holds_voltage() {
        let source = Component::power_source(9.0, 0.5, 2.0);
        assert_eq!(source.kind(), ComponentKind::PowerSource);
        assert_eq!(source.source_voltage(), Some(9.0));
        assert_eq!(source.resistance, 0.5);
        assert_eq!(source.max_current, 2.0);
        assert_eq!(Component::lamp(1.0, 1.0).source_voltage(), None);
    }
}

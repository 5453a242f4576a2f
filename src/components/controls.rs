//! Control components: Switch.

use super::{Component, Variant};

/// Kind-specific state of a switch.
///
/// A switch is modeled as a resistance that alternates between `0`
/// (closed) and its off-resistance (open). The off-resistance is infinite,
/// which JSON cannot encode; snapshots carry it as `null` and rehydration
/// restores [`Switch::OFF_RESISTANCE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Switch {
    pub off_resistance: f64,
}

impl Switch {
    /// Resistance when closed.
    pub const R_CLOSED: f64 = 0.0;
    /// Resistance when open.
    pub const OFF_RESISTANCE: f64 = f64::INFINITY;
    /// Current limit of a default switch.
    pub const DEFAULT_MAX_CURRENT: f64 = 100.0;
}

impl Default for Switch {
    fn default() -> Self {
        Self {
            off_resistance: Self::OFF_RESISTANCE,
        }
    }
}

impl Component {
    /// Create a new switch. Switches start closed.
    pub fn switch(max_current: f64) -> Self {
        Self::with_variant(Variant::Switch(Switch::default()), Switch::R_CLOSED, max_current)
    }

    /// Create a switch with [`Switch::DEFAULT_MAX_CURRENT`].
    pub fn switch_default() -> Self {
        Self::switch(Switch::DEFAULT_MAX_CURRENT)
    }

    /// Check if this is a switch in the open state.
    pub fn is_open(&self) -> bool {
        match self.variant {
            Variant::Switch(s) => self.resistance == s.off_resistance,
            _ => false,
        }
    }

    /// Set the switch state. No-op for other kinds.
    pub fn set_switch_state(&mut self, closed: bool) {
        if let Variant::Switch(s) = self.variant {
            self.resistance = if closed { Switch::R_CLOSED } else { s.off_resistance };
        }
    }

    /// Toggle the switch state. Returns `false` if this is not a switch.
    pub fn toggle_switch(&mut self) -> bool {
        if self.as_switch().is_none() {
            return false;
        }
        let closed = self.is_open();
        self.set_switch_state(closed);
        true
    }
}

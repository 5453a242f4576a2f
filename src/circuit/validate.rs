//! Circuit validation.

use std::collections::HashSet;

use crate::components::ComponentKind;
use crate::error::{CircuitError, Result};

use super::Circuit;

/// Validate the structural invariants of a circuit.
///
/// Checks:
/// - The root is a power source with id 0
/// - No two components share an id
///
/// Circuits built through `insert` and `rehydrate` always pass; this is
/// meant for trees assembled from foreign data.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    let root = circuit.root();
    if !root.id().is_root() {
        return Err(CircuitError::invalid_root(format!(
            "root has id {}, expected 0",
            root.id().0
        )));
    }
    if root.kind() != ComponentKind::PowerSource {
        return Err(CircuitError::invalid_root(format!(
            "root is a {}, expected a power source",
            root.kind()
        )));
    }

    let mut seen = HashSet::new();
    let mut duplicate = None;
    root.walk(&mut |c| {
        if !seen.insert(c.id()) && duplicate.is_none() {
            duplicate = Some(c.id());
        }
    });
    if let Some(id) = duplicate {
        return Err(CircuitError::DuplicateId { id: id.0 });
    }

    // Cycles cannot be expressed: children are owned values.
    Ok(())
}

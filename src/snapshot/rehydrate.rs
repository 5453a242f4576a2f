//! Rebuilding a live circuit tree from snapshot records.

use tracing::{debug, warn};

use super::record::{CircuitSnapshot, ComponentRecord};
use crate::circuit::{Circuit, ComponentId, SolveSummary};
use crate::components::{Component, ComponentKind, Switch, Variant};

impl Circuit {
    /// Replace the tree with one rebuilt from `root`.
    ///
    /// Children are rebuilt before their parent, so ids are handed out in
    /// post-order starting from 1. Every node is built from the default
    /// template of its kind with the record's stored fields copied over, and
    /// loses its focus. The root is always rebuilt as a power source with id
    /// 0. The snapshot itself is left untouched.
    pub fn rehydrate(&mut self, root: &ComponentRecord) {
        self.last_id = 0;

        let children = root
            .children
            .iter()
            .map(|child| rehydrate_node(child, &mut self.last_id))
            .collect();

        if let Some(code) = root.kind.filter(|&code| code != ComponentKind::PowerSource.code()) {
            warn!(code, "root record is not a power source, rebuilding it as one");
        }
        let mut rebuilt = Component::template(ComponentKind::PowerSource);
        root.apply_to(&mut rebuilt);
        rebuilt.children = children;
        rebuilt.has_focus = false;
        rebuilt.id = ComponentId::ROOT;

        self.root = rebuilt;
        self.summary = SolveSummary::default();
        debug!(components = self.last_id + 1, "circuit rehydrated");
    }

    /// Rehydrate a whole snapshot, also taking its layout when stored.
    pub fn load_snapshot(&mut self, snapshot: &CircuitSnapshot) {
        if let Some(x) = snapshot.loc_x {
            self.layout.x = x;
        }
        if let Some(y) = snapshot.loc_y {
            self.layout.y = y;
        }
        if let Some(size) = snapshot.component_size {
            self.layout.cell_size = size;
        }
        self.rehydrate(&snapshot.root_component);
    }

    /// Build a new circuit from a snapshot.
    pub fn from_snapshot(snapshot: &CircuitSnapshot) -> Self {
        let mut circuit = Circuit::default();
        circuit.load_snapshot(snapshot);
        circuit
    }

    /// Capture the live circuit as a snapshot.
    pub fn snapshot(&self) -> CircuitSnapshot {
        CircuitSnapshot::from(self)
    }
}

fn rehydrate_node(record: &ComponentRecord, last_id: &mut u32) -> Component {
    let children = record
        .children
        .iter()
        .map(|child| rehydrate_node(child, last_id))
        .collect();

    let kind = match record.kind.map(|code| (code, ComponentKind::from_code(code))) {
        Some((_, Some(kind))) => kind,
        Some((code, None)) => {
            warn!(code, "unknown component kind, falling back to generic");
            ComponentKind::Generic
        }
        None => {
            warn!("component record without a kind, falling back to generic");
            ComponentKind::Generic
        }
    };

    let mut component = Component::template(kind);
    record.apply_to(&mut component);
    if let Variant::Switch(switch) = &mut component.variant {
        repair_switch(switch, &mut component.resistance, record);
    }
    component.children = children;
    component.has_focus = false;

    *last_id += 1;
    component.id = ComponentId(*last_id);
    component
}

/// Restore an off-resistance that went through `null`, and the live
/// resistance with it when the switch was open.
fn repair_switch(switch: &mut Switch, resistance: &mut f64, record: &ComponentRecord) {
    switch.off_resistance = match record.off_resistance {
        Some(Some(off)) => off,
        Some(None) | None => Switch::OFF_RESISTANCE,
    };
    if let Some(None) = record.resistance {
        *resistance = switch.off_resistance;
    }
}

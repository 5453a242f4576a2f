//! Plain snapshot records.
//!
//! Records mirror the component fields but carry no behaviour and no typed
//! variant: the kind survives only as an integer code. Every field is
//! optional so that a record only overrides what it actually stores.

use serde::{Deserialize, Deserializer, Serialize};

use crate::circuit::Circuit;
use crate::components::{Component, Variant};

/// Serialized form of one component and its subtree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,

    /// Kind code, see [`ComponentKind::code`](crate::components::ComponentKind::code)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<i64>,

    /// Outer `None`: absent. `Some(None)`: stored as `null`, which is what
    /// an infinite resistance degrades to.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub resistance: Option<Option<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_current: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_failed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_focus: Option<bool>,

    #[serde(default)]
    pub children: Vec<ComponentRecord>,

    /// Switch only. Same absent/`null` distinction as `resistance`.
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub off_resistance: Option<Option<f64>>,
}

/// Serialized form of a whole circuit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitSnapshot {
    pub root_component: ComponentRecord,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc_x: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc_y: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_size: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_component_id: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistance: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_failed: Option<bool>,
}

/// Keep an explicit `null` apart from an absent field.
fn nullable<'de, D>(deserializer: D) -> std::result::Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

/// Non-finite values cannot be written as JSON numbers.
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

impl ComponentRecord {
    /// Copy every field this record stores onto `component`, leaving the
    /// rest at the component's current values.
    pub(crate) fn apply_to(&self, component: &mut Component) {
        if let Some(Some(resistance)) = self.resistance {
            component.resistance = resistance;
        }
        if let Some(max_current) = self.max_current {
            component.max_current = max_current;
        }
        if let Some(voltage) = self.voltage {
            component.voltage = voltage;
        }
        if let Some(current) = self.current {
            component.current = current;
        }
        if let Some(consumption) = self.consumption {
            component.consumption = consumption;
        }
        if let Some(has_failed) = self.has_failed {
            component.has_failed = has_failed;
        }
        if let Some(has_focus) = self.has_focus {
            component.has_focus = has_focus;
        }
    }
}

impl From<&Component> for ComponentRecord {
    fn from(component: &Component) -> Self {
        let off_resistance = match component.variant() {
            Variant::Switch(s) => Some(finite(s.off_resistance)),
            _ => None,
        };
        Self {
            id: Some(component.id().0),
            kind: Some(component.kind().code()),
            resistance: Some(finite(component.resistance)),
            max_current: finite(component.max_current),
            voltage: Some(component.voltage),
            current: Some(component.current),
            consumption: Some(component.consumption),
            has_failed: Some(component.has_failed),
            has_focus: Some(component.has_focus),
            children: component.children().iter().map(ComponentRecord::from).collect(),
            off_resistance,
        }
    }
}

impl From<&Circuit> for CircuitSnapshot {
    fn from(circuit: &Circuit) -> Self {
        let summary = circuit.summary();
        Self {
            root_component: ComponentRecord::from(circuit.root()),
            loc_x: Some(circuit.layout.x),
            loc_y: Some(circuit.layout.y),
            component_size: Some(circuit.layout.cell_size),
            last_component_id: Some(circuit.last_id()),
            resistance: finite(summary.resistance),
            current: Some(summary.current),
            has_failed: Some(summary.has_failed),
        }
    }
}

//! Component models for the circuit tree.
//!
//! Every element of a circuit is a [`Component`]: a node holding shared
//! electrical state (resistance, current limit, last solved voltage/current,
//! accumulated consumption, failure flag) and an ordered list of owned
//! children. Kind-specific behaviour is a tagged [`Variant`]:
//! - Sources: PowerSource (always the tree root)
//! - Loads: Lamp, Resistor, Generic
//! - Controls: Switch
//!
//! The order of `children` matters: the first child continues the series
//! "spine" of the circuit, while all children of one node form a parallel
//! block.

mod controls;
mod linear;
mod sources;

pub use controls::Switch;
pub use linear::{LoadDefaults, GENERIC_DEFAULTS, LAMP_DEFAULTS, RESISTOR_DEFAULTS};
pub use sources::{PowerSourceDefaults, POWER_SOURCE_DEFAULTS};

use std::fmt;

use crate::circuit::ComponentId;

/// Discriminant of a component, independent of any kind-specific payload.
///
/// The integer codes are the ones stored under `type` in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    PowerSource,
    Lamp,
    Resistor,
    Switch,
    Generic,
}

impl ComponentKind {
    /// Snapshot code for this kind.
    pub fn code(self) -> i64 {
        match self {
            ComponentKind::PowerSource => 0,
            ComponentKind::Lamp => 1,
            ComponentKind::Resistor => 2,
            ComponentKind::Switch => 3,
            ComponentKind::Generic => 4,
        }
    }

    /// Resolve a snapshot code. Returns `None` for codes no kind owns.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ComponentKind::PowerSource),
            1 => Some(ComponentKind::Lamp),
            2 => Some(ComponentKind::Resistor),
            3 => Some(ComponentKind::Switch),
            4 => Some(ComponentKind::Generic),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::PowerSource => "power source",
            ComponentKind::Lamp => "lamp",
            ComponentKind::Resistor => "resistor",
            ComponentKind::Switch => "switch",
            ComponentKind::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Kind-specific part of a component.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    PowerSource,
    Lamp,
    Resistor,
    Switch(Switch),
    Generic,
}

impl Variant {
    /// The payload-free discriminant of this variant.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Variant::PowerSource => ComponentKind::PowerSource,
            Variant::Lamp => ComponentKind::Lamp,
            Variant::Resistor => ComponentKind::Resistor,
            Variant::Switch(_) => ComponentKind::Switch,
            Variant::Generic => ComponentKind::Generic,
        }
    }
}

/// A node of the circuit tree.
///
/// `voltage`, `current` and `has_failed` are outputs of the solver and are
/// only meaningful right after a solve; `consumption` accumulates across
/// solves until explicitly reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub(crate) id: ComponentId,
    pub(crate) variant: Variant,
    /// Resistance in ohms (for an open switch, its off-resistance)
    pub resistance: f64,
    /// Current above which the component fails
    pub max_current: f64,
    /// Voltage across the component (for the root: the source voltage)
    pub voltage: f64,
    /// Current through the component
    pub current: f64,
    /// Accumulated voltage * current * time
    pub consumption: f64,
    /// Set when `current > max_current` on the last solve
    pub has_failed: bool,
    /// UI selection flag, no electrical meaning
    pub has_focus: bool,
    pub(crate) children: Vec<Component>,
}

impl Component {
    /// Build a detached component. The id is assigned when it is inserted.
    pub(crate) fn with_variant(variant: Variant, resistance: f64, max_current: f64) -> Self {
        Self {
            id: ComponentId::ROOT,
            variant,
            resistance,
            max_current,
            voltage: 0.0,
            current: 0.0,
            consumption: 0.0,
            has_failed: false,
            has_focus: false,
            children: Vec::new(),
        }
    }

    /// Default-constructed component of the given kind.
    pub fn template(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::PowerSource => Self::power_source_default(),
            ComponentKind::Lamp => Self::lamp_default(),
            ComponentKind::Resistor => Self::resistor_default(),
            ComponentKind::Switch => Self::switch_default(),
            ComponentKind::Generic => Self::generic_default(),
        }
    }

    /// Get the component ID.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Get the component kind.
    pub fn kind(&self) -> ComponentKind {
        self.variant.kind()
    }

    /// Get the kind-specific variant.
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Get the ordered children.
    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// Check if this component has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Add a child without assigning ids. Use this to assemble a subtree
    /// before inserting it; the circuit renumbers the whole subtree on insert.
    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Get the switch state, if this is a switch.
    pub fn as_switch(&self) -> Option<&Switch> {
        match &self.variant {
            Variant::Switch(s) => Some(s),
            _ => None,
        }
    }

    /// Number of components on the deepest root-to-leaf path.
    pub fn longest_branch(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Component::longest_branch)
            .max()
            .unwrap_or(0)
    }

    /// Largest sibling group anywhere in this subtree (at least 1).
    pub fn max_children(&self) -> usize {
        self.children
            .iter()
            .map(Component::max_children)
            .fold(self.children.len().max(1), usize::max)
    }

    /// Total number of components in this subtree, including itself.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Component::count).sum::<usize>()
    }

    /// Visit this subtree depth-first, parent before children.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Component)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    pub(crate) fn walk_mut(&mut self, f: &mut impl FnMut(&mut Component)) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        for kind in [
            ComponentKind::PowerSource,
            ComponentKind::Lamp,
            ComponentKind::Resistor,
            ComponentKind::Switch,
            ComponentKind::Generic,
        ] {
            assert_eq!(ComponentKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ComponentKind::from_code(17), None);
        assert_eq!(ComponentKind::from_code(-1), None);
    }

    #[test]
    fn test_template_matches_kind() {
        assert_eq!(
            Component::template(ComponentKind::Switch).kind(),
            ComponentKind::Switch
        );
        assert!(Component::template(ComponentKind::Switch).as_switch().is_some());
        assert!(Component::template(ComponentKind::Lamp).as_switch().is_none());
    }

    #[test]
    fn test_tree_measurements() {
        // root -> [a -> [c, d, e], b]
        let a = Component::resistor(1.0, 1.0)
            .with_child(Component::lamp(1.0, 1.0))
            .with_child(Component::lamp(1.0, 1.0))
            .with_child(Component::lamp(1.0, 1.0));
        let root = Component::power_source(5.0, 0.0, 1.0)
            .with_child(a)
            .with_child(Component::resistor(1.0, 1.0));

        assert_eq!(root.longest_branch(), 3);
        assert_eq!(root.max_children(), 3);
        assert_eq!(root.count(), 6);
        assert_eq!(Component::lamp(1.0, 1.0).max_children(), 1);
    }
}

//! The circuit tree store.

use tracing::{debug, warn};

use super::layout::{GridHitTest, HitTest};
use super::types::{ComponentId, Layout, SolveSummary};
use crate::components::{Component, ComponentKind, Variant};

/// A circuit: an ordered tree of components rooted at a power source.
///
/// The circuit owns the tree, hands out ids, and caches the summary of the
/// last solve. Parents are found by searching from the root; components
/// hold no back-references.
#[derive(Debug, Clone)]
pub struct Circuit {
    pub(crate) root: Component,

    /// Last id handed out; the next component receives `last_id + 1`
    pub(crate) last_id: u32,

    /// Where the circuit is drawn, used for position queries
    pub layout: Layout,

    /// Summary of the last solve
    pub(crate) summary: SolveSummary,
}

impl Circuit {
    /// Create a circuit holding only a default power source.
    pub fn new(layout: Layout) -> Self {
        Self::with_root(Component::power_source_default(), layout)
    }

    /// Create a circuit whose root is the given power source. Any children
    /// it already holds are numbered from 1.
    ///
    /// A root of another kind is rebuilt as a power source carrying the same
    /// electrical fields and children.
    pub fn with_root(mut root: Component, layout: Layout) -> Self {
        if root.kind() != ComponentKind::PowerSource {
            warn!(kind = %root.kind(), "root is not a power source, rebuilding it as one");
            root.variant = Variant::PowerSource;
        }
        let mut last_id = 0;
        root.id = ComponentId::ROOT;
        for child in &mut root.children {
            assign_ids(child, &mut last_id);
        }
        Self {
            root,
            last_id,
            layout,
            summary: SolveSummary::default(),
        }
    }

    /// Get the root power source.
    pub fn root(&self) -> &Component {
        &self.root
    }

    /// Get the last id handed out.
    pub fn last_id(&self) -> u32 {
        self.last_id
    }

    /// Summary of the last solve. Stale after a structural change.
    pub fn summary(&self) -> SolveSummary {
        self.summary
    }

    /// Total resistance from the last solve.
    pub fn resistance(&self) -> f64 {
        self.summary.resistance
    }

    /// Source current from the last solve.
    pub fn current(&self) -> f64 {
        self.summary.current
    }

    /// Whether any component failed on the last solve.
    pub fn has_failed(&self) -> bool {
        self.summary.has_failed
    }

    /// Find a component by id (depth-first, root first).
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        find(&self.root, id)
    }

    /// Find a component by id for editing its electrical parameters.
    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        find_mut(&mut self.root, id)
    }

    /// Find the component whose direct children contain `id`.
    /// The root has no parent.
    pub fn parent_of(&self, id: ComponentId) -> Option<&Component> {
        parent_of(&self.root, id)
    }

    /// Find the component drawn at a point, using the grid layout.
    pub fn component_at(&self, x: f64, y: f64) -> Option<&Component> {
        self.component_at_with(&GridHitTest, x, y)
    }

    /// Find the component at a point using a renderer's own hit test.
    pub fn component_at_with(&self, hit_test: &impl HitTest, x: f64, y: f64) -> Option<&Component> {
        let id = hit_test.hit(&self.root, &self.layout, x, y)?;
        self.component(id)
    }

    /// Append `component` to the children of `parent_id` and return its new
    /// id. Does nothing and returns `None` if the parent does not exist.
    ///
    /// The component receives `last_id + 1`; any children it was assembled
    /// with are numbered after it.
    pub fn insert(&mut self, parent_id: ComponentId, mut component: Component) -> Option<ComponentId> {
        let Some(parent) = find_mut(&mut self.root, parent_id) else {
            warn!(parent = %parent_id, "insert under unknown parent ignored");
            return None;
        };

        assign_ids(&mut component, &mut self.last_id);
        let id = component.id;
        debug!(id = %id, parent = %parent_id, kind = %component.kind(), "component inserted");
        parent.children.push(component);
        Some(id)
    }

    /// Remove a component. Returns `false` for the root or an unknown id.
    ///
    /// The children of the removed component replace the children of the
    /// first remaining sibling, or become the parent's children when no
    /// sibling is left. A subtree the first sibling held is dropped with it.
    pub fn delete(&mut self, id: ComponentId) -> bool {
        if id.is_root() {
            warn!("refusing to delete the root component");
            return false;
        }
        let Some(parent) = parent_of_mut(&mut self.root, id) else {
            warn!(id = %id, "delete of unknown component ignored");
            return false;
        };
        let Some(index) = parent.children.iter().position(|c| c.id == id) else {
            return false;
        };

        let mut removed = parent.children.remove(index);
        let orphans = std::mem::take(&mut removed.children);
        let adopted = orphans.len();
        if !orphans.is_empty() {
            match parent.children.first_mut() {
                Some(sibling) => sibling.children = orphans,
                None => parent.children = orphans,
            }
        }
        debug!(id = %id, parent = %parent.id, adopted, "component deleted");
        true
    }

    /// Visit the spine: the root, its first child, that child's first child
    /// and so on, skipping the final leaf. Each visited node's children form
    /// one parallel block.
    pub fn for_each_spine_node(&self, mut f: impl FnMut(&Component)) {
        let mut node = &self.root;
        while let Some(next) = node.children.first() {
            f(node);
            node = next;
        }
    }

    pub(crate) fn for_each_spine_node_mut(&mut self, mut f: impl FnMut(&mut Component)) {
        let mut node = &mut self.root;
        while !node.children.is_empty() {
            f(node);
            node = &mut node.children[0];
        }
    }

    /// Id of the last component on the spine (the root if it has no
    /// children). New series elements are appended below it.
    pub fn last_spine_id(&self) -> ComponentId {
        let mut node = &self.root;
        while let Some(next) = node.children.first() {
            node = next;
        }
        node.id
    }

    /// Zero the consumption accumulator of every component.
    pub fn reset_consumption(&mut self) {
        self.root.walk_mut(&mut |c| c.consumption = 0.0);
    }

    /// Number of components in the tree, root included.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// A circuit always holds its root, so it is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Width and height of the drawing in layout units: the spine is laid
    /// out left to right with a wire cell between blocks, the tallest
    /// parallel block sets the height.
    pub fn extent(&self) -> (f64, f64) {
        let cell = self.layout.cell_size;
        let width = (self.root.longest_branch() * 2 - 1) as f64 * cell;
        let height = self.root.max_children() as f64 * cell;
        (width, height)
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

/// Number a detached subtree, parent before children.
fn assign_ids(component: &mut Component, last_id: &mut u32) {
    component.walk_mut(&mut |c| {
        *last_id += 1;
        c.id = ComponentId(*last_id);
    });
}

fn find(node: &Component, id: ComponentId) -> Option<&Component> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|child| find(child, id))
}

fn find_mut(node: &mut Component, id: ComponentId) -> Option<&mut Component> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter_mut().find_map(|child| find_mut(child, id))
}

fn parent_of(node: &Component, id: ComponentId) -> Option<&Component> {
    if node.children.iter().any(|c| c.id == id) {
        return Some(node);
    }
    node.children.iter().find_map(|child| parent_of(child, id))
}

fn parent_of_mut(node: &mut Component, id: ComponentId) -> Option<&mut Component> {
    if node.children.iter().any(|c| c.id == id) {
        return Some(node);
    }
    node.children
        .iter_mut()
        .find_map(|child| parent_of_mut(child, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(components: &[Component]) -> Vec<u32> {
        components.iter().map(|c| c.id().0).collect()
    }

    #[test]
    fn test_new_circuit_has_root_only() {
        let circuit = Circuit::default();
        assert_eq!(circuit.root().id(), ComponentId::ROOT);
        assert_eq!(circuit.root().kind(), ComponentKind::PowerSource);
        assert_eq!(circuit.last_id(), 0);
        assert_eq!(circuit.len(), 1);
        assert_eq!(circuit.last_spine_id(), ComponentId::ROOT);
    }

    #[test]
    fn test_insert_appends_with_fresh_ids() {
        let mut circuit = Circuit::default();
        let a = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let b = circuit.insert(ComponentId::ROOT, Component::resistor_default()).unwrap();
        let c = circuit.insert(a, Component::switch_default()).unwrap();

        assert_eq!((a.0, b.0, c.0), (1, 2, 3));
        assert_eq!(ids(circuit.root().children()), vec![1, 2]);
        assert_eq!(circuit.parent_of(c).unwrap().id(), a);
        assert_eq!(circuit.last_spine_id(), c);
    }

    #[test]
    fn test_insert_under_missing_parent_is_noop() {
        let mut circuit = Circuit::default();
        assert_eq!(circuit.insert(ComponentId(42), Component::lamp_default()), None);
        assert_eq!(circuit.last_id(), 0);
        assert_eq!(circuit.len(), 1);
    }

    #[test]
    fn test_insert_numbers_assembled_subtree() {
        let mut circuit = Circuit::default();
        let block = Component::resistor_default()
            .with_child(Component::lamp_default())
            .with_child(Component::lamp_default());
        let id = circuit.insert(ComponentId::ROOT, block).unwrap();
        assert_eq!(id, ComponentId(1));
        assert_eq!(ids(circuit.component(id).unwrap().children()), vec![2, 3]);
        assert_eq!(circuit.last_id(), 3);
    }

    #[test]
    fn test_delete_leaf_keeps_sibling_order() {
        let mut circuit = Circuit::default();
        for _ in 0..4 {
            circuit.insert(ComponentId::ROOT, Component::lamp_default());
        }
        assert!(circuit.delete(ComponentId(2)));
        assert_eq!(ids(circuit.root().children()), vec![1, 3, 4]);
        assert!(circuit.component(ComponentId(2)).is_none());
    }

    #[test]
    fn test_delete_hands_children_to_first_sibling() {
        let mut circuit = Circuit::default();
        let a = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let b = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let c = circuit.insert(a, Component::resistor_default()).unwrap();
        let d = circuit.insert(a, Component::resistor_default()).unwrap();

        assert!(circuit.delete(a));
        assert_eq!(ids(circuit.root().children()), vec![b.0]);
        assert_eq!(ids(circuit.component(b).unwrap().children()), vec![c.0, d.0]);
    }

    #[test]
    fn test_delete_replaces_first_sibling_children() {
        // root -> [a -> [c], b -> [d]]
        let mut circuit = Circuit::default();
        let a = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let b = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let c = circuit.insert(a, Component::resistor_default()).unwrap();
        let d = circuit.insert(b, Component::resistor_default()).unwrap();

        assert!(circuit.delete(b));
        assert_eq!(ids(circuit.component(a).unwrap().children()), vec![d.0]);
        assert!(circuit.component(c).is_none());
        assert_eq!(circuit.len(), 3);
    }

    #[test]
    fn test_with_root_rebuilds_non_source_root() {
        let root = Component::lamp(3.0, 0.5).with_child(Component::resistor_default());
        let circuit = Circuit::with_root(root, Layout::default());
        assert_eq!(circuit.root().kind(), ComponentKind::PowerSource);
        assert_eq!(circuit.root().id(), ComponentId::ROOT);
        assert_eq!(circuit.root().resistance, 3.0);
        assert_eq!(circuit.root().children()[0].id(), ComponentId(1));
        assert!(crate::circuit::validate_circuit(&circuit).is_ok());
    }

    #[test]
    fn test_delete_only_child_promotes_grandchildren() {
        let mut circuit = Circuit::default();
        let a = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let c = circuit.insert(a, Component::resistor_default()).unwrap();
        let d = circuit.insert(a, Component::resistor_default()).unwrap();

        assert!(circuit.delete(a));
        assert_eq!(ids(circuit.root().children()), vec![c.0, d.0]);
        assert_eq!(circuit.parent_of(c).unwrap().id(), ComponentId::ROOT);
    }

    #[test]
    fn test_delete_root_or_unknown_fails() {
        let mut circuit = Circuit::default();
        circuit.insert(ComponentId::ROOT, Component::lamp_default());
        let before = circuit.root().clone();

        assert!(!circuit.delete(ComponentId::ROOT));
        assert!(!circuit.delete(ComponentId(99)));
        assert_eq!(circuit.root(), &before);
    }

    #[test]
    fn test_parent_of_root_is_none() {
        let mut circuit = Circuit::default();
        circuit.insert(ComponentId::ROOT, Component::lamp_default());
        assert!(circuit.parent_of(ComponentId::ROOT).is_none());
        assert!(circuit.parent_of(ComponentId(7)).is_none());
    }

    #[test]
    fn test_spine_visits_first_children_only() {
        let mut circuit = Circuit::default();
        let a = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let b = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let c = circuit.insert(a, Component::lamp_default()).unwrap();
        circuit.insert(b, Component::lamp_default());

        let mut visited = Vec::new();
        circuit.for_each_spine_node(|n| visited.push(n.id()));
        assert_eq!(visited, vec![ComponentId::ROOT, a]);
        assert_eq!(circuit.last_spine_id(), c);
    }

    #[test]
    fn test_reset_consumption_reaches_every_component() {
        let mut circuit = Circuit::default();
        let a = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let b = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        let c = circuit.insert(b, Component::lamp_default()).unwrap();
        for id in [ComponentId::ROOT, a, b, c] {
            circuit.component_mut(id).unwrap().consumption = 3.0;
        }

        circuit.reset_consumption();
        for id in [ComponentId::ROOT, a, b, c] {
            assert_eq!(circuit.component(id).unwrap().consumption, 0.0);
        }
    }

    #[test]
    fn test_extent() {
        let mut circuit = Circuit::new(Layout::new(0.0, 0.0, 10.0));
        assert_eq!(circuit.extent(), (10.0, 10.0));
        let a = circuit.insert(ComponentId::ROOT, Component::lamp_default()).unwrap();
        circuit.insert(ComponentId::ROOT, Component::lamp_default());
        circuit.insert(a, Component::lamp_default());
        assert_eq!(circuit.extent(), (50.0, 20.0));
    }
}

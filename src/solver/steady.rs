//! Steady-state solve of a circuit tree.

use tracing::{debug, trace};

use super::finite_or_zero;
use crate::circuit::{Circuit, SolveSummary};
use crate::components::Component;

/// Parallel-equivalent resistance of a sibling group: `1 / Σ(1 / R)`.
///
/// A zero resistance shorts the block (result 0); a block of open switches
/// is itself open (result infinite).
pub fn parallel_resistance(children: &[Component]) -> f64 {
    let conductance: f64 = children.iter().map(Component::conductance).sum();
    1.0 / conductance
}

impl Circuit {
    /// Recompute resistance, voltage, current and failure for every
    /// component, and add `voltage * current * time` to each consumption.
    ///
    /// The network is read along the spine: each spine node's children form
    /// one parallel block, and the blocks sit in series with the source's own
    /// resistance. Branches below a non-first child do not contribute.
    ///
    /// A dead short (zero total resistance) reads as zero current and is
    /// never reported as an overload.
    ///
    /// `time == 0` is a reset: the source current is taken as zero for this
    /// call, so every voltage and current reads zero and nothing accumulates.
    pub fn simulate(&mut self, time: f64) -> SolveSummary {
        let mut resistance = self.root.resistance;
        let mut blocks = Vec::new();
        self.for_each_spine_node(|node| {
            let block = parallel_resistance(&node.children);
            trace!(depth = blocks.len(), block, "parallel block");
            blocks.push(block);
            resistance += block;
        });

        let current = if time == 0.0 {
            0.0
        } else {
            finite_or_zero(self.root.voltage / resistance)
        };

        let block_voltages: Vec<f64> = blocks
            .iter()
            .map(|block| finite_or_zero(block * current))
            .collect();

        let mut has_failed = false;
        let mut depth = 0;
        self.for_each_spine_node_mut(|node| {
            let voltage = block_voltages[depth];
            for child in &mut node.children {
                child.voltage = voltage;
                child.current = finite_or_zero(voltage / child.resistance);
                child.has_failed = child.current > child.max_current;
                has_failed |= child.has_failed;
                child.consumption += child.voltage * child.current * time;
            }
            depth += 1;
        });

        let root = &mut self.root;
        root.current = current;
        root.has_failed = current > root.max_current;
        has_failed |= root.has_failed;
        root.consumption += root.voltage * current * time;

        self.summary = SolveSummary {
            resistance,
            current,
            has_failed,
        };
        debug!(resistance, current, has_failed, blocks = blocks.len(), "circuit solved");
        self.summary
    }
}

//! Mapping screen positions to components.
//!
//! Drawing is left to the caller. A renderer only has to answer which
//! component, if any, occupies a point; [`HitTest`] is that capability.
//! [`GridHitTest`] implements it for the standard ladder layout:
//!
//! ```text
//! col:   0      1       2      3       4
//!      [SRC]--[ A ]----------[ C ]--
//!             [ B ]          [ D ]
//! ```
//!
//! The root sits in column 0. The children of the spine node at depth `d`
//! occupy column `2d + 1`, one row per child; even columns past the root are
//! wires.

use super::types::{ComponentId, Layout};
use crate::components::Component;

/// Answers "which component is drawn at (x, y)".
pub trait HitTest {
    fn hit(&self, root: &Component, layout: &Layout, x: f64, y: f64) -> Option<ComponentId>;
}

/// Hit test for the ladder layout described in the module docs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridHitTest;

impl HitTest for GridHitTest {
    fn hit(&self, root: &Component, layout: &Layout, x: f64, y: f64) -> Option<ComponentId> {
        let (col, row) = layout.cell_at(x, y)?;
        if col == 0 {
            return (row == 0).then_some(root.id());
        }
        if col % 2 == 0 {
            return None;
        }

        let mut node = root;
        for _ in 0..(col - 1) / 2 {
            node = node.children().first()?;
        }
        node.children().get(row).map(Component::id)
    }
}

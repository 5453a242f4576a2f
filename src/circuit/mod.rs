//! Circuit tree store.
//!
//! This module owns the live component tree. The [`Circuit`] struct hands
//! out component ids, performs insertion and deletion, answers lookups by id
//! and by screen position, and caches the result of the last solve.

mod layout;
mod tree;
mod types;
mod validate;

pub use layout::{GridHitTest, HitTest};
pub use tree::Circuit;
pub use types::*;
pub use validate::validate_circuit;

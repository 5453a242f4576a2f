//! Snapshots: plain serializable copies of a circuit, and rehydration.
//!
//! A snapshot is what a save file holds. Serialization erases the typed
//! variant of each component (only an integer kind code remains) and turns
//! infinite resistances into `null`. [`Circuit::rehydrate`] reverses both:
//! it rebuilds each node from the template of its kind and restores the
//! switch off-resistance sentinel.
//!
//! Where snapshots are stored is up to the caller; this module only
//! converts between JSON text and records.
//!
//! ```json
//! {
//!   "rootComponent": {
//!     "type": 0, "voltage": 10, "resistance": 0, "maxCurrent": 100,
//!     "children": [
//!       { "type": 2, "resistance": 2, "maxCurrent": 100 },
//!       { "type": 3, "resistance": null, "offResistance": null }
//!     ]
//!   }
//! }
//! ```

mod record;
mod rehydrate;

pub use record::{CircuitSnapshot, ComponentRecord};

use std::path::Path;

use crate::error::{CircuitError, Result};

/// Decode a snapshot from JSON text.
pub fn from_json(input: &str) -> Result<CircuitSnapshot> {
    serde_json::from_str(input).map_err(|source| CircuitError::SnapshotDecode { source })
}

/// Encode a snapshot as pretty-printed JSON.
pub fn to_json(snapshot: &CircuitSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).map_err(|source| CircuitError::SnapshotEncode { source })
}

/// Read and decode a snapshot file.
pub fn read_file(path: &Path) -> Result<CircuitSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| CircuitError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    from_json(&content)
}

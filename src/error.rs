//! Error types for the circuit tree simulator.
//!
//! Structural operations on the tree never fail with an error: lookups return
//! `Option`, deletion returns `bool`, and insertion under a missing parent is a
//! no-op. [`CircuitError`] covers the ambient operations around the core, such
//! as decoding snapshots, reading files and configuring the simulator.

use thiserror::Error;

/// Result type alias using [`CircuitError`].
pub type Result<T> = std::result::Result<T, CircuitError>;

/// Unified error type for all fallible circuit operations.
#[derive(Error, Debug)]
pub enum CircuitError {
    // ============ Snapshot Errors ============
    /// Snapshot JSON could not be decoded
    #[error("Failed to decode snapshot: {source}")]
    SnapshotDecode {
        #[source]
        source: serde_json::Error,
    },

    /// Snapshot could not be encoded to JSON
    #[error("Failed to encode snapshot: {source}")]
    SnapshotEncode {
        #[source]
        source: serde_json::Error,
    },

    // ============ Validation Errors ============
    /// Two live components share an id
    #[error("Duplicate component id {id}")]
    DuplicateId { id: u32 },

    /// The root is not a power source, or its id is not 0
    #[error("Invalid root component: {message}")]
    InvalidRoot { message: String },

    // ============ Simulation Errors ============
    /// Invalid simulation parameter
    #[error("Invalid simulation parameter: {message}")]
    InvalidSimulationParam { message: String },

    // ============ I/O Errors ============
    /// Error reading a snapshot file
    #[error("Failed to read snapshot file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CircuitError {
    /// Create an invalid root error
    pub fn invalid_root(message: impl Into<String>) -> Self {
        Self::InvalidRoot {
            message: message.into(),
        }
    }

    /// Create an invalid simulation parameter error
    pub fn invalid_param(message: impl Into<String>) -> Self {
        Self::InvalidSimulationParam {
            message: message.into(),
        }
    }
}

//! Engine-side error type

use thiserror::Error;

/// Failure reported by the engine for a node call
#[derive(Debug, Error)]
pub enum EngineError {
    /// A setter rejected the pushed value
    #[error("engine rejected {call}: {reason}")]
    Rejected {
        /// Name of the rejected setter
        call: &'static str,
        /// Engine-reported reason
        reason: String,
    },

    /// Node creation failed
    #[error("engine node creation failed: {0}")]
    CreateFailed(String),
}

//! Sync error taxonomy
//!
//! Three failure classes, all handled identically: propagate immediately,
//! abort the current entity's sync, let the render-preparation phase fail
//! visibly. A half-synced entity is never intentionally rendered, so
//! there is no recovery or retry path here.

use thiserror::Error;

use crate::engine::EngineError;
use crate::scene::{EntityKey, ProjectionType};

/// Failure of a sync pass for one entity
#[derive(Debug, Error)]
pub enum SyncError {
    /// Unrecoverable configuration: the entity reports a projection the
    /// engine's mode table has no mapping for
    #[error("unsupported camera projection: {0:?}")]
    UnsupportedProjection(ProjectionType),

    /// Engine-call failure: a setter rejected the pushed value
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Logic-invariant violation: a push was attempted against a key with
    /// no prior handle
    #[error("no engine handle for entity {0:?}")]
    MissingHandle(EntityKey),

    /// Registry-level invariant breach: a second handle was created for a
    /// key that already has a live one
    #[error("engine handle already exists for entity {0:?}")]
    DuplicateHandle(EntityKey),
}

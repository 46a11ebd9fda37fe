//! Sync layer - adapters between the host scene and the engine
//!
//! One full-state adapter per entity kind, a shared motion push, and the
//! [`SceneSynchronizer`] coordinator the host's update cycle drives. The
//! host guarantees passes for a given entity never run concurrently, so
//! nothing here locks; each pass is a direct, blocking sequence of
//! setter calls that either completes or aborts the render-preparation
//! phase.

mod camera;
mod context;
mod error;
mod light;
mod mesh;
mod motion;
mod object;
mod registry;

pub use camera::CameraSync;
pub use context::RenderContext;
pub use error::SyncError;
pub use light::LightSync;
pub use mesh::MeshSync;
pub use motion::{MotionEstimator, MotionInfo};
pub use object::ObjectSync;
pub use registry::{SceneNode, SceneRegistry};

use crate::scene::{EntityKey, SceneWorld};

/// One host change notification for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneUpdate {
    /// Identity of the changed entity
    pub key: EntityKey,

    /// The entity's geometry changed
    pub geometry: bool,

    /// The entity's transform changed
    pub transform: bool,
}

impl SceneUpdate {
    /// A geometry-change notification
    pub fn geometry(key: EntityKey) -> Self {
        Self {
            key,
            geometry: true,
            transform: false,
        }
    }

    /// A transform-change notification
    pub fn transform(key: EntityKey) -> Self {
        Self {
            key,
            geometry: false,
            transform: true,
        }
    }
}

/// Coordinator driving sync passes across the whole scene
///
/// Holds no per-entity state: the registry owns handle lifetime and the
/// estimator owns transform samples, so every pass reads the entities'
/// current values.
#[derive(Default)]
pub struct SceneSynchronizer;

impl SceneSynchronizer {
    /// Create a synchronizer
    pub fn new() -> Self {
        Self
    }

    /// Full-state push of every bridged entity in the world
    ///
    /// Entities without an attached adapter configuration (plugin not
    /// loaded, or detached) are left untouched.
    ///
    /// # Errors
    /// The first entity whose sync fails aborts the pass; the engine
    /// scene is left partial and the render-preparation phase as a whole
    /// fails.
    pub fn sync_scene(
        &self,
        context: &mut RenderContext,
        world: &SceneWorld,
        mut estimator: Option<&mut MotionEstimator>,
    ) -> Result<(), SyncError> {
        log::info!("Syncing scene: {} entities", world.len());

        for (key, entity) in world.iter() {
            if entity.adapter().is_none() {
                log::trace!("Skipping {}: not bridged", entity.name());
                continue;
            }
            let motion = match estimator {
                Some(ref mut est) => est.estimate(key, entity),
                None => None,
            };
            ObjectSync::sync(context, key, entity, motion.as_ref())?;
        }

        Ok(())
    }

    /// Apply a batch of incremental change notifications
    ///
    /// Notifications for entities that no longer exist drop their engine
    /// node. Returns whether the engine scene changed, so the caller can
    /// decide whether to restart rendering.
    ///
    /// # Errors
    /// The first failing update aborts the batch.
    pub fn sync_updates(
        &self,
        context: &mut RenderContext,
        world: &SceneWorld,
        updates: &[SceneUpdate],
    ) -> Result<bool, SyncError> {
        let mut is_updated = false;

        for update in updates {
            let Some(entity) = world.get(update.key) else {
                is_updated |= context.remove(update.key);
                continue;
            };
            if entity.adapter().is_none() {
                continue;
            }
            is_updated |= ObjectSync::sync_update(
                context,
                update.key,
                entity,
                update.geometry,
                update.transform,
            )?;
        }

        Ok(is_updated)
    }
}

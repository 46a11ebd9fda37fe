//! Object adapter
//!
//! Entry point for syncing one scene object: gates on the entity kind,
//! delegates the payload push to the kind-specific adapter, then applies
//! motion vectors. Also carries the incremental `sync_update` path used
//! by the viewport's change notifications.

use crate::scene::{EntityData, EntityKey, SceneEntity};
use super::camera::CameraSync;
use super::context::RenderContext;
use super::error::SyncError;
use super::light::LightSync;
use super::mesh::MeshSync;
use super::motion::MotionInfo;

/// Adapter pushing scene objects into the engine
pub struct ObjectSync;

impl ObjectSync {
    /// Full-state push of one entity and its payload
    ///
    /// Entities without renderable payload (curves, empties) are skipped
    /// without touching the engine. Motion vectors, when provided, are
    /// pushed against the object node the payload sync created; camera
    /// entities model motion through exposure instead and take no motion
    /// push.
    ///
    /// # Errors
    /// Any error from the payload adapter; [`SyncError::MissingHandle`]
    /// if motion is pushed against a key whose node was never created.
    pub fn sync(
        context: &mut RenderContext,
        key: EntityKey,
        entity: &SceneEntity,
        motion: Option<&MotionInfo>,
    ) -> Result<(), SyncError> {
        log::debug!("Syncing object: {} ({:?})", entity.name(), entity.kind());

        match entity.data() {
            EntityData::Mesh => MeshSync::sync(context, key, entity)?,
            EntityData::Light(props) => LightSync::sync(context, key, entity, props)?,
            EntityData::Camera(props) => {
                CameraSync::sync(context, key, entity, props)?;
                return Ok(());
            }
            EntityData::Curve | EntityData::Empty => {
                log::trace!("Skipping {}: no renderable payload", entity.name());
                return Ok(());
            }
        }

        Self::sync_motion(context, key, motion)
    }

    /// Push motion vectors against an already-created object node
    ///
    /// # Errors
    /// [`SyncError::MissingHandle`] if no node exists for the key. The
    /// payload sync must run first, so absence is a logic error, not a
    /// user error.
    pub fn sync_motion(
        context: &mut RenderContext,
        key: EntityKey,
        motion: Option<&MotionInfo>,
    ) -> Result<(), SyncError> {
        let Some(motion) = motion else {
            return Ok(());
        };

        let node = context.object(key)?;
        let linear = motion.linear_velocity;
        let angular = motion.angular_momentum;
        let scale = motion.momentum_scale;
        node.set_linear_motion(linear.x, linear.y, linear.z)?;
        node.set_angular_motion(angular.x, angular.y, angular.z)?;
        node.set_scale_motion(scale.x, scale.y, scale.z)?;

        Ok(())
    }

    /// Incremental re-sync driven by the host's change flags
    ///
    /// Only mesh and light entities participate; every other kind reports
    /// no work regardless of the flags. Returns whether the engine scene
    /// actually changed, letting the caller decide on a re-render.
    ///
    /// # Errors
    /// Any error from the kind-specific incremental path.
    pub fn sync_update(
        context: &mut RenderContext,
        key: EntityKey,
        entity: &SceneEntity,
        is_updated_geometry: bool,
        is_updated_transform: bool,
    ) -> Result<bool, SyncError> {
        match entity.data() {
            EntityData::Mesh => {
                log::debug!(
                    "Updating object: {}, geometry={is_updated_geometry}, transform={is_updated_transform}",
                    entity.name()
                );
                MeshSync::sync_update(context, key, entity, is_updated_geometry, is_updated_transform)
            }
            EntityData::Light(props) => {
                log::debug!(
                    "Updating object: {}, geometry={is_updated_geometry}, transform={is_updated_transform}",
                    entity.name()
                );
                LightSync::sync_update(
                    context,
                    key,
                    entity,
                    props,
                    is_updated_geometry,
                    is_updated_transform,
                )
            }
            _ => Ok(false),
        }
    }
}

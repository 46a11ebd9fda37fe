//! Light adapter
//!
//! Creates the engine object node for a light entity and pushes name,
//! transform, color, and power. Lights have no partial incremental path;
//! any change flag re-pushes the full parameter set.

use crate::scene::{EntityKey, LightProperties, SceneEntity};
use super::context::RenderContext;
use super::error::SyncError;

/// Adapter pushing light entities into the engine
pub struct LightSync;

impl LightSync {
    /// Push the entity's current light state to its engine node
    ///
    /// Creates the node on first sync and reuses it afterwards.
    ///
    /// # Errors
    /// Engine errors from node creation or any setter.
    pub fn sync(
        context: &mut RenderContext,
        key: EntityKey,
        entity: &SceneEntity,
        props: &LightProperties,
    ) -> Result<(), SyncError> {
        log::debug!("Syncing light: {}", entity.name());

        let node = context.light(key)?;
        node.set_name(entity.name())?;
        node.set_transform(entity.transform().to_matrix())?;
        node.set_color(props.color.x, props.color.y, props.color.z)?;
        node.set_power(props.power)?;

        Ok(())
    }

    /// Incremental re-sync driven by change flags
    ///
    /// Returns whether any work was performed.
    ///
    /// # Errors
    /// [`SyncError::MissingHandle`] if the entity was never fully synced;
    /// engine errors from any setter.
    pub fn sync_update(
        context: &mut RenderContext,
        key: EntityKey,
        entity: &SceneEntity,
        props: &LightProperties,
        is_updated_geometry: bool,
        is_updated_transform: bool,
    ) -> Result<bool, SyncError> {
        if !is_updated_geometry && !is_updated_transform {
            return Ok(false);
        }

        let node = context.object(key)?;
        node.set_name(entity.name())?;
        node.set_transform(entity.transform().to_matrix())?;
        node.set_color(props.color.x, props.color.y, props.color.z)?;
        node.set_power(props.power)?;

        Ok(true)
    }
}

//! Mesh adapter
//!
//! Creates the engine object node for a mesh entity and pushes the
//! entity-level fields: name, transform, ray visibility, shadow catching,
//! subdivision. Geometry itself is owned by the host's mesh collaborator
//! and never passes through this layer.

use crate::engine::{SubdivisionBoundary, SubdivisionSettings, VisibilityFlags};
use crate::scene::{BoundaryType, EntityKey, ObjectProperties, SceneEntity};
use super::context::RenderContext;
use super::error::SyncError;

/// Adapter pushing mesh entities into the engine
pub struct MeshSync;

impl MeshSync {
    /// Push the entity's current state to its engine node
    ///
    /// Creates the node on first sync and reuses it afterwards.
    ///
    /// # Errors
    /// Engine errors from node creation or any setter.
    pub fn sync(
        context: &mut RenderContext,
        key: EntityKey,
        entity: &SceneEntity,
    ) -> Result<(), SyncError> {
        log::debug!("Syncing mesh: {}", entity.name());

        let node = context.mesh(key)?;
        node.set_name(entity.name())?;
        node.set_transform(entity.transform().to_matrix())?;

        let props = entity.properties();
        node.set_visibility(visibility_flags(props))?;
        node.set_shadow_catcher(props.shadow_catcher)?;
        node.set_subdivision(subdivision_settings(props))?;

        Ok(())
    }

    /// Incremental re-sync driven by change flags
    ///
    /// A geometry change re-pushes the full node state; a transform-only
    /// change pushes just the transform. Returns whether any work was
    /// performed.
    ///
    /// # Errors
    /// [`SyncError::MissingHandle`] if the entity was never fully synced;
    /// engine errors from any setter.
    pub fn sync_update(
        context: &mut RenderContext,
        key: EntityKey,
        entity: &SceneEntity,
        is_updated_geometry: bool,
        is_updated_transform: bool,
    ) -> Result<bool, SyncError> {
        if !is_updated_geometry && !is_updated_transform {
            return Ok(false);
        }

        let node = context.object(key)?;
        if is_updated_geometry {
            let props = entity.properties();
            node.set_name(entity.name())?;
            node.set_transform(entity.transform().to_matrix())?;
            node.set_visibility(visibility_flags(props))?;
            node.set_shadow_catcher(props.shadow_catcher)?;
            node.set_subdivision(subdivision_settings(props))?;
        } else {
            node.set_transform(entity.transform().to_matrix())?;
        }

        Ok(true)
    }
}

/// Map the host's visibility booleans to the engine flag set
pub(crate) fn visibility_flags(props: &ObjectProperties) -> VisibilityFlags {
    let mut flags = VisibilityFlags::empty();
    if props.visible_primary {
        flags |= VisibilityFlags::PRIMARY;
    }
    if props.visible_reflections {
        flags |= VisibilityFlags::REFLECTION;
    }
    if props.casts_shadows {
        flags |= VisibilityFlags::SHADOW;
    }
    flags
}

/// Map the host's subdivision fields to engine settings, `None` when disabled
pub(crate) fn subdivision_settings(props: &ObjectProperties) -> Option<SubdivisionSettings> {
    if !props.subdivision {
        return None;
    }
    let boundary = match props.subdivision_boundary {
        BoundaryType::EdgeCorner => SubdivisionBoundary::EdgeAndCorner,
        BoundaryType::Edge => SubdivisionBoundary::EdgeOnly,
    };
    Some(SubdivisionSettings {
        factor: props.subdivision_factor,
        boundary,
        crease_weight: props.subdivision_crease_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::trace::{TraceCall, TraceEngine};
    use crate::scene::SceneWorld;

    fn mesh_world() -> (SceneWorld, EntityKey) {
        let mut world = SceneWorld::new();
        let key = world.spawn(SceneEntity::mesh("mesh"));
        (world, key)
    }

    #[test]
    fn test_full_sync_pushes_all_fields() {
        let (mut world, key) = mesh_world();
        {
            let props = world.get_mut(key).unwrap().properties_mut();
            props.visible_reflections = false;
            props.subdivision = true;
            props.subdivision_boundary = BoundaryType::Edge;
        }

        let (engine, log) = TraceEngine::new();
        let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
        MeshSync::sync(&mut context, key, world.get(key).unwrap()).unwrap();

        let calls = log.calls_for(key);
        assert_eq!(calls[0], TraceCall::CreateMesh(key));
        assert!(calls.contains(&TraceCall::SetVisibility(
            key,
            VisibilityFlags::PRIMARY | VisibilityFlags::SHADOW
        )));
        assert!(calls.contains(&TraceCall::SetSubdivision(
            key,
            Some(SubdivisionSettings {
                factor: 1.0,
                boundary: SubdivisionBoundary::EdgeOnly,
                crease_weight: 1.0,
            })
        )));
    }

    #[test]
    fn test_subdivision_disabled_pushes_none() {
        let (world, key) = mesh_world();

        let (engine, log) = TraceEngine::new();
        let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
        MeshSync::sync(&mut context, key, world.get(key).unwrap()).unwrap();

        assert!(log
            .calls_for(key)
            .contains(&TraceCall::SetSubdivision(key, None)));
    }

    #[test]
    fn test_transform_only_update_pushes_transform_only() {
        let (world, key) = mesh_world();

        let (engine, log) = TraceEngine::new();
        let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
        MeshSync::sync(&mut context, key, world.get(key).unwrap()).unwrap();
        log.clear();

        let updated =
            MeshSync::sync_update(&mut context, key, world.get(key).unwrap(), false, true).unwrap();

        assert!(updated);
        let calls = log.calls_for(key);
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], TraceCall::SetTransform(..)));
    }

    #[test]
    fn test_update_without_flags_is_a_no_op() {
        let (world, key) = mesh_world();

        let (engine, log) = TraceEngine::new();
        let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
        MeshSync::sync(&mut context, key, world.get(key).unwrap()).unwrap();
        log.clear();

        let updated =
            MeshSync::sync_update(&mut context, key, world.get(key).unwrap(), false, false)
                .unwrap();

        assert!(!updated);
        assert!(log.is_empty());
    }

    #[test]
    fn test_update_before_sync_is_a_logic_error() {
        let (world, key) = mesh_world();

        let (engine, _log) = TraceEngine::new();
        let mut context = RenderContext::new(Box::new(engine), 1920, 1080);

        let result =
            MeshSync::sync_update(&mut context, key, world.get(key).unwrap(), true, false);
        assert!(matches!(result, Err(SyncError::MissingHandle(k)) if k == key));
    }
}

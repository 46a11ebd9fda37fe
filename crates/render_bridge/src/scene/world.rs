//! Scene world - entity storage and identity
//!
//! The world owns every [`SceneEntity`] and hands out stable generational
//! keys at creation. The key, not any host-internal reference, is the
//! identity used by the registry on the engine side, so handles survive
//! host-side reallocation and a reused slot can never alias a dead entity.

use slotmap::{SlotMap, new_key_type};

use crate::config::RenderAdapterConfig;
use super::entity::SceneEntity;

new_key_type! {
    /// Stable generational identity for a scene entity
    pub struct EntityKey;
}

/// Container for all host-side entities
pub struct SceneWorld {
    entities: SlotMap<EntityKey, SceneEntity>,
    adapter_defaults: Option<RenderAdapterConfig>,
}

impl SceneWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            entities: SlotMap::with_key(),
            adapter_defaults: None,
        }
    }

    /// Add an entity, assigning its identity key
    ///
    /// If adapter defaults are installed (plugin loaded), the entity is
    /// attached to the bridge at construction.
    pub fn spawn(&mut self, mut entity: SceneEntity) -> EntityKey {
        if let Some(defaults) = self.adapter_defaults {
            entity.attach_adapter(defaults);
        }
        let key = self.entities.insert(entity);
        log::debug!("Spawned entity {key:?}");
        key
    }

    /// Remove an entity, returning it if it existed
    pub fn despawn(&mut self, key: EntityKey) -> Option<SceneEntity> {
        self.entities.remove(key)
    }

    /// Look up an entity
    pub fn get(&self, key: EntityKey) -> Option<&SceneEntity> {
        self.entities.get(key)
    }

    /// Look up an entity mutably (host editing only)
    pub fn get_mut(&mut self, key: EntityKey) -> Option<&mut SceneEntity> {
        self.entities.get_mut(key)
    }

    /// Iterate over all entities with their keys
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &SceneEntity)> {
        self.entities.iter()
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Install adapter defaults and attach them to every existing entity
    pub fn install_adapter_defaults(&mut self, defaults: RenderAdapterConfig) {
        for (_, entity) in self.entities.iter_mut() {
            entity.attach_adapter(defaults);
        }
        self.adapter_defaults = Some(defaults);
    }

    /// Remove adapter defaults and detach every entity from the bridge
    pub fn clear_adapter_defaults(&mut self) {
        for (_, entity) in self.entities.iter_mut() {
            entity.detach_adapter();
        }
        self.adapter_defaults = None;
    }

    /// Currently installed adapter defaults, if any
    pub fn adapter_defaults(&self) -> Option<&RenderAdapterConfig> {
        self.adapter_defaults.as_ref()
    }
}

impl Default for SceneWorld {
    fn default() -> Self {
        Self::new()
    }
}

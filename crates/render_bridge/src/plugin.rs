//! Plugin lifecycle
//!
//! Process-wide registration of the bridge with the host: loading
//! installs the adapter defaults into the world so entities participate
//! in bridging from construction, unloading detaches everything. This
//! replaces runtime property injection with explicit composition; an
//! entity either carries its adapter configuration or it is invisible to
//! the bridge.

use crate::config::{BridgeConfig, RenderAdapterConfig};
use crate::scene::SceneWorld;

/// Bridge registration handle
pub struct BridgePlugin {
    defaults: RenderAdapterConfig,
}

impl BridgePlugin {
    /// Create a plugin with explicit adapter defaults
    pub fn new(defaults: RenderAdapterConfig) -> Self {
        Self { defaults }
    }

    /// Create a plugin from the bridge configuration
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::new(config.adapter)
    }

    /// Register with the host: attach adapter defaults to the world
    pub fn load(&self, world: &mut SceneWorld) {
        log::info!("Register");
        world.install_adapter_defaults(self.defaults);
    }

    /// Unregister from the host: detach every entity from the bridge
    pub fn unload(&self, world: &mut SceneWorld) {
        log::info!("Unregister");
        world.clear_adapter_defaults();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneEntity;

    #[test]
    fn test_load_unload_cycle() {
        let mut world = SceneWorld::new();
        let key = world.spawn(SceneEntity::mesh("mesh"));

        let plugin = BridgePlugin::new(RenderAdapterConfig::default());
        plugin.load(&mut world);
        assert!(world.adapter_defaults().is_some());
        assert!(world.get(key).unwrap().adapter().is_some());

        plugin.unload(&mut world);
        assert!(world.adapter_defaults().is_none());
        assert!(world.get(key).unwrap().adapter().is_none());
    }

    #[test]
    fn test_config_defaults_reach_entities() {
        let mut config = BridgeConfig::default();
        config.adapter.motion_blur = false;

        let mut world = SceneWorld::new();
        BridgePlugin::from_config(&config).load(&mut world);
        let key = world.spawn(SceneEntity::mesh("mesh"));

        assert!(!world.get(key).unwrap().properties().motion_blur);
    }
}

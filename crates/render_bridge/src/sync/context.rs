//! Render context
//!
//! Bundles the engine backend, the handle registry, and the output
//! resolution for one render-preparation phase. The reuse-or-create
//! accessors are the only path adapters take to a node, which is what
//! keeps handle creation idempotent per key.

use crate::engine::{CameraNode, EngineBackend, ObjectNode};
use crate::scene::EntityKey;
use super::error::SyncError;
use super::registry::{SceneNode, SceneRegistry};

/// Engine access point for one render-preparation phase
pub struct RenderContext {
    backend: Box<dyn EngineBackend>,
    registry: SceneRegistry,
    width: u32,
    height: u32,
}

impl RenderContext {
    /// Create a context over a backend with the given output resolution
    pub fn new(backend: Box<dyn EngineBackend>, width: u32, height: u32) -> Self {
        log::info!("Render context created: {width}x{height}");
        Self {
            backend,
            registry: SceneRegistry::new(),
            width,
            height,
        }
    }

    /// Output width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Change the output resolution
    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Output aspect ratio (width / height)
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Camera node for this key, creating it on first use
    ///
    /// # Errors
    /// [`SyncError::MissingHandle`] if the key is registered as a
    /// non-camera node; engine errors from node creation.
    pub fn camera(&mut self, key: EntityKey) -> Result<&mut dyn CameraNode, SyncError> {
        if !self.registry.contains(key) {
            let node = self.backend.create_camera(key)?;
            self.registry.insert(key, SceneNode::Camera(node))?;
        }
        self.registry
            .camera_mut(key)
            .ok_or(SyncError::MissingHandle(key))
    }

    /// Mesh node for this key, creating it on first use
    ///
    /// # Errors
    /// [`SyncError::MissingHandle`] if the key is registered as a
    /// non-object node; engine errors from node creation.
    pub fn mesh(&mut self, key: EntityKey) -> Result<&mut dyn ObjectNode, SyncError> {
        if !self.registry.contains(key) {
            let node = self.backend.create_mesh(key)?;
            self.registry.insert(key, SceneNode::Object(node))?;
        }
        self.registry
            .object_mut(key)
            .ok_or(SyncError::MissingHandle(key))
    }

    /// Light node for this key, creating it on first use
    ///
    /// # Errors
    /// [`SyncError::MissingHandle`] if the key is registered as a
    /// non-object node; engine errors from node creation.
    pub fn light(&mut self, key: EntityKey) -> Result<&mut dyn ObjectNode, SyncError> {
        if !self.registry.contains(key) {
            let node = self.backend.create_light(key)?;
            self.registry.insert(key, SceneNode::Object(node))?;
        }
        self.registry
            .object_mut(key)
            .ok_or(SyncError::MissingHandle(key))
    }

    /// Already-created object node for this key
    ///
    /// Lookup only; used by pushes that require the payload sync to have
    /// created the node earlier in the same pass.
    ///
    /// # Errors
    /// [`SyncError::MissingHandle`] if no object node exists for the key.
    pub fn object(&mut self, key: EntityKey) -> Result<&mut dyn ObjectNode, SyncError> {
        self.registry
            .object_mut(key)
            .ok_or(SyncError::MissingHandle(key))
    }

    /// Drop the engine node for a deleted entity; true if one existed
    pub fn remove(&mut self, key: EntityKey) -> bool {
        self.registry.remove(key).is_some()
    }

    /// The handle registry
    pub fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    /// The handle registry, mutable
    pub fn registry_mut(&mut self) -> &mut SceneRegistry {
        &mut self.registry
    }
}

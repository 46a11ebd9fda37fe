//! Engine handle registry
//!
//! Process-wide owner of the engine-side nodes, keyed by stable entity
//! identity. At most one live node per key: re-sync reuses the node it
//! finds here, and inserting over a live key is reported as a registry
//! bug rather than silently replacing the node.

use slotmap::SecondaryMap;

use crate::engine::{CameraNode, ObjectNode};
use crate::scene::EntityKey;
use super::error::SyncError;

/// A registered engine node
pub enum SceneNode {
    /// Camera node handle
    Camera(Box<dyn CameraNode>),
    /// Object (mesh or light) node handle
    Object(Box<dyn ObjectNode>),
}

/// Owner of all live engine handles, keyed by entity identity
#[derive(Default)]
pub struct SceneRegistry {
    nodes: SecondaryMap<EntityKey, SceneNode>,
}

impl SceneRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node for a key
    ///
    /// # Errors
    /// Returns [`SyncError::DuplicateHandle`] if the key already has a
    /// live node.
    pub fn insert(&mut self, key: EntityKey, node: SceneNode) -> Result<(), SyncError> {
        if self.nodes.contains_key(key) {
            return Err(SyncError::DuplicateHandle(key));
        }
        self.nodes.insert(key, node);
        Ok(())
    }

    /// Whether a node is registered for this key
    pub fn contains(&self, key: EntityKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// The camera node for this key, if one is registered
    pub fn camera_mut(&mut self, key: EntityKey) -> Option<&mut dyn CameraNode> {
        match self.nodes.get_mut(key) {
            Some(SceneNode::Camera(node)) => Some(node.as_mut()),
            _ => None,
        }
    }

    /// The object node for this key, if one is registered
    pub fn object_mut(&mut self, key: EntityKey) -> Option<&mut dyn ObjectNode> {
        match self.nodes.get_mut(key) {
            Some(SceneNode::Object(node)) => Some(node.as_mut()),
            _ => None,
        }
    }

    /// Unregister and return the node for this key
    pub fn remove(&mut self, key: EntityKey) -> Option<SceneNode> {
        self.nodes.remove(key)
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes are registered
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

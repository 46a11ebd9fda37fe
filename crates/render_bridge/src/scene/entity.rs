//! Scene entity model
//!
//! A [`SceneEntity`] is the host-owned editable object the adapters read
//! from. The kind-specific payload lives in [`EntityData`], a closed sum
//! type, so a camera entity always carries camera properties and an
//! entity can never report a kind it has no data for.

use crate::config::RenderAdapterConfig;
use crate::foundation::math::Transform;
use super::properties::{CameraProperties, LightProperties, ObjectProperties};

/// Entity kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Mesh object
    Mesh,
    /// Camera
    Camera,
    /// Light source
    Light,
    /// Curve object (no renderable payload)
    Curve,
    /// Empty / helper object (no renderable payload)
    Empty,
}

/// Kind-specific entity payload
#[derive(Debug, Clone, PartialEq)]
pub enum EntityData {
    /// Mesh payload; geometry itself is owned by the host's mesh collaborator
    Mesh,
    /// Camera payload
    Camera(CameraProperties),
    /// Light payload
    Light(LightProperties),
    /// Curve payload, never synced
    Curve,
    /// No payload
    Empty,
}

impl EntityData {
    /// The kind tag for this payload
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Mesh => EntityKind::Mesh,
            Self::Camera(_) => EntityKind::Camera,
            Self::Light(_) => EntityKind::Light,
            Self::Curve => EntityKind::Curve,
            Self::Empty => EntityKind::Empty,
        }
    }
}

/// Host-side editable object
///
/// Owned by the host application; adapters only read it. The optional
/// adapter configuration marks the entity as participating in render
/// bridging and is attached at construction (or when the plugin loads),
/// never injected reflectively at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneEntity {
    name: String,
    transform: Transform,
    properties: ObjectProperties,
    data: EntityData,
    adapter: Option<RenderAdapterConfig>,
}

impl SceneEntity {
    /// Create an entity from a name and kind payload
    pub fn new(name: impl Into<String>, data: EntityData) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            properties: ObjectProperties::default(),
            data,
            adapter: None,
        }
    }

    /// Create a mesh entity
    pub fn mesh(name: impl Into<String>) -> Self {
        Self::new(name, EntityData::Mesh)
    }

    /// Create a camera entity with default camera properties
    pub fn camera(name: impl Into<String>) -> Self {
        Self::new(name, EntityData::Camera(CameraProperties::default()))
    }

    /// Create a light entity with default light properties
    pub fn light(name: impl Into<String>) -> Self {
        Self::new(name, EntityData::Light(LightProperties::default()))
    }

    /// Create a curve entity
    pub fn curve(name: impl Into<String>) -> Self {
        Self::new(name, EntityData::Curve)
    }

    /// Create an empty entity
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, EntityData::Empty)
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entity kind tag
    pub fn kind(&self) -> EntityKind {
        self.data.kind()
    }

    /// World transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable world transform (host editing only)
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Replace the world transform (host editing only)
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Object-level editable properties
    pub fn properties(&self) -> &ObjectProperties {
        &self.properties
    }

    /// Mutable object-level properties (host editing only)
    pub fn properties_mut(&mut self) -> &mut ObjectProperties {
        &mut self.properties
    }

    /// Kind-specific payload
    pub fn data(&self) -> &EntityData {
        &self.data
    }

    /// Camera payload, if this is a camera entity
    pub fn camera_properties(&self) -> Option<&CameraProperties> {
        match &self.data {
            EntityData::Camera(props) => Some(props),
            _ => None,
        }
    }

    /// Mutable camera payload (host editing only)
    pub fn camera_properties_mut(&mut self) -> Option<&mut CameraProperties> {
        match &mut self.data {
            EntityData::Camera(props) => Some(props),
            _ => None,
        }
    }

    /// Light payload, if this is a light entity
    pub fn light_properties(&self) -> Option<&LightProperties> {
        match &self.data {
            EntityData::Light(props) => Some(props),
            _ => None,
        }
    }

    /// Mutable light payload (host editing only)
    pub fn light_properties_mut(&mut self) -> Option<&mut LightProperties> {
        match &mut self.data {
            EntityData::Light(props) => Some(props),
            _ => None,
        }
    }

    /// Attached adapter configuration, if the entity participates in bridging
    pub fn adapter(&self) -> Option<&RenderAdapterConfig> {
        self.adapter.as_ref()
    }

    /// Attach adapter configuration, seeding the motion-blur defaults
    ///
    /// Attaching resets the motion-blur fields to the configured defaults,
    /// matching the semantics of a freshly registered property bag.
    pub fn attach_adapter(&mut self, config: RenderAdapterConfig) {
        self.properties.motion_blur = config.motion_blur;
        self.properties.set_motion_blur_scale(config.motion_blur_scale);
        self.properties.set_motion_blur_exposure(config.motion_blur_exposure);
        if let EntityData::Camera(props) = &mut self.data {
            props.motion_blur = config.motion_blur;
            props.set_motion_blur_exposure(config.motion_blur_exposure);
        }
        self.adapter = Some(config);
    }

    /// Detach adapter configuration; the entity stops participating
    pub fn detach_adapter(&mut self) {
        self.adapter = None;
    }
}

//! Engine seam - the outbound interface toward the renderer
//!
//! The ray-tracing engine is opaque: the bridge reaches it only through
//! [`EngineBackend`] (node creation) and the node traits ([`CameraNode`],
//! [`ObjectNode`]). Every setter is fire-and-forget; the only thing the
//! bridge consumes from a call is its error, which aborts the current
//! entity's sync pass.

mod error;
pub mod trace;

pub use error::EngineError;

use bitflags::bitflags;

use crate::foundation::math::Mat4;
use crate::scene::EntityKey;

/// Camera projection mode as the engine models it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Parallel projection
    Orthographic,
    /// Pinhole perspective projection
    Perspective,
    /// Latitude-longitude 360 panorama
    LatitudeLongitude360,
}

/// Subdivision boundary interpolation as the engine models it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubdivisionBoundary {
    /// Interpolate edges and corners
    EdgeAndCorner,
    /// Interpolate edges only
    EdgeOnly,
}

/// Subdivision parameters pushed to an object node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubdivisionSettings {
    /// Adaptive factor in pixels
    pub factor: f32,
    /// Boundary interpolation
    pub boundary: SubdivisionBoundary,
    /// Crease weight
    pub crease_weight: f32,
}

bitflags! {
    /// Ray-visibility flag set understood by the engine
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VisibilityFlags: u32 {
        /// Visible to primary (camera) rays
        const PRIMARY = 1 << 0;
        /// Visible in reflection rays
        const REFLECTION = 1 << 1;
        /// Casts shadows
        const SHADOW = 1 << 2;
    }
}

/// Handle to an engine-side camera node
pub trait CameraNode {
    /// Set the display name
    fn set_name(&mut self, name: &str) -> Result<(), EngineError>;

    /// Set the world transform
    fn set_transform(&mut self, transform: Mat4) -> Result<(), EngineError>;

    /// Set the near/far clip plane pair
    fn set_clip_plane(&mut self, near: f32, far: f32) -> Result<(), EngineError>;

    /// Set the lens shift pair
    fn set_lens_shift(&mut self, x: f32, y: f32) -> Result<(), EngineError>;

    /// Set the projection mode
    fn set_mode(&mut self, mode: CameraMode) -> Result<(), EngineError>;

    /// Set the focal length in millimeters
    fn set_focal_length(&mut self, millimeters: f32) -> Result<(), EngineError>;

    /// Set the sensor dimensions in millimeters
    fn set_sensor_size(&mut self, width: f32, height: f32) -> Result<(), EngineError>;
}

/// Handle to an engine-side object (mesh or light) node
pub trait ObjectNode {
    /// Set the display name
    fn set_name(&mut self, name: &str) -> Result<(), EngineError>;

    /// Set the world transform
    fn set_transform(&mut self, transform: Mat4) -> Result<(), EngineError>;

    /// Set the ray-visibility flags
    fn set_visibility(&mut self, flags: VisibilityFlags) -> Result<(), EngineError>;

    /// Mark the object as a shadow catcher
    fn set_shadow_catcher(&mut self, enabled: bool) -> Result<(), EngineError>;

    /// Set subdivision parameters; `None` disables subdivision
    fn set_subdivision(&mut self, settings: Option<SubdivisionSettings>) -> Result<(), EngineError>;

    /// Set the emission color (light nodes)
    fn set_color(&mut self, r: f32, g: f32, b: f32) -> Result<(), EngineError>;

    /// Set the radiant power in watts (light nodes)
    fn set_power(&mut self, watts: f32) -> Result<(), EngineError>;

    /// Set the linear motion vector for motion blur
    fn set_linear_motion(&mut self, x: f32, y: f32, z: f32) -> Result<(), EngineError>;

    /// Set the angular motion vector for motion blur
    fn set_angular_motion(&mut self, x: f32, y: f32, z: f32) -> Result<(), EngineError>;

    /// Set the scale motion vector for motion blur
    fn set_scale_motion(&mut self, x: f32, y: f32, z: f32) -> Result<(), EngineError>;
}

/// Factory side of the engine seam
///
/// One node is created per synced entity; the bridge's registry owns the
/// returned boxes and guarantees at most one live node per key.
pub trait EngineBackend {
    /// Create a camera node for the given entity identity
    fn create_camera(&mut self, key: EntityKey) -> Result<Box<dyn CameraNode>, EngineError>;

    /// Create a mesh node for the given entity identity
    fn create_mesh(&mut self, key: EntityKey) -> Result<Box<dyn ObjectNode>, EngineError>;

    /// Create a light node for the given entity identity
    fn create_light(&mut self, key: EntityKey) -> Result<Box<dyn ObjectNode>, EngineError>;
}

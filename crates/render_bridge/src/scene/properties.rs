//! Editable property bags
//!
//! Pure data types mirroring what the host's editing UI exposes. Numeric
//! constraints (non-negative factors, weights, exposures) are enforced here
//! through the clamping setters; adapters push values as-is and rely on
//! these constraints instead of re-validating.

use crate::foundation::math::Vec3;

/// Camera projection type as the host models it
///
/// A closed set validated at entity construction. The engine supports a
/// subset; mapping happens in the camera adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionType {
    /// Parallel projection
    Orthographic,
    /// Standard pinhole perspective
    Perspective,
    /// Equirectangular 360 panorama
    PanoramicEquirect,
    /// Fisheye panorama (no engine equivalent)
    PanoramicFisheye,
}

/// How the sensor frame adapts to the output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorFit {
    /// Fit the larger output dimension
    Auto,
    /// Fit the sensor width to the horizontal output dimension
    Horizontal,
    /// Fit the sensor height to the vertical output dimension
    Vertical,
}

/// Subdivision boundary interpolation type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryType {
    /// Interpolate edges and corners
    EdgeCorner,
    /// Interpolate edges only
    Edge,
}

/// Per-object editable fields read by the object adapter
///
/// Lifecycle: defaulted when the entity is created, mutated only through
/// the host's editing UI, read-only from the adapter's perspective.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperties {
    /// Object is visible to primary (camera) rays
    pub visible_primary: bool,

    /// Object is visible in reflections
    pub visible_reflections: bool,

    /// Object casts shadows
    pub casts_shadows: bool,

    /// Object acts as a shadow catcher
    pub shadow_catcher: bool,

    /// Motion blur enabled for this object
    pub motion_blur: bool,

    /// Motion blur scale (>= 0)
    pub motion_blur_scale: f32,

    /// Motion blur exposure (>= 0)
    pub motion_blur_exposure: f32,

    /// Subdivision enabled for this object
    pub subdivision: bool,

    /// Adaptive subdivision factor in pixels (>= 0); finer for lower values
    pub subdivision_factor: f32,

    /// Subdivision boundary interpolation
    pub subdivision_boundary: BoundaryType,

    /// Subdivision crease weight (>= 0)
    pub subdivision_crease_weight: f32,
}

impl Default for ObjectProperties {
    fn default() -> Self {
        Self {
            visible_primary: true,
            visible_reflections: true,
            casts_shadows: true,
            shadow_catcher: false,
            motion_blur: true,
            motion_blur_scale: 1.0,
            motion_blur_exposure: 1.0,
            subdivision: false,
            subdivision_factor: 1.0,
            subdivision_boundary: BoundaryType::EdgeCorner,
            subdivision_crease_weight: 1.0,
        }
    }
}

impl ObjectProperties {
    /// Set the motion blur scale, clamped to be non-negative
    pub fn set_motion_blur_scale(&mut self, scale: f32) {
        self.motion_blur_scale = scale.max(0.0);
    }

    /// Set the motion blur exposure, clamped to be non-negative
    pub fn set_motion_blur_exposure(&mut self, exposure: f32) {
        self.motion_blur_exposure = exposure.max(0.0);
    }

    /// Set the subdivision factor, clamped to be non-negative
    pub fn set_subdivision_factor(&mut self, factor: f32) {
        self.subdivision_factor = factor.max(0.0);
    }

    /// Set the subdivision crease weight, clamped to be non-negative
    pub fn set_subdivision_crease_weight(&mut self, weight: f32) {
        self.subdivision_crease_weight = weight.max(0.0);
    }
}

/// Per-camera editable fields read by the camera adapter
#[derive(Debug, Clone, PartialEq)]
pub struct CameraProperties {
    /// Projection type
    pub projection: ProjectionType,

    /// Near clip distance; the host keeps this below `clip_end`
    pub clip_start: f32,

    /// Far clip distance
    pub clip_end: f32,

    /// Horizontal lens shift
    pub shift_x: f32,

    /// Vertical lens shift
    pub shift_y: f32,

    /// Focal length in millimeters
    pub focal_length: f32,

    /// Sensor fit mode
    pub sensor_fit: SensorFit,

    /// Sensor width in millimeters
    pub sensor_width: f32,

    /// Sensor height in millimeters
    pub sensor_height: f32,

    /// Motion blur enabled for this camera
    pub motion_blur: bool,

    /// Motion blur exposure (>= 0)
    pub motion_blur_exposure: f32,
}

impl Default for CameraProperties {
    fn default() -> Self {
        Self {
            projection: ProjectionType::Perspective,
            clip_start: 0.1,
            clip_end: 100.0,
            shift_x: 0.0,
            shift_y: 0.0,
            focal_length: 50.0,
            sensor_fit: SensorFit::Auto,
            sensor_width: 36.0,
            sensor_height: 24.0,
            motion_blur: true,
            motion_blur_exposure: 1.0,
        }
    }
}

impl CameraProperties {
    /// Set the motion blur exposure, clamped to be non-negative
    pub fn set_motion_blur_exposure(&mut self, exposure: f32) {
        self.motion_blur_exposure = exposure.max(0.0);
    }
}

/// Per-light editable fields read by the light adapter
#[derive(Debug, Clone, PartialEq)]
pub struct LightProperties {
    /// Light color, linear RGB
    pub color: Vec3,

    /// Radiant power in watts (>= 0)
    pub power: f32,
}

impl Default for LightProperties {
    fn default() -> Self {
        Self {
            color: Vec3::new(1.0, 1.0, 1.0),
            power: 100.0,
        }
    }
}

impl LightProperties {
    /// Set the radiant power, clamped to be non-negative
    pub fn set_power(&mut self, power: f32) {
        self.power = power.max(0.0);
    }
}

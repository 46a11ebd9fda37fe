//! Headless recording backend
//!
//! [`TraceEngine`] implements the engine seam without a renderer behind
//! it: every node call is appended to a shared [`TraceLog`]. Tests assert
//! on the recorded sequence and the demo app prints it. Logging is
//! `Rc`-shared because the whole sync model is single-threaded and
//! synchronous.

use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::math::Mat4;
use crate::scene::EntityKey;
use super::{
    CameraMode, CameraNode, EngineBackend, EngineError, ObjectNode, SubdivisionSettings,
    VisibilityFlags,
};

/// One recorded engine call
#[derive(Debug, Clone, PartialEq)]
pub enum TraceCall {
    /// Camera node created
    CreateCamera(EntityKey),
    /// Mesh node created
    CreateMesh(EntityKey),
    /// Light node created
    CreateLight(EntityKey),
    /// `set_name` on any node
    SetName(EntityKey, String),
    /// `set_transform` on any node
    SetTransform(EntityKey, Mat4),
    /// `set_clip_plane` on a camera node
    SetClipPlane(EntityKey, f32, f32),
    /// `set_lens_shift` on a camera node
    SetLensShift(EntityKey, f32, f32),
    /// `set_mode` on a camera node
    SetMode(EntityKey, CameraMode),
    /// `set_focal_length` on a camera node
    SetFocalLength(EntityKey, f32),
    /// `set_sensor_size` on a camera node
    SetSensorSize(EntityKey, f32, f32),
    /// `set_visibility` on an object node
    SetVisibility(EntityKey, VisibilityFlags),
    /// `set_shadow_catcher` on an object node
    SetShadowCatcher(EntityKey, bool),
    /// `set_subdivision` on an object node
    SetSubdivision(EntityKey, Option<SubdivisionSettings>),
    /// `set_color` on an object node
    SetColor(EntityKey, f32, f32, f32),
    /// `set_power` on an object node
    SetPower(EntityKey, f32),
    /// `set_linear_motion` on an object node
    SetLinearMotion(EntityKey, f32, f32, f32),
    /// `set_angular_motion` on an object node
    SetAngularMotion(EntityKey, f32, f32, f32),
    /// `set_scale_motion` on an object node
    SetScaleMotion(EntityKey, f32, f32, f32),
}

impl TraceCall {
    /// Entity identity the call was issued against
    pub fn key(&self) -> EntityKey {
        match self {
            Self::CreateCamera(key)
            | Self::CreateMesh(key)
            | Self::CreateLight(key)
            | Self::SetName(key, _)
            | Self::SetTransform(key, _)
            | Self::SetClipPlane(key, _, _)
            | Self::SetLensShift(key, _, _)
            | Self::SetMode(key, _)
            | Self::SetFocalLength(key, _)
            | Self::SetSensorSize(key, _, _)
            | Self::SetVisibility(key, _)
            | Self::SetShadowCatcher(key, _)
            | Self::SetSubdivision(key, _)
            | Self::SetColor(key, _, _, _)
            | Self::SetPower(key, _)
            | Self::SetLinearMotion(key, _, _, _)
            | Self::SetAngularMotion(key, _, _, _)
            | Self::SetScaleMotion(key, _, _, _) => *key,
        }
    }

    /// Whether this call created a node
    pub fn is_creation(&self) -> bool {
        matches!(
            self,
            Self::CreateCamera(_) | Self::CreateMesh(_) | Self::CreateLight(_)
        )
    }
}

/// Shared, append-only record of engine calls
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    calls: Rc<RefCell<Vec<TraceCall>>>,
}

impl TraceLog {
    fn record(&self, call: TraceCall) {
        log::trace!("engine call: {call:?}");
        self.calls.borrow_mut().push(call);
    }

    /// Snapshot of all recorded calls, in issue order
    pub fn calls(&self) -> Vec<TraceCall> {
        self.calls.borrow().clone()
    }

    /// Recorded calls issued against one entity, in issue order
    pub fn calls_for(&self, key: EntityKey) -> Vec<TraceCall> {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.key() == key)
            .cloned()
            .collect()
    }

    /// Number of recorded calls
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Drop all recorded calls
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Take all recorded calls, leaving the log empty
    pub fn take(&self) -> Vec<TraceCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}

/// Recording implementation of the engine seam
#[derive(Debug, Default)]
pub struct TraceEngine {
    log: TraceLog,
}

impl TraceEngine {
    /// Create a trace engine and the log it records into
    pub fn new() -> (Self, TraceLog) {
        let log = TraceLog::default();
        let engine = Self { log: log.clone() };
        (engine, log)
    }
}

impl EngineBackend for TraceEngine {
    fn create_camera(&mut self, key: EntityKey) -> Result<Box<dyn CameraNode>, EngineError> {
        self.log.record(TraceCall::CreateCamera(key));
        Ok(Box::new(TraceCameraNode {
            key,
            log: self.log.clone(),
        }))
    }

    fn create_mesh(&mut self, key: EntityKey) -> Result<Box<dyn ObjectNode>, EngineError> {
        self.log.record(TraceCall::CreateMesh(key));
        Ok(Box::new(TraceObjectNode {
            key,
            log: self.log.clone(),
        }))
    }

    fn create_light(&mut self, key: EntityKey) -> Result<Box<dyn ObjectNode>, EngineError> {
        self.log.record(TraceCall::CreateLight(key));
        Ok(Box::new(TraceObjectNode {
            key,
            log: self.log.clone(),
        }))
    }
}

struct TraceCameraNode {
    key: EntityKey,
    log: TraceLog,
}

impl CameraNode for TraceCameraNode {
    fn set_name(&mut self, name: &str) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetName(self.key, name.to_owned()));
        Ok(())
    }

    fn set_transform(&mut self, transform: Mat4) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetTransform(self.key, transform));
        Ok(())
    }

    fn set_clip_plane(&mut self, near: f32, far: f32) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetClipPlane(self.key, near, far));
        Ok(())
    }

    fn set_lens_shift(&mut self, x: f32, y: f32) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetLensShift(self.key, x, y));
        Ok(())
    }

    fn set_mode(&mut self, mode: CameraMode) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetMode(self.key, mode));
        Ok(())
    }

    fn set_focal_length(&mut self, millimeters: f32) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetFocalLength(self.key, millimeters));
        Ok(())
    }

    fn set_sensor_size(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetSensorSize(self.key, width, height));
        Ok(())
    }
}

struct TraceObjectNode {
    key: EntityKey,
    log: TraceLog,
}

impl ObjectNode for TraceObjectNode {
    fn set_name(&mut self, name: &str) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetName(self.key, name.to_owned()));
        Ok(())
    }

    fn set_transform(&mut self, transform: Mat4) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetTransform(self.key, transform));
        Ok(())
    }

    fn set_visibility(&mut self, flags: VisibilityFlags) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetVisibility(self.key, flags));
        Ok(())
    }

    fn set_shadow_catcher(&mut self, enabled: bool) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetShadowCatcher(self.key, enabled));
        Ok(())
    }

    fn set_subdivision(&mut self, settings: Option<SubdivisionSettings>) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetSubdivision(self.key, settings));
        Ok(())
    }

    fn set_color(&mut self, r: f32, g: f32, b: f32) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetColor(self.key, r, g, b));
        Ok(())
    }

    fn set_power(&mut self, watts: f32) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetPower(self.key, watts));
        Ok(())
    }

    fn set_linear_motion(&mut self, x: f32, y: f32, z: f32) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetLinearMotion(self.key, x, y, z));
        Ok(())
    }

    fn set_angular_motion(&mut self, x: f32, y: f32, z: f32) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetAngularMotion(self.key, x, y, z));
        Ok(())
    }

    fn set_scale_motion(&mut self, x: f32, y: f32, z: f32) -> Result<(), EngineError> {
        self.log.record(TraceCall::SetScaleMotion(self.key, x, y, z));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn keys(count: usize) -> Vec<EntityKey> {
        let mut slots: SlotMap<EntityKey, ()> = SlotMap::with_key();
        (0..count).map(|_| slots.insert(())).collect()
    }

    #[test]
    fn test_calls_recorded_in_order() {
        let (mut engine, log) = TraceEngine::new();
        let camera_key = keys(1)[0];

        let mut camera = engine.create_camera(camera_key).unwrap();
        camera.set_name("cam").unwrap();
        camera.set_focal_length(50.0).unwrap();

        assert_eq!(
            log.calls(),
            vec![
                TraceCall::CreateCamera(camera_key),
                TraceCall::SetName(camera_key, "cam".to_owned()),
                TraceCall::SetFocalLength(camera_key, 50.0),
            ]
        );
    }

    #[test]
    fn test_calls_for_filters_by_key() {
        let (mut engine, log) = TraceEngine::new();
        let ids = keys(2);
        let (mesh_key, light_key) = (ids[0], ids[1]);

        let mut mesh = engine.create_mesh(mesh_key).unwrap();
        let mut light = engine.create_light(light_key).unwrap();
        mesh.set_power(1.0).unwrap();
        light.set_power(60.0).unwrap();

        let light_calls = log.calls_for(light_key);
        assert_eq!(light_calls.len(), 2);
        assert!(light_calls.iter().all(|call| call.key() == light_key));
    }

    #[test]
    fn test_take_empties_the_log() {
        let (mut engine, log) = TraceEngine::new();
        let _ = engine.create_mesh(keys(1)[0]).unwrap();

        assert!(!log.is_empty());
        let taken = log.take();
        assert_eq!(taken.len(), 1);
        assert!(log.is_empty());
    }
}

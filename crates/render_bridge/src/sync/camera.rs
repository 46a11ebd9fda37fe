//! Camera adapter
//!
//! Full-state push of one camera entity's editable fields to its engine
//! camera node. The push order is fixed; the first setter failure aborts
//! the pass and leaves the node partially updated, which is acceptable
//! because the next pass overwrites every field again.

use crate::engine::CameraMode;
use crate::scene::{CameraProperties, EntityKey, ProjectionType, SceneEntity, SensorFit};
use super::context::RenderContext;
use super::error::SyncError;

/// Adapter pushing camera entities into the engine
pub struct CameraSync;

impl CameraSync {
    /// Push the entity's current camera state to its engine node
    ///
    /// Creates the node on first sync and reuses it afterwards.
    ///
    /// # Errors
    /// [`SyncError::UnsupportedProjection`] for a projection outside the
    /// engine's mode table; engine errors from any setter.
    pub fn sync(
        context: &mut RenderContext,
        key: EntityKey,
        entity: &SceneEntity,
        props: &CameraProperties,
    ) -> Result<(), SyncError> {
        log::debug!("Syncing camera: {}", entity.name());

        let aspect = context.aspect_ratio();
        let camera = context.camera(key)?;
        camera.set_name(entity.name())?;
        camera.set_transform(entity.transform().to_matrix())?;

        camera.set_clip_plane(props.clip_start, props.clip_end)?;
        // TODO: lens shift does not match the host's film-offset convention yet
        camera.set_lens_shift(props.shift_x, props.shift_y)?;

        let mode = match props.projection {
            ProjectionType::Orthographic => CameraMode::Orthographic,
            ProjectionType::Perspective => CameraMode::Perspective,
            ProjectionType::PanoramicEquirect => CameraMode::LatitudeLongitude360,
            unsupported => return Err(SyncError::UnsupportedProjection(unsupported)),
        };
        camera.set_mode(mode)?;

        // Only the perspective lens parameters are pushed for now
        camera.set_focal_length(props.focal_length)?;
        if props.sensor_fit == SensorFit::Vertical {
            camera.set_sensor_size(props.sensor_width, props.sensor_height)?;
        } else {
            // Derive the height from the output aspect so the rendered
            // field of view matches the viewport at any resolution
            camera.set_sensor_size(props.sensor_width, props.sensor_width / aspect)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{
        CameraNode, EngineBackend, EngineError, ObjectNode,
        trace::{TraceCall, TraceEngine},
    };
    use crate::foundation::math::Mat4;
    use crate::scene::SceneWorld;
    use approx::assert_relative_eq;

    fn camera_world() -> (SceneWorld, EntityKey) {
        let mut world = SceneWorld::new();
        let key = world.spawn(SceneEntity::camera("cam"));
        (world, key)
    }

    fn sync_once(
        world: &SceneWorld,
        key: EntityKey,
        context: &mut RenderContext,
    ) -> Result<(), SyncError> {
        let entity = world.get(key).unwrap();
        let props = entity.camera_properties().unwrap().clone();
        CameraSync::sync(context, key, entity, &props)
    }

    #[test]
    fn test_projection_mapping_table() {
        let table = [
            (ProjectionType::Orthographic, CameraMode::Orthographic),
            (ProjectionType::Perspective, CameraMode::Perspective),
            (
                ProjectionType::PanoramicEquirect,
                CameraMode::LatitudeLongitude360,
            ),
        ];

        for (projection, expected) in table {
            let (mut world, key) = camera_world();
            world
                .get_mut(key)
                .unwrap()
                .camera_properties_mut()
                .unwrap()
                .projection = projection;

            let (engine, log) = TraceEngine::new();
            let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
            sync_once(&world, key, &mut context).unwrap();

            assert!(log
                .calls_for(key)
                .contains(&TraceCall::SetMode(key, expected)));
        }
    }

    #[test]
    fn test_unmapped_projection_is_unrecoverable() {
        let (mut world, key) = camera_world();
        world
            .get_mut(key)
            .unwrap()
            .camera_properties_mut()
            .unwrap()
            .projection = ProjectionType::PanoramicFisheye;

        let (engine, log) = TraceEngine::new();
        let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
        let result = sync_once(&world, key, &mut context);

        assert!(matches!(
            result,
            Err(SyncError::UnsupportedProjection(
                ProjectionType::PanoramicFisheye
            ))
        ));
        // The pass aborted before the mode push; nothing after it was issued
        assert!(!log
            .calls_for(key)
            .iter()
            .any(|call| matches!(call, TraceCall::SetMode(..) | TraceCall::SetFocalLength(..))));
    }

    #[test]
    fn test_sensor_height_derived_from_aspect() {
        let (world, key) = camera_world();

        let (engine, log) = TraceEngine::new();
        let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
        sync_once(&world, key, &mut context).unwrap();

        let sensor = log
            .calls_for(key)
            .into_iter()
            .find_map(|call| match call {
                TraceCall::SetSensorSize(_, width, height) => Some((width, height)),
                _ => None,
            })
            .unwrap();

        assert_relative_eq!(sensor.0, 36.0, epsilon = 1e-5);
        assert_relative_eq!(sensor.1, 36.0 * 9.0 / 16.0, epsilon = 1e-5);
    }

    #[test]
    fn test_vertical_fit_uses_explicit_sensor_pair() {
        let (mut world, key) = camera_world();
        world
            .get_mut(key)
            .unwrap()
            .camera_properties_mut()
            .unwrap()
            .sensor_fit = SensorFit::Vertical;

        let (engine, log) = TraceEngine::new();
        let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
        sync_once(&world, key, &mut context).unwrap();

        assert!(log
            .calls_for(key)
            .contains(&TraceCall::SetSensorSize(key, 36.0, 24.0)));
    }

    #[test]
    fn test_resync_is_idempotent() {
        let (world, key) = camera_world();

        let (engine, log) = TraceEngine::new();
        let mut context = RenderContext::new(Box::new(engine), 1920, 1080);

        sync_once(&world, key, &mut context).unwrap();
        let first_pass = log.take();

        sync_once(&world, key, &mut context).unwrap();
        let second_pass = log.take();

        // One node, never recreated
        assert_eq!(
            first_pass.iter().filter(|call| call.is_creation()).count(),
            1
        );
        assert!(!second_pass.iter().any(TraceCall::is_creation));

        // The second pass pushes exactly the same field values
        let first_setters: Vec<_> = first_pass
            .into_iter()
            .filter(|call| !call.is_creation())
            .collect();
        assert_eq!(first_setters, second_pass);
    }

    /// Backend whose camera rejects clip planes, for abort-path coverage
    struct RejectingBackend;

    struct RejectingCamera;

    impl CameraNode for RejectingCamera {
        fn set_name(&mut self, _name: &str) -> Result<(), EngineError> {
            Ok(())
        }

        fn set_transform(&mut self, _transform: Mat4) -> Result<(), EngineError> {
            Ok(())
        }

        fn set_clip_plane(&mut self, _near: f32, _far: f32) -> Result<(), EngineError> {
            Err(EngineError::Rejected {
                call: "set_clip_plane",
                reason: "out of range".to_owned(),
            })
        }

        fn set_lens_shift(&mut self, _x: f32, _y: f32) -> Result<(), EngineError> {
            panic!("sync must abort before the lens shift push");
        }

        fn set_mode(&mut self, _mode: CameraMode) -> Result<(), EngineError> {
            unreachable!()
        }

        fn set_focal_length(&mut self, _millimeters: f32) -> Result<(), EngineError> {
            unreachable!()
        }

        fn set_sensor_size(&mut self, _width: f32, _height: f32) -> Result<(), EngineError> {
            unreachable!()
        }
    }

    impl EngineBackend for RejectingBackend {
        fn create_camera(&mut self, _key: EntityKey) -> Result<Box<dyn CameraNode>, EngineError> {
            Ok(Box::new(RejectingCamera))
        }

        fn create_mesh(&mut self, _key: EntityKey) -> Result<Box<dyn ObjectNode>, EngineError> {
            unreachable!()
        }

        fn create_light(&mut self, _key: EntityKey) -> Result<Box<dyn ObjectNode>, EngineError> {
            unreachable!()
        }
    }

    #[test]
    fn test_setter_failure_aborts_the_pass() {
        let (world, key) = camera_world();
        let mut context = RenderContext::new(Box::new(RejectingBackend), 800, 600);

        let result = sync_once(&world, key, &mut context);
        assert!(matches!(
            result,
            Err(SyncError::Engine(EngineError::Rejected {
                call: "set_clip_plane",
                ..
            }))
        ));
    }
}

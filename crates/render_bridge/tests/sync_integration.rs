//! End-to-end sync pass over a small scene
//!
//! Drives the full stack the way a host would: plugin load, entity
//! construction, a full sync pass, then incremental updates across
//! simulated frames, all observed through the trace backend.

use render_bridge::prelude::*;

fn build_world() -> (SceneWorld, EntityKey, EntityKey, EntityKey, EntityKey) {
    let mut world = SceneWorld::new();
    BridgePlugin::new(RenderAdapterConfig::default()).load(&mut world);

    let camera = world.spawn(SceneEntity::camera("camera"));
    let mesh = world.spawn(SceneEntity::mesh("suzanne"));
    let light = world.spawn(SceneEntity::light("key_light"));
    let curve = world.spawn(SceneEntity::curve("hair"));
    (world, camera, mesh, light, curve)
}

#[test]
fn full_pass_creates_one_node_per_renderable_entity() {
    let (world, camera, mesh, light, curve) = build_world();

    let (engine, log) = TraceEngine::new();
    let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
    SceneSynchronizer::new()
        .sync_scene(&mut context, &world, None)
        .unwrap();

    let creations: Vec<_> = log
        .calls()
        .into_iter()
        .filter(TraceCall::is_creation)
        .collect();
    assert_eq!(creations.len(), 3);
    assert!(creations.contains(&TraceCall::CreateCamera(camera)));
    assert!(creations.contains(&TraceCall::CreateMesh(mesh)));
    assert!(creations.contains(&TraceCall::CreateLight(light)));

    assert!(context.registry().contains(camera));
    assert!(context.registry().contains(mesh));
    assert!(context.registry().contains(light));
    assert!(!context.registry().contains(curve));
    assert!(log.calls_for(curve).is_empty());
}

#[test]
fn resync_reuses_every_node() {
    let (world, ..) = build_world();

    let (engine, log) = TraceEngine::new();
    let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
    let synchronizer = SceneSynchronizer::new();

    synchronizer.sync_scene(&mut context, &world, None).unwrap();
    let first_pass = log.take();

    synchronizer.sync_scene(&mut context, &world, None).unwrap();
    let second_pass = log.take();

    assert!(!second_pass.iter().any(TraceCall::is_creation));

    // With unchanged entity state the second pass pushes identical values
    let first_setters: Vec<_> = first_pass
        .into_iter()
        .filter(|call| !call.is_creation())
        .collect();
    assert_eq!(first_setters, second_pass);
    assert_eq!(context.registry().len(), 3);
}

#[test]
fn motion_appears_on_the_second_frame_of_movement() {
    let (mut world, _camera, mesh, ..) = build_world();

    let (engine, log) = TraceEngine::new();
    let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
    let synchronizer = SceneSynchronizer::new();
    let mut estimator = MotionEstimator::new();

    // Frame 1: everything static, no samples to difference against
    synchronizer
        .sync_scene(&mut context, &world, Some(&mut estimator))
        .unwrap();
    assert!(!log
        .take()
        .iter()
        .any(|call| matches!(call, TraceCall::SetLinearMotion(..))));

    // Frame 2: the mesh moved
    world
        .get_mut(mesh)
        .unwrap()
        .set_transform(Transform::from_position(Vec3::new(1.0, 0.0, 0.0)));
    synchronizer
        .sync_scene(&mut context, &world, Some(&mut estimator))
        .unwrap();

    let mesh_motion: Vec<_> = log
        .calls_for(mesh)
        .into_iter()
        .filter(|call| {
            matches!(
                call,
                TraceCall::SetLinearMotion(..)
                    | TraceCall::SetAngularMotion(..)
                    | TraceCall::SetScaleMotion(..)
            )
        })
        .collect();
    assert_eq!(
        mesh_motion,
        vec![
            TraceCall::SetLinearMotion(mesh, 1.0, 0.0, 0.0),
            TraceCall::SetAngularMotion(mesh, 0.0, 0.0, 0.0),
            TraceCall::SetScaleMotion(mesh, 0.0, 0.0, 0.0),
        ]
    );
}

#[test]
fn incremental_updates_drive_re_render_decision() {
    let (mut world, camera, mesh, _light, curve) = build_world();

    let (engine, log) = TraceEngine::new();
    let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
    let synchronizer = SceneSynchronizer::new();
    synchronizer.sync_scene(&mut context, &world, None).unwrap();
    log.clear();

    // Camera and curve notifications alone never request a re-render
    let updates = [SceneUpdate::transform(camera), SceneUpdate::geometry(curve)];
    assert!(!synchronizer
        .sync_updates(&mut context, &world, &updates)
        .unwrap());
    assert!(log.is_empty());

    // A mesh transform change does
    world
        .get_mut(mesh)
        .unwrap()
        .set_transform(Transform::from_position(Vec3::new(0.0, 2.0, 0.0)));
    let updates = [SceneUpdate::transform(mesh)];
    assert!(synchronizer
        .sync_updates(&mut context, &world, &updates)
        .unwrap());
    assert_eq!(log.calls_for(mesh).len(), 1);
}

#[test]
fn unloading_the_plugin_stops_bridging() {
    let (mut world, ..) = build_world();
    let plugin = BridgePlugin::new(RenderAdapterConfig::default());
    plugin.unload(&mut world);

    let (engine, log) = TraceEngine::new();
    let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
    SceneSynchronizer::new()
        .sync_scene(&mut context, &world, None)
        .unwrap();

    assert!(log.is_empty());
    assert!(context.registry().is_empty());
}

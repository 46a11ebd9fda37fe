//! Turntable demo application
//!
//! Headless demonstration of the bridge: a camera, a mesh on a turntable,
//! and a key light are synced into the trace backend frame by frame, with
//! motion vectors estimated from the turntable rotation. The recorded
//! engine calls are summarized at the end.

use render_bridge::prelude::*;
use render_bridge::config::Config;
use render_bridge::foundation::math::utils;

const FRAMES: u32 = 8;
const DEGREES_PER_FRAME: f32 = 45.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();
    render_bridge::foundation::logging::init_with_filter(&config.log_filter);
    config.validate()?;

    log::info!("Creating turntable scene...");
    let mut world = SceneWorld::new();
    let plugin = BridgePlugin::from_config(&config);
    plugin.load(&mut world);

    let camera = world.spawn(SceneEntity::camera("turntable_camera"));
    world
        .get_mut(camera)
        .unwrap()
        .set_transform(Transform::from_position(Vec3::new(0.0, 2.0, 6.0)));

    let mesh = world.spawn(SceneEntity::mesh("subject"));
    world.get_mut(mesh).unwrap().properties_mut().subdivision = true;

    let light = world.spawn(SceneEntity::light("key_light"));
    world
        .get_mut(light)
        .unwrap()
        .set_transform(Transform::from_position(Vec3::new(3.0, 4.0, 2.0)));

    let (engine, trace) = TraceEngine::new();
    let mut context = RenderContext::new(
        Box::new(engine),
        config.output.width,
        config.output.height,
    );
    let synchronizer = SceneSynchronizer::new();
    let mut estimator = MotionEstimator::new();

    log::info!("Initial sync...");
    synchronizer.sync_scene(&mut context, &world, Some(&mut estimator))?;
    log::info!(
        "Initial pass: {} engine calls, {} nodes",
        trace.len(),
        context.registry().len()
    );

    for frame in 1..=FRAMES {
        let angle = utils::deg_to_rad(DEGREES_PER_FRAME * frame as f32);
        world.get_mut(mesh).unwrap().set_transform(
            Transform::identity().with_rotation_axis_angle(Vec3::new(0.0, 1.0, 0.0), angle),
        );

        let before = trace.len();
        synchronizer.sync_scene(&mut context, &world, Some(&mut estimator))?;

        let needs_render = synchronizer.sync_updates(
            &mut context,
            &world,
            &[SceneUpdate::transform(mesh)],
        )?;
        log::info!(
            "Frame {frame}: {} engine calls, re-render: {needs_render}",
            trace.len() - before
        );
    }

    summarize(&trace.calls());
    plugin.unload(&mut world);
    Ok(())
}

fn load_config() -> BridgeConfig {
    match BridgeConfig::load_from_file("turntable.toml") {
        Ok(config) => config,
        Err(ConfigError::Io(_)) => BridgeConfig::default(),
        Err(err) => {
            eprintln!("Ignoring broken turntable.toml: {err}");
            BridgeConfig::default()
        }
    }
}

fn summarize(calls: &[TraceCall]) {
    let creations = calls.iter().filter(|call| call.is_creation()).count();
    let motion = calls
        .iter()
        .filter(|call| {
            matches!(
                call,
                TraceCall::SetLinearMotion(..)
                    | TraceCall::SetAngularMotion(..)
                    | TraceCall::SetScaleMotion(..)
            )
        })
        .count();

    log::info!(
        "Done: {} engine calls total ({creations} node creations, {motion} motion pushes)",
        calls.len()
    );
}

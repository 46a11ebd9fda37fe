//! # Render Bridge
//!
//! A synchronization layer between an editable host scene and an external
//! ray-tracing engine's scene graph.
//!
//! ## Features
//!
//! - **Property Sync**: Full-state push of camera and object properties
//! - **Incremental Updates**: Geometry/transform change propagation
//! - **Stable Identity**: Generational entity keys decoupled from host internals
//! - **Opaque Engine Seam**: The renderer is reached only through handle traits
//! - **Headless Tracing**: A recording backend for tests and tooling
//!
//! ## Quick Start
//!
//! ```rust
//! use render_bridge::prelude::*;
//!
//! fn main() -> Result<(), SyncError> {
//!     let mut world = SceneWorld::new();
//!     BridgePlugin::new(RenderAdapterConfig::default()).load(&mut world);
//!     let camera = world.spawn(SceneEntity::camera("camera"));
//!
//!     let (engine, trace) = TraceEngine::new();
//!     let mut context = RenderContext::new(Box::new(engine), 1920, 1080);
//!
//!     SceneSynchronizer::new().sync_scene(&mut context, &world, None)?;
//!     assert!(context.registry().contains(camera));
//!     assert!(!trace.is_empty());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod scene;
pub mod engine;
pub mod sync;
pub mod config;

mod plugin;

pub use plugin::BridgePlugin;

/// Common imports for bridge users
pub mod prelude {
    pub use crate::{
        BridgePlugin,
        config::{BridgeConfig, ConfigError, RenderAdapterConfig},
        engine::{
            CameraMode, CameraNode, EngineBackend, EngineError, ObjectNode,
            SubdivisionBoundary, SubdivisionSettings, VisibilityFlags,
            trace::{TraceCall, TraceEngine, TraceLog},
        },
        foundation::math::{Mat4, Quat, Transform, Vec3},
        scene::{
            CameraProperties, EntityData, EntityKey, EntityKind, LightProperties,
            ObjectProperties, ProjectionType, SceneEntity, SceneWorld, SensorFit,
        },
        sync::{
            CameraSync, MotionEstimator, MotionInfo, ObjectSync, RenderContext,
            SceneRegistry, SceneSynchronizer, SceneUpdate, SyncError,
        },
    };
}

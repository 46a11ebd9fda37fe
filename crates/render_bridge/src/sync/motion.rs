//! Motion estimation
//!
//! [`MotionInfo`] is the per-entity record the object adapter consumes
//! once per sync pass. [`MotionEstimator`] produces it from consecutive
//! transform samples: a first-order estimate, which is all the engine's
//! motion-blur interpolation needs as input. Entities seen for the first
//! time, and entities with motion blur disabled, yield `None` and stay
//! static.

use slotmap::SecondaryMap;

use crate::foundation::math::{Transform, Vec3};
use crate::scene::{EntityKey, SceneEntity};

/// Per-entity motion vectors for one sync pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionInfo {
    /// Linear velocity over the frame interval
    pub linear_velocity: Vec3,

    /// Angular momentum as axis * angle over the frame interval
    pub angular_momentum: Vec3,

    /// Per-axis scale rate over the frame interval
    pub momentum_scale: Vec3,
}

/// Derives [`MotionInfo`] from consecutive per-entity transform samples
#[derive(Default)]
pub struct MotionEstimator {
    previous: SecondaryMap<EntityKey, Transform>,
}

impl MotionEstimator {
    /// Create an estimator with no recorded samples
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the entity's current transform and estimate its motion
    ///
    /// Returns `None` when the entity has motion blur disabled or has no
    /// previous sample to difference against.
    pub fn estimate(&mut self, key: EntityKey, entity: &SceneEntity) -> Option<MotionInfo> {
        let current = entity.transform().clone();
        let previous = self.previous.insert(key, current.clone());

        if !entity.properties().motion_blur {
            return None;
        }
        let previous = previous?;

        let blur_scale = entity.properties().motion_blur_scale;
        let linear_velocity = (current.position - previous.position) * blur_scale;

        let delta = current.rotation * previous.rotation.inverse();
        let angular_momentum = delta
            .axis_angle()
            .map_or_else(Vec3::zeros, |(axis, angle)| axis.into_inner() * (angle * blur_scale));

        let momentum_scale = Vec3::new(
            scale_rate(current.scale.x, previous.scale.x),
            scale_rate(current.scale.y, previous.scale.y),
            scale_rate(current.scale.z, previous.scale.z),
        ) * blur_scale;

        Some(MotionInfo {
            linear_velocity,
            angular_momentum,
            momentum_scale,
        })
    }

    /// Drop the recorded sample for a deleted entity
    pub fn forget(&mut self, key: EntityKey) {
        self.previous.remove(key);
    }

    /// Drop all recorded samples
    pub fn clear(&mut self) {
        self.previous.clear();
    }
}

fn scale_rate(current: f32, previous: f32) -> f32 {
    if previous.abs() <= f32::EPSILON {
        0.0
    } else {
        current / previous - 1.0
    }
}

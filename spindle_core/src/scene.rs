// spindle_core/src/scene.rs

use nalgebra::{Point3, Vector3};
use std::fmt::Debug;

/// The raycast capability the sensor depends on but does not implement.
///
/// Implementations must be synchronous and side-effect-free: a query reads
/// scene state and returns the distance to the nearest intersected surface
/// along `direction` within `max_distance`, or `None` when nothing is hit.
/// `direction` is a unit vector in world coordinates.
///
/// The sensor holds the scene as an injected trait object, so tests can
/// substitute a deterministic fake for a real physics engine.
pub trait SceneQuery: Debug + Send + Sync {
    fn cast_ray(
        &self,
        origin: &Point3<f64>,
        direction: &Vector3<f64>,
        max_distance: f64,
    ) -> Option<f64>;
}

/// A scene with no geometry: every probe misses. Stands in for an
/// unavailable scene backend, degrading every sample to no-return instead
/// of failing the sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScene;

impl SceneQuery for EmptyScene {
    fn cast_ray(
        &self,
        _origin: &Point3<f64>,
        _direction: &Vector3<f64>,
        _max_distance: f64,
    ) -> Option<f64> {
        None
    }
}

// spindle_sim/src/world.rs

//! A deterministic, analytic scene backend: obstacles live on the XZ
//! ground plane and rays are intersected in closed form. Stands in for the
//! physics-engine raycast the sensor would consume in a full simulator.

use nalgebra::{Point3, Vector2, Vector3};
use serde::Deserialize;
use spindle_core::scene::SceneQuery;

/// Rays steeper than this (out-of-plane component of a unit direction)
/// cannot meaningfully intersect planar obstacles.
const MIN_PLANAR_NORM: f64 = 1e-9;

/// One piece of static geometry, described in scenario TOML.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "PascalCase")]
pub enum Obstacle {
    /// An infinite-height wall between two ground-plane points `[x, z]`.
    Wall { start: [f64; 2], end: [f64; 2] },
    /// An infinite-height cylinder at a ground-plane center.
    Pillar { center: [f64; 2], radius: f64 },
}

/// The static world the harness casts rays against.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct PlanarWorld {
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

impl PlanarWorld {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }
}

impl SceneQuery for PlanarWorld {
    fn cast_ray(
        &self,
        origin: &Point3<f64>,
        direction: &Vector3<f64>,
        max_distance: f64,
    ) -> Option<f64> {
        // Work in the ground plane. The sensor's probes are horizontal, so
        // the projected direction keeps unit length; a near-vertical ray
        // simply misses everything.
        let o = Vector2::new(origin.x, origin.z);
        let d = Vector2::new(direction.x, direction.z);
        let planar_norm = d.norm();
        if planar_norm < MIN_PLANAR_NORM {
            return None;
        }
        let d = d / planar_norm;

        let mut nearest: Option<f64> = None;
        for obstacle in &self.obstacles {
            let hit = match obstacle {
                Obstacle::Wall { start, end } => {
                    ray_segment(o, d, Vector2::from(*start), Vector2::from(*end))
                }
                Obstacle::Pillar { center, radius } => {
                    ray_circle(o, d, Vector2::from(*center), *radius)
                }
            };
            if let Some(t) = hit {
                if t <= max_distance && nearest.map_or(true, |best| t < best) {
                    nearest = Some(t);
                }
            }
        }
        nearest
    }
}

/// Distance along the ray `o + t*d` (unit `d`, `t >= 0`) to the segment
/// `a..b`, or `None`. Parallel and collinear rays are treated as misses.
fn ray_segment(o: Vector2<f64>, d: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> Option<f64> {
    let e = b - a;
    let denom = cross2(d, e);
    if denom.abs() < 1e-12 {
        return None;
    }
    let ao = a - o;
    let t = cross2(ao, e) / denom;
    let s = cross2(ao, d) / denom;
    if t >= 0.0 && (0.0..=1.0).contains(&s) {
        Some(t)
    } else {
        None
    }
}

/// Distance along the ray to the near side of a circle, or `None`. An
/// origin inside the circle reports the exit point.
fn ray_circle(o: Vector2<f64>, d: Vector2<f64>, center: Vector2<f64>, radius: f64) -> Option<f64> {
    let oc = o - center;
    // Unit direction, so the quadratic's leading coefficient is 1.
    let half_b = oc.dot(&d);
    let c = oc.dot(&oc) - radius * radius;
    let discriminant = half_b * half_b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_disc = discriminant.sqrt();
    let near = -half_b - sqrt_disc;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -half_b + sqrt_disc;
    (far >= 0.0).then_some(far)
}

fn cross2(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

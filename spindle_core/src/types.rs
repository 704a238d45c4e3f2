// spindle_core/src/types.rs

use nalgebra::{Point3, Vector3};

/// Pose of the sensor platform at one instant, supplied by the host each
/// tick. The sensor only reads it; the platform's position and orientation
/// are owned by whatever moves the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Sensor origin in world coordinates.
    pub position: Point3<f64>,
    /// Reference heading (yaw about +Y, radians). A sweep's zero-angle
    /// probe points along this heading.
    pub heading_rad: f64,
}

impl Pose {
    pub fn new(position: Point3<f64>, heading_rad: f64) -> Self {
        Self {
            position,
            heading_rad,
        }
    }

    /// Unit forward vector for this pose's heading.
    pub fn forward(&self) -> Vector3<f64> {
        yaw_direction(self.heading_rad)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Point3::origin(), 0.0)
    }
}

/// Unit direction in the horizontal plane for a yaw angle, in the Y-up,
/// +Z-forward convention: `(sin θ, 0, cos θ)`. θ = 0 points along +Z and
/// positive θ turns toward +X.
pub fn yaw_direction(angle_rad: f64) -> Vector3<f64> {
    Vector3::new(angle_rad.sin(), 0.0, angle_rad.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-12;

    #[test]
    fn yaw_zero_points_along_plus_z() {
        let d = yaw_direction(0.0);
        assert_abs_diff_eq!(d.x, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(d.y, 0.0, epsilon = EPS);
        assert_abs_diff_eq!(d.z, 1.0, epsilon = EPS);
    }

    #[test]
    fn yaw_quarter_turn_points_along_plus_x() {
        let d = yaw_direction(FRAC_PI_2);
        assert_abs_diff_eq!(d.x, 1.0, epsilon = EPS);
        assert_abs_diff_eq!(d.z, 0.0, epsilon = EPS);
    }

    #[test]
    fn yaw_direction_is_unit_length() {
        for i in 0..8 {
            let d = yaw_direction(i as f64 * 0.9);
            assert_abs_diff_eq!(d.norm(), 1.0, epsilon = EPS);
        }
    }
}

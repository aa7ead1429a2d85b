use glam::Vec3;

/// Camera origin for an azimuth `theta` and polar angle `phi`, both in radians.
///
/// The frame is y-up, z-forward, x-left: `phi = pi/2` lies on the x-z plane and
/// `theta = pi/2, phi = pi/2` maps to `[0, 0, radius]`.
#[inline]
pub fn polar_to_cartesian(radius: f32, theta: f32, phi: f32) -> Vec3 {
    let azimuth = std::f32::consts::PI - theta;
    Vec3::new(
        radius * phi.sin() * azimuth.cos(),
        radius * phi.cos(),
        radius * phi.sin() * azimuth.sin(),
    )
}

/// Camera origin for a pitch and yaw, both in radians, with `z` as the elevation axis.
///
/// `pitch = 0, yaw = 0` maps to `[radius, 0, 0]`.
#[inline]
pub fn pitch_yaw_to_cartesian(radius: f32, pitch: f32, yaw: f32) -> Vec3 {
    Vec3::new(
        radius * pitch.cos() * yaw.cos(),
        radius * pitch.cos() * yaw.sin(),
        radius * pitch.sin(),
    )
}

/// Map a raw vertical value in `[0, pi]` to a polar angle whose cosine is uniform.
///
/// The value is clamped to `[1e-5, pi - 1e-5]` first so the poles are never hit.
#[inline]
pub fn vertical_to_polar(vertical: f32) -> f32 {
    const EPS: f32 = 1e-5;
    let v = vertical.clamp(EPS, std::f32::consts::PI - EPS) / std::f32::consts::PI;
    (1.0 - 2.0 * v).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_polar_to_cartesian_front() {
        let p = polar_to_cartesian(1.0, FRAC_PI_2, FRAC_PI_2);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_polar_to_cartesian_radius() {
        let p = polar_to_cartesian(2.5, 0.7, 1.1);
        assert_relative_eq!(p.length(), 2.5, epsilon = 1e-5);
        assert_relative_eq!(p.y, 2.5 * 1.1f32.cos(), epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_yaw_to_cartesian() {
        let p = pitch_yaw_to_cartesian(2.0, 0.0, 0.0);
        assert_eq!(p, Vec3::new(2.0, 0.0, 0.0));

        let p = pitch_yaw_to_cartesian(2.0, FRAC_PI_2, 0.3);
        assert_relative_eq!(p.z, 2.0, epsilon = 1e-6);
        assert_relative_eq!(p.length(), 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_vertical_to_polar() {
        assert_relative_eq!(vertical_to_polar(FRAC_PI_2), FRAC_PI_2, epsilon = 1e-6);
        // clamped away from the poles
        assert!(vertical_to_polar(-1.0) > 0.0);
        assert!(vertical_to_polar(2.0 * PI) < PI);
        assert!(vertical_to_polar(f32::MAX).is_finite());
    }
}

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{check_fov, CameraError};

/// Create a 3x3 intrinsics matrix from a full-angle field of view in degrees.
///
/// The intrinsics are normalized by image size rather than expressed in pixels, with the
/// principal point at the image center:
///
/// ```text
/// [f 0 0.5]
/// [0 f 0.5]    f = 1 / (tan(fov / 2) * sqrt(2))
/// [0 0 1  ]
/// ```
///
/// Use [`denormalize_intrinsics`] to get pixel units.
///
/// Example:
///
/// ```
/// let k = camrig::fov_to_intrinsics(90.0)?;
/// assert!((k.x_axis.x - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-6);
/// # Ok::<(), camrig::CameraError>(())
/// ```
pub fn fov_to_intrinsics(fov_degrees: f32) -> Result<Mat3, CameraError> {
    check_fov(fov_degrees)?;
    let focal_length = 1.0
        / ((fov_degrees * std::f32::consts::PI / 360.0).tan() * std::f32::consts::SQRT_2);
    Ok(Mat3::from_cols(
        Vec3::new(focal_length, 0.0, 0.0),
        Vec3::new(0.0, focal_length, 0.0),
        Vec3::new(0.5, 0.5, 1.0),
    ))
}

/// Scale normalized intrinsics to an image of `width` x `height` pixels.
///
/// Row 0 is multiplied by the width and row 1 by the height; row 2 is left untouched.
pub fn denormalize_intrinsics(k: &Mat3, width: u32, height: u32) -> Mat3 {
    let scale = Mat3::from_diagonal(Vec3::new(width as f32, height as f32, 1.0));
    scale * *k
}

/// Focal lengths and principal point in normalized image units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatIntrinsics {
    /// Focal length along x
    pub fx: f32,
    /// Focal length along y
    pub fy: f32,
    /// Principal point x
    pub cx: f32,
    /// Principal point y
    pub cy: f32,
}

impl FlatIntrinsics {
    /// Intrinsics for a centered principal point, using the half-angle relation
    /// `f = 0.5 / tan(fov / 2)`.
    ///
    /// This is not the same focal length as [`fov_to_intrinsics`] for the same field of view.
    pub fn from_fov(fov_degrees: f32) -> Result<Self, CameraError> {
        check_fov(fov_degrees)?;
        let fx = 0.5 / (fov_degrees / 2.0).to_radians().tan();
        Ok(Self {
            fx,
            fy: fx,
            cx: 0.5,
            cy: 0.5,
        })
    }

    /// Returns `[fx, fy, cx, cy]`.
    pub fn to_array(&self) -> [f32; 4] {
        [self.fx, self.fy, self.cx, self.cy]
    }

    /// Returns the equivalent 3x3 intrinsics matrix.
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::from_cols(
            Vec3::new(self.fx, 0.0, 0.0),
            Vec3::new(0.0, self.fy, 0.0),
            Vec3::new(self.cx, self.cy, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fov_to_intrinsics_90() -> Result<(), CameraError> {
        let k = fov_to_intrinsics(90.0)?;
        let expected = 1.0 / ((std::f32::consts::PI / 4.0).tan() * std::f32::consts::SQRT_2);
        assert_relative_eq!(k.row(0).x, expected, epsilon = 1e-6);
        assert_relative_eq!(k.row(0).x, 0.7071, epsilon = 1e-4);
        assert_eq!(k.row(0), Vec3::new(k.x_axis.x, 0.0, 0.5));
        assert_eq!(k.row(1), Vec3::new(0.0, k.y_axis.y, 0.5));
        assert_eq!(k.row(2), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(k.x_axis.x, k.y_axis.y);
        Ok(())
    }

    #[test]
    fn test_fov_out_of_range() {
        assert_eq!(fov_to_intrinsics(0.0), Err(CameraError::InvalidFov(0.0)));
        assert_eq!(fov_to_intrinsics(180.0), Err(CameraError::InvalidFov(180.0)));
        assert_eq!(fov_to_intrinsics(-10.0), Err(CameraError::InvalidFov(-10.0)));
        assert!(FlatIntrinsics::from_fov(200.0).is_err());
    }

    #[test]
    fn test_flat_intrinsics_half_angle() -> Result<(), CameraError> {
        let flat = FlatIntrinsics::from_fov(30.0)?;
        assert_relative_eq!(flat.fx, 0.5 / 15f32.to_radians().tan(), epsilon = 1e-6);
        assert_relative_eq!(flat.fx, 1.866_025_4, epsilon = 1e-5);
        assert_eq!(flat.to_array(), [flat.fx, flat.fx, 0.5, 0.5]);

        // the full-angle formula gives a different focal length
        let k = fov_to_intrinsics(30.0)?;
        assert!((k.x_axis.x - flat.fx).abs() > 0.1);
        Ok(())
    }

    #[test]
    fn test_denormalize_intrinsics() -> Result<(), CameraError> {
        let k = FlatIntrinsics::from_fov(60.0)?.to_matrix();
        let k_px = denormalize_intrinsics(&k, 640, 480);
        assert_relative_eq!(k_px.row(0).x, k.x_axis.x * 640.0, epsilon = 1e-4);
        assert_relative_eq!(k_px.row(1).y, k.y_axis.y * 480.0, epsilon = 1e-4);
        assert_relative_eq!(k_px.row(0).z, 320.0);
        assert_relative_eq!(k_px.row(1).z, 240.0);
        assert_eq!(k_px.row(2), Vec3::new(0.0, 0.0, 1.0));
        Ok(())
    }
}

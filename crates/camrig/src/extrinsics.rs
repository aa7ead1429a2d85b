//! Cam2world matrices.
//!
//! Two conventions coexist and feed different consumers:
//!
//! - [`create_cam2world_matrix`]: world up is `+y`, columns are `(right, up, forward)`.
//! - [`create_cam2world_matrix_neg_z_up`]: world up is `-z`, columns are `(left, up, forward)`.
//!
//! In both cases column 2 is the viewing direction and column 3 is the camera origin.

use glam::{Mat4, Vec3};

use crate::error::{check_batch_size, CameraError};
use crate::vector::normalize_vec;

/// Build a single cam2world matrix with `+y` as world up.
///
/// # Arguments
///
/// * `forward` - The viewing direction, not necessarily normalized.
/// * `origin` - The camera position in world coordinates.
///
/// PRECONDITION: `forward` is not parallel to `+y`.
pub fn cam2world_from_forward(forward: Vec3, origin: Vec3) -> Mat4 {
    let forward = normalize_vec(forward);
    let right = -normalize_vec(Vec3::Y.cross(forward));
    let up = normalize_vec(forward.cross(right));
    Mat4::from_cols(
        right.extend(0.0),
        up.extend(0.0),
        forward.extend(0.0),
        origin.extend(1.0),
    )
}

/// Build a single cam2world matrix with `-z` as world up and a left-pointing x axis.
///
/// PRECONDITION: `forward` is not parallel to `z`.
pub fn cam2world_neg_z_up_from_forward(forward: Vec3, origin: Vec3) -> Mat4 {
    let forward = normalize_vec(forward);
    let left = normalize_vec(Vec3::NEG_Z.cross(forward));
    let up = normalize_vec(forward.cross(left));
    Mat4::from_cols(
        left.extend(0.0),
        up.extend(0.0),
        forward.extend(0.0),
        origin.extend(1.0),
    )
}

/// Build a batch of cam2world matrices with `+y` as world up.
///
/// # Arguments
///
/// * `forward_vectors` - The viewing direction of each camera.
/// * `origins` - The position of each camera.
///
/// # Returns
///
/// One matrix per input pair, in input order. The translation column equals the supplied
/// origin exactly.
///
/// Example:
///
/// ```
/// use camrig::create_cam2world_matrix;
/// use glam::Vec3;
///
/// let cam2world = create_cam2world_matrix(&[Vec3::NEG_Z], &[Vec3::Z])?;
/// assert_eq!(cam2world[0].z_axis.truncate(), Vec3::NEG_Z);
/// # Ok::<(), camrig::CameraError>(())
/// ```
pub fn create_cam2world_matrix(
    forward_vectors: &[Vec3],
    origins: &[Vec3],
) -> Result<Vec<Mat4>, CameraError> {
    check_pairs(forward_vectors, origins)?;
    Ok(forward_vectors
        .iter()
        .zip(origins)
        .map(|(&forward, &origin)| cam2world_from_forward(forward, origin))
        .collect())
}

/// Build a batch of cam2world matrices with `-z` as world up and `(left, up, forward)` columns.
///
/// This is the convention of [`crate::path::generate_input_camera`]; it is not interchangeable
/// with [`create_cam2world_matrix`].
pub fn create_cam2world_matrix_neg_z_up(
    forward_vectors: &[Vec3],
    origins: &[Vec3],
) -> Result<Vec<Mat4>, CameraError> {
    check_pairs(forward_vectors, origins)?;
    Ok(forward_vectors
        .iter()
        .zip(origins)
        .map(|(&forward, &origin)| cam2world_neg_z_up_from_forward(forward, origin))
        .collect())
}

fn check_pairs(forward_vectors: &[Vec3], origins: &[Vec3]) -> Result<(), CameraError> {
    if forward_vectors.len() != origins.len() {
        return Err(CameraError::MismatchedArrayLengths {
            left_name: "forward vectors",
            left_len: forward_vectors.len(),
            right_name: "origins",
            right_len: origins.len(),
        });
    }
    check_batch_size(forward_vectors.len())
}

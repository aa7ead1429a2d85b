//! Fixed camera paths.
//!
//! Poses here use the `-z` up convention of
//! [`create_cam2world_matrix_neg_z_up`](crate::extrinsics::create_cam2world_matrix_neg_z_up)
//! and a pitch/yaw parametrization, both different from the random samplers.

use glam::Mat4;
use serde::{Deserialize, Serialize};

use crate::error::{check_batch_size, check_fov, CameraError};
use crate::extrinsics::create_cam2world_matrix_neg_z_up;
use crate::intrinsics::FlatIntrinsics;
use crate::spherical::pitch_yaw_to_cartesian;
use crate::vector::normalize_vec;

/// Number of values in a flattened pose row: a 4x4 pose followed by a 3x3 intrinsics matrix.
pub const POSE_ROW_LEN: usize = 25;

/// A cam2world matrix flattened row-major, followed by a row-major 3x3 intrinsics matrix.
pub type PoseRow = [f32; POSE_ROW_LEN];

/// Elevation rings of the mesh path, in degrees, from top to bottom.
pub const MESH_PATH_ELEVATIONS: [f32; 5] = [60.0, 30.0, 0.0, -30.0, -60.0];

/// Intrinsics written into every mesh path row, row-major.
///
/// These are fixed regardless of the field of view used to generate the poses.
pub const MESH_PATH_INTRINSICS: [f32; 9] = [1.3889, 0.0, 0.5, 0.0, 1.3889, 0.5, 0.0, 0.0, 0.0039];

/// Field of view, in degrees, the mesh path cameras are generated with.
///
/// Only the poses depend on it; the rows always carry [`MESH_PATH_INTRINSICS`].
pub const MESH_PATH_FOV_DEGREES: f32 = 30.0;

/// Parameters of [`uni_mesh_path_with_config`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshPathConfig {
    /// Azimuth steps per elevation ring.
    pub frame_number: usize,
    /// Distance from every camera to the world origin.
    pub radius: f32,
}

impl Default for MeshPathConfig {
    fn default() -> Self {
        Self {
            frame_number: 16,
            radius: 1.8,
        }
    }
}

/// Generate cameras looking at the origin from a list of `(pitch, yaw)` pairs in degrees.
///
/// # Arguments
///
/// * `radius` - Distance from every camera to the world origin.
/// * `poses` - One `[pitch, yaw]` pair per camera, in degrees. Pitch is measured from the
///   x-y plane towards `+z`.
/// * `fov_degrees` - Full-angle field of view.
///
/// # Returns
///
/// The cam2world matrices in input order, and the shared intrinsics computed with the
/// half-angle relation `f = 0.5 / tan(fov / 2)`.
///
/// Example:
///
/// ```
/// use camrig::generate_input_camera;
///
/// let (cam2world, intrinsics) = generate_input_camera(2.0, &[[0.0, 0.0], [30.0, 90.0]], 30.0)?;
/// assert_eq!(cam2world.len(), 2);
/// assert_eq!(intrinsics.cx, 0.5);
/// # Ok::<(), camrig::CameraError>(())
/// ```
pub fn generate_input_camera(
    radius: f32,
    poses: &[[f32; 2]],
    fov_degrees: f32,
) -> Result<(Vec<Mat4>, FlatIntrinsics), CameraError> {
    check_batch_size(poses.len())?;
    check_fov(fov_degrees)?;
    log::debug!("generating {} cameras at radius {}", poses.len(), radius);

    let origins = poses
        .iter()
        .map(|&[pitch, yaw]| pitch_yaw_to_cartesian(radius, pitch.to_radians(), yaw.to_radians()))
        .collect::<Vec<_>>();
    let forward_vectors = origins
        .iter()
        .map(|&origin| normalize_vec(-origin))
        .collect::<Vec<_>>();

    let cam2world = create_cam2world_matrix_neg_z_up(&forward_vectors, &origins)?;
    Ok((cam2world, FlatIntrinsics::from_fov(fov_degrees)?))
}

/// Flatten a cam2world matrix and a row-major 3x3 intrinsics matrix into one pose row.
///
/// The pose is written row by row, so the translation lands at indices 3, 7 and 11.
pub fn flatten_pose_row(cam2world: &Mat4, intrinsics: &[f32; 9]) -> PoseRow {
    let mut row = [0.0; POSE_ROW_LEN];
    row[..16].copy_from_slice(&cam2world.transpose().to_cols_array());
    row[16..].copy_from_slice(intrinsics);
    row
}

/// Build the mesh path: five elevation rings times `frame_number` azimuths.
///
/// Rings are ordered `60, 30, 0, -30, -60` degrees; within a ring the azimuth goes from 0
/// towards 360 degrees in `frame_number` equal steps, without repeating 360. Every row carries
/// [`MESH_PATH_INTRINSICS`].
///
/// Example:
///
/// ```
/// use camrig::path::{uni_mesh_path, MESH_PATH_INTRINSICS};
///
/// let rows = uni_mesh_path(4, 1.0)?;
/// assert_eq!(rows.len(), 20);
/// assert!(rows.iter().all(|row| row[16..] == MESH_PATH_INTRINSICS));
/// # Ok::<(), camrig::CameraError>(())
/// ```
pub fn uni_mesh_path(frame_number: usize, radius: f32) -> Result<Vec<PoseRow>, CameraError> {
    uni_mesh_path_with_config(&MeshPathConfig {
        frame_number,
        radius,
    })
}

/// Build the mesh path from a [`MeshPathConfig`].
pub fn uni_mesh_path_with_config(config: &MeshPathConfig) -> Result<Vec<PoseRow>, CameraError> {
    check_batch_size(config.frame_number)?;

    let poses = MESH_PATH_ELEVATIONS
        .iter()
        .flat_map(|&elevation| {
            (0..config.frame_number).map(move |i| {
                let azimuth = i as f64 / config.frame_number as f64 * 360.0;
                [elevation, azimuth as f32]
            })
        })
        .collect::<Vec<_>>();

    // the generated intrinsics are replaced by the fixed mesh path ones
    let (cam2world, _) = generate_input_camera(config.radius, &poses, MESH_PATH_FOV_DEGREES)?;
    log::debug!("mesh path with {} frames", cam2world.len());

    Ok(cam2world
        .iter()
        .map(|m| flatten_pose_row(m, &MESH_PATH_INTRINSICS))
        .collect())
}

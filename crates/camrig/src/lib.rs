#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # camrig
//!
//! Closed-form camera geometry for rendering and inference pipelines.
//!
//! ## Key Features
//!
//! - **Pose samplers**: Gaussian, uniform and look-at samplers on a sphere around a target
//! - **Cam2world matrices**: two explicit axis conventions, never mixed
//! - **Intrinsics**: normalized pinhole intrinsics from a field of view
//! - **Mesh path**: a fixed orbit of camera poses flattened into pose rows
//!
//! ## Example: Deterministic pose
//!
//! ```rust
//! use camrig::{seeded_rng, GaussianCameraPoseSampler, PoseSampler, PoseSamplerParams};
//!
//! let params = PoseSamplerParams {
//!     horizontal_mean: std::f32::consts::FRAC_PI_2,
//!     vertical_mean: std::f32::consts::FRAC_PI_2,
//!     ..Default::default()
//! };
//! let mut rng = seeded_rng(Some(0));
//! let cam2world = GaussianCameraPoseSampler::sample(&params, &mut rng)?;
//!
//! // the camera sits at [0, 0, 1] and looks at the origin
//! let origin = cam2world[0].w_axis.truncate();
//! assert!((origin - glam::Vec3::Z).length() < 1e-5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Example: Mesh path
//!
//! ```rust
//! let rows = camrig::uni_mesh_path(4, 1.0)?;
//! assert_eq!(rows.len(), 20);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Error types shared by every operation in the crate.
pub mod error;

/// Cam2world matrix construction for the two supported axis conventions.
pub mod extrinsics;

/// Normalized pinhole intrinsics.
pub mod intrinsics;

/// Fixed camera paths and pose rows.
pub mod path;

/// Random camera pose samplers.
pub mod sampler;

/// Area-uniform sampling of angles on the unit sphere.
pub mod sphere;

/// Spherical to Cartesian conversions.
pub mod spherical;

/// Vector helpers.
pub mod vector;

pub use error::CameraError;
pub use extrinsics::{create_cam2world_matrix, create_cam2world_matrix_neg_z_up};
pub use intrinsics::{denormalize_intrinsics, fov_to_intrinsics, FlatIntrinsics};
pub use path::{
    flatten_pose_row, generate_input_camera, uni_mesh_path, uni_mesh_path_with_config,
    MeshPathConfig, PoseRow,
};
pub use sampler::{
    sample_poses, seeded_rng, GaussianCameraPoseSampler, LookAtParams, LookAtPoseSampler,
    PoseSampler, PoseSamplerParams, PoseSamplingMethod, UniformCameraPoseSampler,
};
pub use sphere::sample_uniform_on_sphere;

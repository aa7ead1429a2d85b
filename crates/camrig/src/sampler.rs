//! Camera pose samplers.
//!
//! Every sampler draws a horizontal (azimuth) and a vertical (polar) value per camera, places the
//! camera on a sphere of the given radius and aims it either at the world origin or at a look-at
//! target. The coordinate system is y-up, z-forward, x-left: a camera with
//! `horizontal = pi/2, vertical = pi/2` sits at `[0, 0, radius]`.
//!
//! The random source is always supplied by the caller, so seeding a [`rand::rngs::StdRng`] makes
//! every sampler deterministic.

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{check_batch_size, CameraError};
use crate::extrinsics::cam2world_from_forward;
use crate::spherical::{polar_to_cartesian, vertical_to_polar};

/// Parameters shared by all pose samplers.
///
/// Angles are in radians. With both standard deviations at zero the sampler is deterministic
/// and every camera in the batch is identical. The default places a single camera at
/// `[0, 0, 1]` looking at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseSamplerParams {
    /// Mean azimuth (rotation around the y axis).
    pub horizontal_mean: f32,
    /// Mean polar angle (angle from the y axis).
    pub vertical_mean: f32,
    /// Spread of the azimuth. Standard deviation for Gaussian sampling, half-range for uniform.
    pub horizontal_stddev: f32,
    /// Spread of the polar angle. Standard deviation for Gaussian sampling, half-range for uniform.
    pub vertical_stddev: f32,
    /// Distance from the camera to the sphere center.
    pub radius: f32,
    /// Number of cameras to sample.
    pub batch_size: usize,
}

impl Default for PoseSamplerParams {
    fn default() -> Self {
        Self {
            horizontal_mean: std::f32::consts::FRAC_PI_2,
            vertical_mean: std::f32::consts::FRAC_PI_2,
            horizontal_stddev: 0.0,
            vertical_stddev: 0.0,
            radius: 1.0,
            batch_size: 1,
        }
    }
}

/// Parameters for [`LookAtPoseSampler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookAtParams {
    /// Angle distribution, radius and batch size.
    pub pose: PoseSamplerParams,
    /// World point every camera is aimed at.
    pub lookat_position: [f32; 3],
}

/// Trait implemented by every pose sampler in this module.
pub trait PoseSampler {
    /// Parameter object specific to the sampler.
    type Param;

    /// Sample a batch of cam2world matrices.
    ///
    /// # Arguments
    /// * `params` – Sampler-specific parameters.
    /// * `rng` – Random source; the same seed always yields the same batch.
    fn sample<R: Rng + ?Sized>(
        params: &Self::Param,
        rng: &mut R,
    ) -> Result<Vec<Mat4>, CameraError>;
}

/// Samples azimuth and polar angle from a Gaussian and looks at the world origin.
///
/// Example:
///
/// ```
/// use camrig::{seeded_rng, GaussianCameraPoseSampler, PoseSampler, PoseSamplerParams};
///
/// let params = PoseSamplerParams {
///     horizontal_mean: 1.0,
///     vertical_mean: 1.2,
///     horizontal_stddev: 0.3,
///     vertical_stddev: 0.1,
///     radius: 2.7,
///     batch_size: 16,
/// };
/// let poses = GaussianCameraPoseSampler::sample(&params, &mut seeded_rng(Some(42)))?;
/// assert_eq!(poses.len(), 16);
/// # Ok::<(), camrig::CameraError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GaussianCameraPoseSampler;

/// Samples azimuth and polar angle uniformly in `mean ± stddev` and looks at the world origin.
#[derive(Debug, Clone, Copy)]
pub struct UniformCameraPoseSampler;

/// Same distribution as [`GaussianCameraPoseSampler`], aimed at an arbitrary target.
#[derive(Debug, Clone, Copy)]
pub struct LookAtPoseSampler;

impl PoseSampler for GaussianCameraPoseSampler {
    type Param = PoseSamplerParams;

    fn sample<R: Rng + ?Sized>(
        params: &PoseSamplerParams,
        rng: &mut R,
    ) -> Result<Vec<Mat4>, CameraError> {
        sample_on_sphere(params, AngleDistribution::Gaussian, Vec3::ZERO, rng)
    }
}

impl PoseSampler for UniformCameraPoseSampler {
    type Param = PoseSamplerParams;

    fn sample<R: Rng + ?Sized>(
        params: &PoseSamplerParams,
        rng: &mut R,
    ) -> Result<Vec<Mat4>, CameraError> {
        sample_on_sphere(params, AngleDistribution::Uniform, Vec3::ZERO, rng)
    }
}

impl PoseSampler for LookAtPoseSampler {
    type Param = LookAtParams;

    fn sample<R: Rng + ?Sized>(
        params: &LookAtParams,
        rng: &mut R,
    ) -> Result<Vec<Mat4>, CameraError> {
        let target = Vec3::from_array(params.lookat_position);
        sample_on_sphere(&params.pose, AngleDistribution::Gaussian, target, rng)
    }
}

/// Enumeration of the pose samplers available in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PoseSamplingMethod {
    /// Gaussian angles, looking at the origin.
    Gaussian(PoseSamplerParams),
    /// Uniform angles, looking at the origin.
    Uniform(PoseSamplerParams),
    /// Gaussian angles, looking at a target point.
    LookAt(LookAtParams),
}

/// Dispatch function that routes to the chosen pose sampler.
pub fn sample_poses<R: Rng + ?Sized>(
    method: &PoseSamplingMethod,
    rng: &mut R,
) -> Result<Vec<Mat4>, CameraError> {
    match method {
        PoseSamplingMethod::Gaussian(params) => GaussianCameraPoseSampler::sample(params, rng),
        PoseSamplingMethod::Uniform(params) => UniformCameraPoseSampler::sample(params, rng),
        PoseSamplingMethod::LookAt(params) => LookAtPoseSampler::sample(params, rng),
    }
}

/// Create a random generator, seeded for reproducible runs or from entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut tr = rand::rng();
            StdRng::from_rng(&mut tr)
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum AngleDistribution {
    Gaussian,
    Uniform,
}

impl AngleDistribution {
    fn draw<R: Rng + ?Sized>(self, rng: &mut R, mean: f32, stddev: f32) -> f32 {
        let unit = match self {
            AngleDistribution::Gaussian => standard_normal(rng),
            AngleDistribution::Uniform => rng.random::<f32>() * 2.0 - 1.0,
        };
        unit * stddev + mean
    }
}

/// Standard normal draw via the Box-Muller transform.
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    // u1 in (0, 1] keeps the logarithm finite
    let u1 = 1.0 - rng.random::<f32>();
    let u2 = rng.random::<f32>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos()
}

fn sample_on_sphere<R: Rng + ?Sized>(
    params: &PoseSamplerParams,
    distribution: AngleDistribution,
    lookat: Vec3,
    rng: &mut R,
) -> Result<Vec<Mat4>, CameraError> {
    check_batch_size(params.batch_size)?;
    if params.radius <= 0.0 {
        log::warn!("sampling cameras with non-positive radius {}", params.radius);
    }
    log::debug!(
        "sampling {} {:?} camera poses at radius {}",
        params.batch_size,
        distribution,
        params.radius
    );

    // all horizontal draws first, then all vertical draws
    let horizontal = (0..params.batch_size)
        .map(|_| distribution.draw(rng, params.horizontal_mean, params.horizontal_stddev))
        .collect::<Vec<_>>();
    let vertical = (0..params.batch_size)
        .map(|_| distribution.draw(rng, params.vertical_mean, params.vertical_stddev))
        .collect::<Vec<_>>();

    Ok(horizontal
        .into_iter()
        .zip(vertical)
        .map(|(theta, v)| {
            let origin = polar_to_cartesian(params.radius, theta, vertical_to_polar(v));
            cam2world_from_forward(lookat - origin, origin)
        })
        .collect())
}

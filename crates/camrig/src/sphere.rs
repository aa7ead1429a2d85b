use rand::Rng;

use crate::error::{check_batch_size, CameraError};

/// Sample `num_samples` directions uniformly over the area of the unit sphere.
///
/// Returns the azimuths `theta` in `[0, 2pi)` and the polar angles `phi` in `[0, pi]`.
/// `cos(phi)` is drawn uniformly from `[-1, 1)`, so `phi` itself is not uniform and no band of
/// latitude is over-represented.
///
/// Example:
///
/// ```
/// use camrig::{sample_uniform_on_sphere, seeded_rng};
///
/// let (theta, phi) = sample_uniform_on_sphere(&mut seeded_rng(Some(0)), 8)?;
/// assert_eq!(theta.len(), 8);
/// assert!(phi.iter().all(|p| (0.0..=std::f32::consts::PI).contains(p)));
/// # Ok::<(), camrig::CameraError>(())
/// ```
pub fn sample_uniform_on_sphere<R: Rng + ?Sized>(
    rng: &mut R,
    num_samples: usize,
) -> Result<(Vec<f32>, Vec<f32>), CameraError> {
    check_batch_size(num_samples)?;

    let theta = (0..num_samples)
        .map(|_| rng.random::<f32>() * std::f32::consts::TAU)
        .collect::<Vec<_>>();
    let phi = (0..num_samples)
        .map(|_| (rng.random::<f32>() * 2.0 - 1.0).acos())
        .collect::<Vec<_>>();

    Ok((theta, phi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::seeded_rng;

    #[test]
    fn test_sample_uniform_on_sphere_ranges() -> Result<(), CameraError> {
        let (theta, phi) = sample_uniform_on_sphere(&mut seeded_rng(Some(0)), 1000)?;
        assert_eq!(theta.len(), 1000);
        assert_eq!(phi.len(), 1000);
        assert!(theta
            .iter()
            .all(|t| (0.0..=std::f32::consts::TAU).contains(t)));
        assert!(phi.iter().all(|p| (0.0..=std::f32::consts::PI).contains(p)));
        Ok(())
    }

    #[test]
    fn test_sample_uniform_on_sphere_hemispheres_balanced() -> Result<(), CameraError> {
        let (_, phi) = sample_uniform_on_sphere(&mut seeded_rng(Some(9)), 10_000)?;
        let north = phi.iter().filter(|&&p| p < std::f32::consts::FRAC_PI_2).count();
        assert!((4_700..=5_300).contains(&north));
        Ok(())
    }

    #[test]
    fn test_sample_uniform_on_sphere_empty() {
        assert_eq!(
            sample_uniform_on_sphere(&mut seeded_rng(Some(0)), 0),
            Err(CameraError::InvalidBatchSize(0))
        );
    }
}

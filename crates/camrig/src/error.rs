use thiserror::Error;

/// Error types for camera construction and sampling.
///
/// Degenerate geometry (zero-length vectors, a zero radius) is not an error: it propagates
/// as NaN or infinity through the returned matrices.
#[derive(Debug, Error, PartialEq)]
pub enum CameraError {
    /// The number of poses, frames or samples requested is zero.
    #[error("Batch size must be at least 1, got {0}")]
    InvalidBatchSize(usize),

    /// The field of view is not in the open interval (0, 180) degrees.
    #[error("Field of view must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    /// Two batched inputs that must be paired have different lengths.
    #[error("Mismatched array lengths: {left_name} ({left_len}) != {right_name} ({right_len})")]
    MismatchedArrayLengths {
        /// Label for the left-hand slice
        left_name: &'static str,
        /// Length of the left-hand slice
        left_len: usize,
        /// Label for the right-hand slice
        right_name: &'static str,
        /// Length of the right-hand slice
        right_len: usize,
    },
}

/// Checks that a batch carries at least one element.
pub(crate) fn check_batch_size(batch_size: usize) -> Result<(), CameraError> {
    if batch_size == 0 {
        return Err(CameraError::InvalidBatchSize(batch_size));
    }
    Ok(())
}

/// Checks that a field of view, in degrees, lies strictly between 0 and 180.
pub(crate) fn check_fov(fov_degrees: f32) -> Result<(), CameraError> {
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(CameraError::InvalidFov(fov_degrees));
    }
    Ok(())
}

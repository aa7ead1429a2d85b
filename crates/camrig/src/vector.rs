use glam::Vec3;

/// Divide a vector by its Euclidean norm.
///
/// A zero vector yields NaN components; callers are expected to pass non-degenerate input.
#[inline]
pub fn normalize_vec(v: Vec3) -> Vec3 {
    v / v.length()
}

/// Normalize a batch of vectors, preserving order.
///
/// Example:
///
/// ```
/// use camrig::vector::normalize_vecs;
/// use glam::Vec3;
///
/// let unit = normalize_vecs(&[Vec3::new(3.0, 0.0, 4.0)]);
/// assert_eq!(unit[0], Vec3::new(0.6, 0.0, 0.8));
/// ```
pub fn normalize_vecs(vectors: &[Vec3]) -> Vec<Vec3> {
    vectors.iter().map(|&v| normalize_vec(v)).collect()
}

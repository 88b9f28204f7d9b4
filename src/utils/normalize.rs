use crate::math::{Real, Vector};

/// Normalizes `v`, returning the zero vector if `v` has a zero length.
///
/// Unlike [`Vector::normalize`], this never produces NaN components, which makes it
/// suitable for contact normals computed from points that may coincide.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use capsweep3d::math::Vector;
/// use capsweep3d::utils::normalize_or_zero;
///
/// assert_eq!(normalize_or_zero(Vector::new(0.0, 3.0, 4.0)), Vector::new(0.0, 0.6, 0.8));
/// assert_eq!(normalize_or_zero(Vector::zeros()), Vector::zeros());
/// # }
/// ```
#[inline]
pub fn normalize_or_zero(v: Vector<Real>) -> Vector<Real> {
    v.try_normalize(0.0).unwrap_or_else(Vector::zeros)
}

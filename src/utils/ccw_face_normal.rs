use crate::math::{Point, Real, UnitVector, DEFAULT_EPSILON};

/// Computes the normal of a counter-clock-wise triangle.
///
/// Returns `None` if the triangle is degenerate, i.e., if its three points are coincident or
/// collinear. Collinearity is measured relative to the length of the triangle's sides, so the
/// result does not depend on the triangle's size.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 3]) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let ac = *pts[2] - *pts[0];
    let res = ab.cross(&ac);
    let norm = res.norm();

    if norm == 0.0 || norm <= DEFAULT_EPSILON * ab.norm() * ac.norm() {
        None
    } else {
        Some(UnitVector::new_unchecked(res / norm))
    }
}

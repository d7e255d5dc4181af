use crate::math::{Point, Real, Vector};
use na;
use num::Zero;

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally.
///
/// # Panics
///
/// Panics if the input slice is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use shatter3d::math::Point;
/// use shatter3d::utils::center;
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(4.0, 0.0, 0.0),
///     Point::new(0.0, 4.0, 0.0),
/// ];
///
/// let c = center(&points);
///
/// assert!((c.x - 4.0 / 3.0).abs() < 1.0e-6);
/// assert!((c.y - 4.0 / 3.0).abs() < 1.0e-6);
/// assert!(c.z.abs() < 1.0e-6);
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(
        !pts.is_empty(),
        "Cannot compute the center of less than 1 point."
    );

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));

    let mut res: Vector<Real> = Vector::zero();
    for pt in pts {
        res += pt.coords * denom;
    }

    Point::from(res)
}

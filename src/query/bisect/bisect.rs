use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::TriMesh;

/// Error produced when a bisection cannot be attempted at all.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BisectError {
    /// The splitting plane normal has a length of zero (or too close to zero).
    #[error("the splitting plane normal has a length of zero (or too close to zero).")]
    DegenerateNormal,
}

/// Options controlling a plane bisection.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BisectOptions {
    /// If `true`, the boundary left open on each half by the discarded
    /// straddling triangles is capped with a triangle fan, keeping each
    /// fragment closed.
    ///
    /// If `false`, straddling triangles contribute nothing to either side and
    /// the fragments are left open.
    pub fill_holes: bool,
    /// Magnitude of the outward impulse suggested for each fragment.
    ///
    /// The positive-side fragment is pushed along the plane normal, the
    /// negative-side fragment in the opposite direction. This is a tuning
    /// constant for the caller's physics layer, not part of the geometry.
    pub impulse: Real,
}

impl Default for BisectOptions {
    fn default() -> Self {
        BisectOptions {
            fill_holes: true,
            impulse: 0.5,
        }
    }
}

/// One of the (at most two) meshes produced by a bisection.
///
/// A fragment is expressed in a local frame centered on its own vertex
/// centroid. The caller is expected to spawn it at the source body's
/// position translated by `offset`, and to kick it with `impulse` so the two
/// halves drift apart.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Fragment {
    /// The fragment's geometry, recentered on its own vertex centroid.
    pub mesh: TriMesh,
    /// The fragment's vertex centroid, expressed in the local frame of the
    /// mesh the fragment was cut from.
    pub offset: Vector<Real>,
    /// Suggested outward velocity change for this fragment, directed along
    /// the splitting plane's normal (away from the other fragment).
    pub impulse: Vector<Real>,
}

/// The result of a plane bisection.
///
/// Each side is absent if it ended up with fewer than four vertices: such a
/// sliver is too small to form a meaningful closed body and is discarded
/// rather than returned.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bisection {
    /// The fragment lying on the positive half-space delimited by the
    /// splitting plane.
    pub positive: Option<Fragment>,
    /// The fragment lying on the negative half-space delimited by the
    /// splitting plane.
    pub negative: Option<Fragment>,
}

impl Bisection {
    /// Does this bisection contain no fragment at all?
    ///
    /// This happens when both sides of the cut are degenerate, and means the
    /// source body is destroyed without leaving any debris behind.
    pub fn is_empty(&self) -> bool {
        self.positive.is_none() && self.negative.is_none()
    }

    /// The fragments of this bisection, positive side first.
    pub fn into_fragments(self) -> impl Iterator<Item = Fragment> {
        self.positive.into_iter().chain(self.negative)
    }
}

/// Splits a shape by a plane orthogonal to one of the canonical axes.
pub trait CanonicalBisect: Sized {
    /// Splits this shape by a plane with a normal with its `axis`-th component set to 1.
    ///
    /// The splitting plane is shifted wrt. the origin by the `bias` (i.e. it passes through
    /// the point equal to `normal * bias`).
    fn canonical_bisect(
        &self,
        axis: usize,
        bias: Real,
        epsilon: Real,
        options: BisectOptions,
    ) -> Bisection;
}

/// Splits a shape by an arbitrary plane, capping and recentering both halves.
pub trait Bisect: Sized {
    /// Splits this shape by the plane with unit normal `local_axis` passing through the
    /// point equal to `local_axis * bias`.
    ///
    /// A vertex with a signed distance to the plane greater than `epsilon` lies on the
    /// positive side; every other vertex (the plane itself included) lies on the negative
    /// side.
    fn local_bisect(
        &self,
        local_axis: &UnitVector<Real>,
        bias: Real,
        epsilon: Real,
        options: BisectOptions,
    ) -> Bisection;
}

/// Splits `mesh` by the plane passing through `plane_point` with normal `plane_normal`.
///
/// Triangles lying entirely on one side of the plane are copied to that side's fragment.
/// Straddling triangles are discarded; with [`BisectOptions::fill_holes`] enabled, the
/// boundary they leave open is capped with a triangle fan so both fragments stay closed.
/// Each emitted fragment is recentered on its own vertex centroid, and the centroid is
/// returned as the fragment's spawn offset.
///
/// The plane and the mesh must be expressed in the same local frame; `plane_normal` does
/// not need to be normalized but must not have a length of zero.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use shatter3d::math::{Point, Vector};
/// use shatter3d::query::bisect::{bisect, BisectOptions};
/// use shatter3d::shape::TriMesh;
///
/// // A tetrahedron, cut just below its apex.
/// let mesh = TriMesh::new(
///     vec![
///         Point::new(0.0, 0.0, 0.0),
///         Point::new(1.0, 0.0, 0.0),
///         Point::new(0.0, 1.0, 0.0),
///         Point::new(0.0, 0.0, 1.0),
///     ],
///     vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
/// )
/// .unwrap();
///
/// let result = bisect(
///     &mesh,
///     &Point::new(0.0, 0.0, 0.5),
///     &Vector::new(0.0, 0.0, 1.0),
///     BisectOptions::default(),
/// )
/// .unwrap();
///
/// // The apex side is a sliver with fewer than four vertices: it is dropped.
/// assert!(result.positive.is_none());
/// assert_eq!(result.negative.unwrap().mesh.vertices().len(), 4);
/// # }
/// ```
pub fn bisect(
    mesh: &TriMesh,
    plane_point: &Point<Real>,
    plane_normal: &Vector<Real>,
    options: BisectOptions,
) -> Result<Bisection, BisectError> {
    let local_axis = UnitVector::try_new(*plane_normal, DEFAULT_EPSILON)
        .ok_or(BisectError::DegenerateNormal)?;
    let bias = plane_point.coords.dot(&local_axis);
    Ok(mesh.local_bisect(&local_axis, bias, 0.0, options))
}

//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners. Every [`TriMesh`](crate::shape::TriMesh)
/// derives one from its vertices; the split planner reads the model extents from it and
/// every grid cell is described as one.
///
/// - **mins**: the point with the smallest coordinates on each axis.
/// - **maxs**: the point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`, `mins.z ≤ maxs.z`.
///
/// An `Aabb` is a value: anything that changes the geometry it was computed from
/// (a flip, a boolean operation) requires computing a new one.
///
/// # Example
///
/// ```rust
/// use gridsplit3d::bounding_volume::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(200.0, 150.0, 50.0));
///
/// assert_eq!(aabb.center(), Point3::new(100.0, 75.0, 25.0));
/// assert_eq!(aabb.extents().x, 200.0);
/// assert_eq!(aabb.half_extents().z, 25.0);
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// Each component of `mins` must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Useful as the starting value when accumulating points with [`Aabb::take_point`].
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points (references).
    pub fn from_points_ref<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        Self::from_points(pts.into_iter().copied())
    }

    /// Creates a new AABB that tightly encloses a set of points (values).
    ///
    /// Returns an invalid AABB (see [`Aabb::is_valid`]) if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        pts.into_iter().for_each(|pt| result.take_point(pt));
        result
    }

    /// Does this AABB have `mins ≤ maxs` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        (0..DIM).all(|i| self.mins[i] <= self.maxs[i])
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents (full size along each axis) of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Enlarges this AABB by `margin` on every side.
    #[inline]
    pub fn loosened(&self, margin: Real) -> Self {
        Aabb::new(
            self.mins - Vector::repeat(margin),
            self.maxs + Vector::repeat(margin),
        )
    }

    /// Is the point `point` inside (or on the boundary of) this AABB?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        (0..DIM).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxs[i])
    }

    /// Do `self` and `other` overlap (touching counts as overlapping)?
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Computes the smallest AABB containing both `self` and `other`.
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: Point::from(self.mins.coords.inf(&other.mins.coords)),
            maxs: Point::from(self.maxs.coords.sup(&other.maxs.coords)),
        }
    }
}

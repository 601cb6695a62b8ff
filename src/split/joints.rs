use super::config::check_positive;
use super::SplitError;
use crate::math::{Isometry, Real, Vector};
use crate::shape::TriMesh;
use crate::transformation::{self, BooleanOpError};
use na::Point2;

/// An axis of the model along which it can be cut.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum SplitAxis {
    /// The `x` axis.
    X,
    /// The `y` axis.
    Y,
}

impl SplitAxis {
    /// The index of this axis in a point or vector.
    pub fn index(self) -> usize {
        match self {
            SplitAxis::X => 0,
            SplitAxis::Y => 1,
        }
    }
}

/// Shape of a dovetail joint.
///
/// The dovetail is a trapezoid of the local `xy` plane, with its base from `(0, 0)` to
/// `(width, 0)` and its top at `y = height`, both sides inset by `tan(angle) * height`. It is
/// extruded along the local `z` axis by `depth`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DovetailParams {
    /// Width of the base (mm).
    pub width: Real,
    /// Height of the trapezoid (mm).
    pub height: Real,
    /// Extrusion length (mm).
    pub depth: Real,
    /// Taper of the sides (radians).
    pub angle: Real,
}

impl Default for DovetailParams {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 5.0,
            depth: 10.0,
            angle: (15.0 as Real).to_radians(),
        }
    }
}

/// The two solids of one joint.
#[derive(Clone, Debug)]
pub struct JointPair {
    /// The tenon, added to the model.
    pub male: TriMesh,
    /// The mortise, removed from the model. The mirror image of `male` through the cut plane.
    pub female: TriMesh,
}

impl DovetailParams {
    /// Checks that every dimension and the angle are positive, and that the sides of the
    /// trapezoid do not cross.
    pub fn validate(&self) -> Result<(), SplitError> {
        check_positive("dovetail_width", self.width)?;
        check_positive("dovetail_height", self.height)?;
        check_positive("dovetail_depth", self.depth)?;

        if !(self.angle > 0.0 && 2.0 * self.inset() < self.width) {
            return Err(SplitError::InvalidConfiguration(format!(
                "a dovetail angle of {}° is out of range for a dovetail of width {} and height {}",
                self.angle.to_degrees(),
                self.width,
                self.height
            )));
        }

        Ok(())
    }

    fn inset(&self) -> Real {
        self.angle.tan() * self.height
    }

    /// The trapezoid, counter-clockwise.
    pub fn profile(&self) -> [Point2<Real>; 4] {
        let inset = self.inset();
        [
            Point2::new(0.0, 0.0),
            Point2::new(self.width, 0.0),
            Point2::new(self.width - inset, self.height),
            Point2::new(inset, self.height),
        ]
    }

    /// Builds the joint at the cut plane orthogonal to `axis` at the coordinate `position`.
    ///
    /// The dovetail is only moved along `axis`: its other coordinates stay those of its local
    /// frame.
    pub fn joint_pair(&self, axis: SplitAxis, position: Real) -> Result<JointPair, SplitError> {
        self.validate()?;

        let (vtx, idx) = transformation::extrude_convex_polygon(&self.profile(), self.depth);
        let mut shift = Vector::zeros();
        shift[axis.index()] = position;

        let mut male = TriMesh::new(vtx, idx).map_err(|e| {
            SplitError::InvalidConfiguration(format!("degenerate dovetail: {e}"))
        })?;
        male.transform_vertices(&Isometry::translation(shift.x, shift.y, shift.z));

        let mut female = male.clone();
        female.mirror(axis.index(), position);

        Ok(JointPair { male, female })
    }
}

/// Carves a dovetail joint at every interior cut plane along `axis`.
///
/// The mesh is cut in `num_splits` equal slices along `axis`, measured on its current bounding
/// box. At each of the `num_splits - 1` interior planes, the male solid is added to the mesh and
/// the female solid removed from it. Nothing happens if `num_splits <= 1`.
pub fn add_joints(
    mesh: TriMesh,
    axis: SplitAxis,
    num_splits: u32,
    params: &DovetailParams,
) -> Result<TriMesh, SplitError> {
    if num_splits <= 1 {
        return Ok(mesh);
    }

    params.validate()?;

    let aabb = *mesh.local_aabb();
    let axis_min = aabb.mins[axis.index()];
    let step = aabb.extents()[axis.index()] / num_splits as Real;
    let mut mesh = mesh;

    for i in 1..num_splits {
        let position = axis_min + i as Real * step;
        let JointPair { male, female } = params.joint_pair(axis, position)?;
        log::debug!("adding a dovetail joint at {axis:?} = {position:.3}");

        mesh = transformation::union(&mesh, &male)?;
        mesh = transformation::difference(&mesh, &female)?.ok_or(BooleanOpError::EmptyResult)?;
    }

    Ok(mesh)
}

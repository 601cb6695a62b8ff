use crate::math::{Isometry, Real, Translation};
use crate::shape::TriMesh;
use na::{Quaternion, UnitQuaternion};

/// Turns a mesh upside-down: rotation by 180° about the `x` axis through the origin.
///
/// The rotation is exact: `(x, y, z)` becomes `(x, -y, -z)`.
pub fn flip(mesh: TriMesh) -> TriMesh {
    // The unit quaternion of a half-turn about `x` is `(0, 1, 0, 0)`.
    let half_turn = UnitQuaternion::new_unchecked(Quaternion::new(0.0 as Real, 1.0, 0.0, 0.0));
    mesh.transformed(&Isometry::from_parts(Translation::identity(), half_turn))
}

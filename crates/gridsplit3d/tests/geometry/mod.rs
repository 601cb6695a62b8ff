use gridsplit3d::bounding_volume::Aabb;
use gridsplit3d::math::{Point, Real};
use gridsplit3d::shape::TriMesh;
use gridsplit3d::transformation;

mod end_to_end;
mod joints;
mod partition;
mod planner_properties;

pub fn box_mesh(mins: [Real; 3], maxs: [Real; 3]) -> TriMesh {
    TriMesh::from(Aabb::new(Point::from(mins), Point::from(maxs)))
}

/// An L-shaped prism covering three quarters of `[0, 2] x [0, 2] x [0, 1]`. The quarter
/// `[1, 2] x [1, 2]` is empty.
pub fn l_shape() -> TriMesh {
    let bottom = box_mesh([0.0, 0.0, 0.0], [2.0, 1.0, 1.0]);
    let left = box_mesh([0.0, 1.0, 0.0], [1.0, 2.0, 1.0]);
    transformation::union(&bottom, &left).unwrap()
}

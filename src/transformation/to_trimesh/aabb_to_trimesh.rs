use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};

impl Aabb {
    /// Discretize the boundary of this AABB as a triangle-mesh.
    ///
    /// The vertices are exactly the corners of the box, so that the meshes of two boxes sharing
    /// a face have identical coordinates on that face.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (mut vtx, idx) = unit_cuboid();
        for pt in &mut vtx {
            for i in 0..DIM {
                pt[i] = if pt[i] < 0.0 {
                    self.mins[i]
                } else {
                    self.maxs[i]
                };
            }
        }
        (vtx, idx)
    }
}

/**
 * Generates a cuboid shape with a split index buffer.
 *
 * The cuboid is centered at the origin, and has its half extents set to 0.5.
 */
fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}

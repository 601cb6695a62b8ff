use crate::math::{Point, Real};
use crate::transformation::utils;
use na::Point2;

/// Extrudes a convex polygon of the local `xy` plane along `+z`.
///
/// The `profile` must be convex and counter-clockwise when seen from `+z`. The resulting prism
/// has its bottom face at `z = 0` and its top face at `z = depth`, with every triangle facing
/// outward.
///
/// # Example
///
/// ```
/// use gridsplit3d::transformation::extrude_convex_polygon;
/// use gridsplit3d::shape::TriMesh;
/// use nalgebra::Point2;
///
/// let square = [
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ];
/// let (vtx, idx) = extrude_convex_polygon(&square, 3.0);
/// let prism = TriMesh::new(vtx, idx).unwrap();
///
/// assert_eq!(prism.num_triangles(), 12);
/// assert!((prism.signed_volume() - 12.0).abs() < 1.0e-9);
/// ```
pub fn extrude_convex_polygon(
    profile: &[Point2<Real>],
    depth: Real,
) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    assert!(profile.len() >= 3, "a polygon needs at least three vertices");

    let n = profile.len() as u32;
    let mut vertices = Vec::with_capacity(profile.len() * 2);
    let mut indices = Vec::with_capacity(profile.len() * 4 - 4);

    vertices.extend(profile.iter().map(|p| Point::new(p.x, p.y, 0.0)));
    vertices.extend(profile.iter().map(|p| Point::new(p.x, p.y, depth)));

    // Bottom cap, seen from -z.
    let mut bottom = vec![];
    utils::push_filled_polygon_indices(0, n, &mut bottom);
    utils::reverse_clockwising(&mut bottom);
    indices.append(&mut bottom);

    // Top cap.
    utils::push_filled_polygon_indices(n, n, &mut indices);

    // Side walls.
    for i in 0..n {
        let j = (i + 1) % n;
        utils::push_rectangle_indices(n + i, n + j, i, j, &mut indices);
    }

    (vertices, indices)
}

use super::plane::Plane;
use crate::math::{Point, Real};
use crate::shape::TriMesh;
use smallvec::SmallVec;

/// A planar convex polygon, counter-clockwise when seen from the front of its plane.
#[derive(Clone, Debug)]
pub(super) struct Polygon {
    pub vertices: SmallVec<[Point<Real>; 8]>,
    /// The support plane of the polygon it was cut from. Pieces never re-derive it.
    pub plane: Plane,
}

impl Polygon {
    /// Builds a polygon, deriving its plane from its first three vertices.
    pub fn new(vertices: SmallVec<[Point<Real>; 8]>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }

        let plane = Plane::from_points(&vertices[0], &vertices[1], &vertices[2])?;
        Some(Self { vertices, plane })
    }

    pub fn with_plane(vertices: SmallVec<[Point<Real>; 8]>, plane: Plane) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices, plane })
    }

    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    #[cfg(test)]
    pub fn area(&self) -> Real {
        let mut normal = crate::math::Vector::zeros();
        let first = self.vertices[0];

        for w in self.vertices[1..].windows(2) {
            normal += (w[0] - first).cross(&(w[1] - first));
        }

        normal.norm() / 2.0
    }
}

/// Converts every non-degenerate triangle of `mesh` to a polygon.
pub(super) fn from_trimesh(mesh: &TriMesh) -> Vec<Polygon> {
    mesh.triangles()
        .filter_map(|tri| Polygon::new(SmallVec::from_slice(&tri)))
        .collect()
}

/// Fans every polygon into triangles and welds them into a mesh.
///
/// Returns `None` if nothing is left.
pub(super) fn to_trimesh(polygons: &[Polygon]) -> Option<TriMesh> {
    let triangles = polygons.iter().flat_map(|poly| {
        let first = poly.vertices[0];
        poly.vertices[1..]
            .windows(2)
            .map(move |w| [first, w[0], w[1]])
    });

    TriMesh::from_triangles(triangles).ok()
}

pub(super) fn flip_all(polygons: &mut [Polygon]) {
    polygons.iter_mut().for_each(Polygon::flip)
}

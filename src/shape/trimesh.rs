use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, DIM};
use num::Zero;
use std::collections::HashMap;
use std::fmt;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {vertex} which does not exist.")]
    IndexOutOfBounds {
        /// The triangle with the invalid index.
        triangle: u32,
        /// The invalid vertex index.
        vertex: u32,
    },
}

/// A triangle mesh bounding a solid.
///
/// Triangles are wound counter-clockwise when seen from outside of the solid, so that
/// [`TriMesh::signed_volume`] is positive for a properly oriented closed mesh.
///
/// The mesh is immutable geometry as far as its bounding box is concerned: every method that
/// moves vertices recomputes [`TriMesh::local_aabb`].
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    aabb: Aabb,
}

impl fmt::Debug for TriMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriMesh")
            .field("num_vertices", &self.vertices.len())
            .field("num_triangles", &self.indices.len())
            .field("aabb", &self.aabb)
            .finish()
    }
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (i, idx) in indices.iter().enumerate() {
            if let Some(vid) = idx.iter().find(|vid| **vid as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: i as u32,
                    vertex: *vid,
                });
            }
        }

        let aabb = Aabb::from_points_ref(&vertices);
        Ok(Self {
            vertices,
            indices,
            aabb,
        })
    }

    /// Creates a triangle mesh from a soup of independent triangles.
    ///
    /// Vertices with bit-identical coordinates are merged. Triangles that collapse to a segment
    /// or a point after merging are dropped.
    pub fn from_triangles<I>(triangles: I) -> Result<Self, TriMeshBuilderError>
    where
        I: IntoIterator<Item = [Point<Real>; 3]>,
    {
        let mut vertices = vec![];
        let mut indices = vec![];
        let mut index_map = HashMap::new();

        for tri in triangles {
            let idx = tri.map(|pt| {
                *index_map.entry(vertex_key(&pt)).or_insert_with(|| {
                    vertices.push(pt);
                    vertices.len() as u32 - 1
                })
            });

            if idx[0] != idx[1] && idx[1] != idx[2] && idx[2] != idx[0] {
                indices.push(idx);
            }
        }

        Self::new(vertices, indices)
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// An iterator through the vertices of every triangle of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = [Point<Real>; 3]> + '_ {
        self.indices
            .iter()
            .map(move |idx| idx.map(|vid| self.vertices[vid as usize]))
    }

    /// The bounding box of this mesh, in its local frame.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Consumes `self` and returns its vertex and index buffers.
    pub fn into_buffers(self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        (self.vertices, self.indices)
    }

    /// Transforms in-place the vertices of this triangle mesh.
    pub fn transform_vertices(&mut self, transform: &Isometry<Real>) {
        self.vertices
            .iter_mut()
            .for_each(|pt| *pt = transform * *pt);
        self.aabb = Aabb::from_points_ref(&self.vertices);
    }

    /// Returns this triangle mesh transformed by `transform`.
    pub fn transformed(mut self, transform: &Isometry<Real>) -> Self {
        self.transform_vertices(transform);
        self
    }

    /// Mirrors this mesh through the plane orthogonal to the `axis`-th coordinate axis at
    /// coordinate `bias`.
    ///
    /// The winding of every triangle is reversed as well, so the mirrored solid still has its
    /// triangles facing outward.
    pub fn mirror(&mut self, axis: usize, bias: Real) {
        assert!(axis < DIM, "invalid mirror axis {axis}");
        self.vertices
            .iter_mut()
            .for_each(|pt| pt[axis] = 2.0 * bias - pt[axis]);
        self.reverse();
        self.aabb = Aabb::from_points_ref(&self.vertices);
    }

    /// Reverse the orientation of the triangle mesh.
    pub fn reverse(&mut self) {
        self.indices.iter_mut().for_each(|idx| idx.swap(0, 1));
    }

    /// Appends a second triangle mesh to this triangle mesh.
    pub fn append(&mut self, rhs: &TriMesh) {
        let base_id = self.vertices.len() as u32;
        self.vertices.extend_from_slice(rhs.vertices());
        self.indices.extend(
            rhs.indices()
                .iter()
                .map(|idx| [idx[0] + base_id, idx[1] + base_id, idx[2] + base_id]),
        );
        self.aabb = self.aabb.merged(rhs.local_aabb());
    }

    /// The signed volume enclosed by this mesh.
    ///
    /// Positive if the mesh is closed and its triangles face outward, negative if it is closed
    /// and inside-out. Meaningless for open meshes.
    pub fn signed_volume(&self) -> Real {
        // Tetrahedra are fanned from the box center to limit cancellation errors.
        let reference = self.aabb.center();
        let mut vol = Real::zero();

        for [p1, p2, p3] in self.triangles() {
            let a = p1 - reference;
            let b = p2 - reference;
            let c = p3 - reference;
            vol += a.dot(&b.cross(&c));
        }

        vol / 6.0
    }
}

impl From<Aabb> for TriMesh {
    fn from(aabb: Aabb) -> Self {
        let (vertices, indices) = aabb.to_trimesh();
        let aabb = Aabb::from_points_ref(&vertices);
        Self {
            vertices,
            indices,
            aabb,
        }
    }
}

/// Hashable key of a vertex position. `-0.0` and `0.0` map to the same key.
fn vertex_key(pt: &Point<Real>) -> [u64; 3] {
    [
        (pt.x + 0.0).to_bits(),
        (pt.y + 0.0).to_bits(),
        (pt.z + 0.0).to_bits(),
    ]
}

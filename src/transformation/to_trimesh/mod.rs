//! Triangle mesh generation from geometric shapes.
//!
//! A triangle mesh is returned as a pair `(Vec<Point<Real>>, Vec<[u32; 3]>)` of vertices and
//! triangle indices. Triangles are wound counter-clockwise when viewed from outside the shape.

mod aabb_to_trimesh;

//! Low-level utilities for mesh generation.
//!
//! These functions push triangles to a `Vec<[u32; 3]>` and work with index offsets, so meshes
//! can be assembled incrementally.

use crate::math::DIM;

/// Pushes the fan triangulation of a convex polygon whose `nvertices` vertices are stored
/// consecutively starting at `base`.
///
/// The triangles keep the winding of the polygon.
#[inline]
pub fn push_filled_polygon_indices(base: u32, nvertices: u32, out: &mut Vec<[u32; DIM]>) {
    for i in base + 1..base + nvertices - 1 {
        out.push([base, i, i + 1]);
    }
}

/// Pushes two triangles forming a rectangle to the index buffer.
///
/// With `ul`, `ur` above `dl`, `dr`, the triangles are counter-clockwise when the rectangle is
/// seen from the side where `dl → dr` goes from left to right.
#[inline]
pub fn push_rectangle_indices(ul: u32, ur: u32, dl: u32, dr: u32, out: &mut Vec<[u32; DIM]>) {
    out.push([ul, dl, dr]);
    out.push([dr, ur, ul]);
}

/// Reverses the winding order of triangle faces.
#[inline]
pub fn reverse_clockwising(indices: &mut [[u32; DIM]]) {
    indices.iter_mut().for_each(|idx| idx.swap(0, 1));
}

use super::bsp::BspTree;
use super::polygon::{self, Polygon};
use super::{BooleanOpError, EMPTY_VOLUME_EPS, EPS};
use crate::bounding_volume::Aabb;
use crate::shape::TriMesh;

/// Computes the intersection of two closed, outward-oriented triangle meshes.
///
/// Returns `Ok(None)` if the two solids do not overlap.
pub fn intersection(mesh1: &TriMesh, mesh2: &TriMesh) -> Result<Option<TriMesh>, BooleanOpError> {
    check_finite(mesh1, 1)?;
    check_finite(mesh2, 2)?;

    if !mesh1.local_aabb().intersects(mesh2.local_aabb()) {
        return Ok(None);
    }

    CsgSolid::new(mesh1)?.intersection(mesh2)
}

/// Computes the union of two closed, outward-oriented triangle meshes.
pub fn union(mesh1: &TriMesh, mesh2: &TriMesh) -> Result<TriMesh, BooleanOpError> {
    check_finite(mesh1, 1)?;
    check_finite(mesh2, 2)?;

    if !mesh1.local_aabb().intersects(mesh2.local_aabb()) {
        let mut result = mesh1.clone();
        result.append(mesh2);
        return Ok(result);
    }

    let mut a = BspTree::new(polygon::from_trimesh(mesh1));
    let mut b = BspTree::new(polygon::from_trimesh(mesh2));

    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();

    let mut polygons = a.into_polygons();
    polygons.extend(b.into_polygons());

    finish(&polygons)?.ok_or(BooleanOpError::EmptyResult)
}

/// Computes `mesh1` minus `mesh2`.
///
/// Returns `Ok(None)` if `mesh2` covers `mesh1` entirely.
pub fn difference(mesh1: &TriMesh, mesh2: &TriMesh) -> Result<Option<TriMesh>, BooleanOpError> {
    check_finite(mesh1, 1)?;
    check_finite(mesh2, 2)?;

    if !mesh1.local_aabb().intersects(mesh2.local_aabb()) {
        return Ok(Some(mesh1.clone()));
    }

    let mut a = BspTree::new(polygon::from_trimesh(mesh1));
    let mut b = BspTree::new(polygon::from_trimesh(mesh2));

    a.invert();
    a.clip_to(&b);
    b.clip_to(&a);
    b.invert();
    b.clip_to(&a);
    b.invert();

    let mut polygons = a.into_polygons();
    polygons.extend(b.into_polygons());
    polygon::flip_all(&mut polygons);

    finish(&polygons)
}

/// A solid prepared once for repeated intersections with other solids.
///
/// Building the BSP tree of a large mesh dominates the cost of an intersection. This keeps the
/// tree of the inverted solid around, so intersecting it with many small solids, e.g. the cells
/// of a grid, only pays for the tree of each small solid.
#[derive(Clone, Debug)]
pub struct CsgSolid {
    inverted: BspTree,
    inverted_polygons: Vec<Polygon>,
    aabb: Aabb,
}

impl CsgSolid {
    /// Prepares `mesh` for repeated boolean operations.
    pub fn new(mesh: &TriMesh) -> Result<Self, BooleanOpError> {
        check_finite(mesh, 1)?;

        let mut inverted = BspTree::new(polygon::from_trimesh(mesh));
        inverted.invert();
        let inverted_polygons = inverted.all_polygons();

        Ok(Self {
            inverted,
            inverted_polygons,
            aabb: *mesh.local_aabb(),
        })
    }

    /// The bounding box of the prepared solid.
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Computes the intersection of this solid with `other`.
    ///
    /// Returns `Ok(None)` if the two solids do not overlap.
    pub fn intersection(&self, other: &TriMesh) -> Result<Option<TriMesh>, BooleanOpError> {
        check_finite(other, 2)?;

        let other_aabb = other.local_aabb().loosened(EPS);
        if !self.aabb.intersects(&other_aabb) {
            return Ok(None);
        }

        let mut other_tree = BspTree::new(polygon::from_trimesh(other));

        // Polygons of `other` inside `self`.
        let mut other_polygons = self.inverted.clip_polygons(other_tree.all_polygons());
        other_tree.invert();

        // Polygons of `self` inside `other`. Those away from `other` cannot be.
        let candidates = self
            .inverted_polygons
            .iter()
            .filter(|poly| {
                let poly_aabb = Aabb::from_points_ref(&poly.vertices);
                poly_aabb.intersects(&other_aabb)
            })
            .cloned()
            .collect();
        let mut polygons = other_tree.clip_polygons(candidates);

        polygon::flip_all(&mut other_polygons);
        other_polygons = self.inverted.clip_polygons(other_polygons);

        polygon::flip_all(&mut polygons);
        polygon::flip_all(&mut other_polygons);
        polygons.append(&mut other_polygons);

        finish(&polygons)
    }
}

fn check_finite(mesh: &TriMesh, operand: u8) -> Result<(), BooleanOpError> {
    match mesh
        .vertices()
        .iter()
        .position(|pt| !pt.coords.iter().all(|c| c.is_finite()))
    {
        Some(vertex) => Err(BooleanOpError::NonFiniteVertex {
            operand,
            vertex: vertex as u32,
        }),
        None => Ok(()),
    }
}

/// Turns the polygons of a result back into a mesh, `None` if it encloses no volume.
fn finish(polygons: &[Polygon]) -> Result<Option<TriMesh>, BooleanOpError> {
    let Some(mesh) = polygon::to_trimesh(polygons) else {
        return Ok(None);
    };

    let volume = mesh.signed_volume();
    if volume.abs() <= EMPTY_VOLUME_EPS {
        log::trace!("discarding a boolean result with volume {volume}");
        Ok(None)
    } else if volume < 0.0 {
        Err(BooleanOpError::InvertedResult(volume))
    } else {
        Ok(Some(mesh))
    }
}

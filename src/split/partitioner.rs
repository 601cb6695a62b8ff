use super::SplitError;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::TriMesh;
use crate::transformation::CsgSolid;

/// The indices of a cell of the cutting grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GridCell {
    /// Index along `x`, in `0..xsplit`.
    pub i: usize,
    /// Index along `y`, in `0..ysplit`.
    pub j: usize,
}

/// Iterator through the fragments of a mesh inside each cell of a grid.
///
/// Cells are visited in row-major order, `x` index first: `(0, 0)`, `(0, 1)`, …,
/// `(1, 0)`, … Cells that do not intersect the mesh are skipped. Fragments are computed one
/// at a time, when the iterator is advanced.
///
/// The iteration stops after the first error.
pub struct Partitioner<'a> {
    mesh: &'a TriMesh,
    solid: Option<CsgSolid>,
    x_extent: &'a [Real],
    y_extent: &'a [Real],
    z_min: Real,
    z_max: Real,
    next_cell: usize,
}

impl<'a> Partitioner<'a> {
    /// Prepares the partition of `mesh` by the grid with the given cut coordinates.
    ///
    /// `x_extent` and `y_extent` must be sorted. Each consecutive pair of coordinates bounds one
    /// row of the grid.
    pub fn new(
        mesh: &'a TriMesh,
        x_extent: &'a [Real],
        y_extent: &'a [Real],
        z_min: Real,
        z_max: Real,
    ) -> Self {
        Self {
            mesh,
            solid: None,
            x_extent,
            y_extent,
            z_min,
            z_max,
            next_cell: 0,
        }
    }

    /// The number of grid cells.
    pub fn num_cells(&self) -> usize {
        self.x_extent.len().saturating_sub(1) * self.y_extent.len().saturating_sub(1)
    }

    /// The box of the cell `cell`.
    pub fn cell_aabb(&self, cell: GridCell) -> Aabb {
        Aabb::new(
            Point::new(self.x_extent[cell.i], self.y_extent[cell.j], self.z_min),
            Point::new(
                self.x_extent[cell.i + 1],
                self.y_extent[cell.j + 1],
                self.z_max,
            ),
        )
    }

    fn fragment(&mut self, cell: GridCell) -> Result<Option<TriMesh>, SplitError> {
        let cell_mesh = TriMesh::from(self.cell_aabb(cell));

        let solid = match &mut self.solid {
            Some(solid) => solid,
            empty => empty.insert(CsgSolid::new(self.mesh)?),
        };

        Ok(solid.intersection(&cell_mesh)?)
    }
}

impl Iterator for Partitioner<'_> {
    type Item = Result<(GridCell, TriMesh), SplitError>;

    fn next(&mut self) -> Option<Self::Item> {
        let num_rows = self.y_extent.len().saturating_sub(1);

        while self.next_cell < self.num_cells() {
            let cell = GridCell {
                i: self.next_cell / num_rows,
                j: self.next_cell % num_rows,
            };
            self.next_cell += 1;

            match self.fragment(cell) {
                Ok(Some(fragment)) => {
                    log::debug!(
                        "cell ({}, {}): {} triangles",
                        cell.i,
                        cell.j,
                        fragment.num_triangles()
                    );
                    return Some(Ok((cell, fragment)));
                }
                Ok(None) => log::debug!("cell ({}, {}) is empty", cell.i, cell.j),
                Err(e) => {
                    self.next_cell = self.num_cells();
                    return Some(Err(e));
                }
            }
        }

        None
    }
}

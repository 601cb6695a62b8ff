//! Boolean operations (CSG) on closed triangle meshes.
//!
//! Solids are converted to convex polygons and combined with binary space partitioning
//! trees: every polygon of one solid is classified, and split when needed, against the planes
//! of the other solid. This is robust to coplanar faces, which are frequent here since grid
//! cells share their faces with the model bounding box.

pub use self::boolean::{difference, intersection, union, CsgSolid};
pub use self::csg_error::BooleanOpError;

use crate::math::Real;

mod boolean;
mod bsp;
mod csg_error;
mod plane;
mod polygon;

/// Distance below which a point is considered to lie on a plane.
const EPS: Real = 1.0e-5;

/// Volume below which the result of a boolean operation is considered empty.
const EMPTY_VOLUME_EPS: Real = 1.0e-9;

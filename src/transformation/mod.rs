//! Transformation, discretization and boolean combination of meshes.

pub use self::csg::{difference, intersection, union, BooleanOpError, CsgSolid};
pub use self::extrusion::extrude_convex_polygon;

pub mod csg;
mod extrusion;
mod to_trimesh;
pub mod utils;

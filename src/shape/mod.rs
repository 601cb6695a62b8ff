//! Shapes supported by gridsplit.

pub use self::trimesh::*;

mod trimesh;

//! Reading and writing meshes from and to files.

pub use self::stl::{load_stl, read_stl, save_stl, write_stl, StlError, StlFormat};

pub mod stl;

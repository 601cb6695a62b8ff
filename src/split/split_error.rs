use crate::io::StlError;
use crate::transformation::BooleanOpError;
use std::path::PathBuf;

/// Errors that can occur while splitting a mesh.
#[derive(thiserror::Error, Debug)]
pub enum SplitError {
    /// The input mesh could not be loaded.
    #[error("invalid input mesh: {0}")]
    InvalidInput(#[source] StlError),
    /// A parameter of the split is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A boolean operation of the geometry kernel failed.
    #[error("geometry operation failed: {0}")]
    GeometryOperationFailed(#[from] BooleanOpError),
    /// A part could not be written.
    #[error("could not export {}: {source}", path.display())]
    Export {
        /// The file that could not be written.
        path: PathBuf,
        /// The reason of the failure.
        #[source]
        source: StlError,
    },
}

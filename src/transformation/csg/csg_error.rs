use crate::math::Real;

/// Errors that can occur when computing a boolean operation between two triangle meshes.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum BooleanOpError {
    /// One of the operands has a vertex with a NaN or infinite coordinate.
    #[error("the vertex {vertex} of the operand {operand} has a non-finite coordinate.")]
    NonFiniteVertex {
        /// The operand (1 or 2) with the invalid vertex.
        operand: u8,
        /// The index of the invalid vertex.
        vertex: u32,
    },
    /// The operation removed every triangle although the result cannot be empty.
    #[error("the boolean operation produced no geometry.")]
    EmptyResult,
    /// The result encloses a negative volume: the operands were not oriented, closed solids.
    #[error("the boolean operation produced an inside-out solid (signed volume: {0}).")]
    InvertedResult(Real),
}

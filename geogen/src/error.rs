//! Error types for mesh validation, index narrowing and export

use thiserror::Error;

/// Errors produced outside the generators themselves
///
/// Generators never fail: invalid parameters are clamped (see
/// [`crate::constants`]). These errors come from operations on finished
/// meshes.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The 16-bit index view was requested for a mesh with too many vertices
    #[error("mesh has {vertex_count} vertices; 16-bit indices need fewer than 65536")]
    IndexOverflow { vertex_count: usize },

    /// An index points past the end of the vertex buffer
    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// The index buffer does not hold a whole number of triangles
    #[error("index count {index_count} is not a multiple of 3")]
    IncompleteTriangle { index_count: usize },

    /// No shape with this name was registered in a [`crate::ShapeLibrary`]
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeometryError>;

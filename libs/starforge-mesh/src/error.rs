//! # Mesh Errors
//!
//! Error types for mesh generation, assembly and export.
//!
//! ## Error Policy
//!
//! - Invalid generator inputs fail with [`MeshError::InvalidParameter`]
//! - An out-of-range face index is a defect, reported as
//!   [`MeshError::IndexIntegrity`] and never recovered from
//! - Boolean failures are the only recoverable condition: callers use
//!   [`crate::ops::difference_or_fallback`] to keep the un-subtracted operand

use thiserror::Error;

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Malformed generator input (non-positive dimension, too few sections).
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// What was wrong with the input.
        message: String,
    },

    /// A face references a vertex outside the buffer.
    #[error("Index integrity violated: face {face} references vertex {index} but only {vertex_count} vertices exist")]
    IndexIntegrity {
        /// Face position in the triangle buffer.
        face: usize,
        /// Offending vertex index.
        index: u32,
        /// Number of vertices in the buffer.
        vertex_count: usize,
    },

    /// An operation that needs geometry received a zero-vertex mesh.
    #[error("Empty mesh: {message}")]
    EmptyMesh {
        /// Which operation was attempted.
        message: String,
    },

    /// Boolean operation failed.
    #[error("Boolean operation failed: {message}")]
    BooleanFailed {
        /// Failure description.
        message: String,
    },

    /// Too many vertices for u32 triangle indices.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Requested vertex count.
        count: usize,
        /// Largest supported vertex count.
        max: usize,
    },

    /// I/O error while writing an export or preview file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error while writing a preview.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an empty mesh error.
    pub fn empty_mesh(message: impl Into<String>) -> Self {
        Self::EmptyMesh {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            message: message.into(),
        }
    }
}

//! # Model Errors

use starforge_mesh::MeshError;
use thiserror::Error;

/// Result type alias for model builds.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while building a catalog model.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A part failed to generate or combine.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// No catalog entry has this name.
    #[error("Unknown model '{name}' (expected one of: {expected})")]
    UnknownModel {
        /// Requested name.
        name: String,
        /// Comma-separated catalog names.
        expected: String,
    },
}

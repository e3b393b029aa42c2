//! CLI error type.

use starforge_mesh::MeshError;
use starforge_models::ModelError;
use thiserror::Error;

/// Anything that can stop a run.
#[derive(Debug, Error)]
pub enum CliError {
    /// The model failed to build.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Combining, exporting or previewing failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// The summary could not be serialized.
    #[error("Failed to write summary: {0}")]
    Summary(#[from] serde_json::Error),
}

//! # Custom Polyhedron
//!
//! Explicit vertex and face construction for shapes no generator covers.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;

/// Builds a mesh from explicit vertex and face lists.
///
/// Faces are used as given; winding is the caller's responsibility.
///
/// # Errors
///
/// - [`MeshError::EmptyMesh`] when `vertices` is empty
/// - [`MeshError::IndexIntegrity`] when a face references a missing vertex
///
/// # Example
///
/// ```rust
/// use starforge_mesh::primitives::custom;
/// use glam::DVec3;
///
/// let tetra = custom(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
///     vec![[0, 2, 1], [0, 1, 3], [1, 2, 3], [0, 3, 2]],
/// )
/// .unwrap();
/// assert_eq!(tetra.triangle_count(), 4);
/// ```
pub fn custom(vertices: Vec<DVec3>, faces: Vec<[u32; 3]>) -> MeshResult<Mesh> {
    if vertices.is_empty() {
        return Err(MeshError::empty_mesh(
            "custom polyhedron needs at least one vertex",
        ));
    }
    if let Some(bad) = vertices.iter().find(|v| !v.is_finite()) {
        return Err(MeshError::invalid_parameter(format!(
            "Vertex coordinates must be finite: {:?}",
            bad
        )));
    }

    Mesh::from_parts(vertices, faces)
}

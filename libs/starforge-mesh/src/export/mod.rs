//! # Export
//!
//! Hands a combined mesh to file-format writers. Export is pure
//! transcription: triangle soup in, triangle soup out, no topology changes.
//!
//! The only guarantee the exporters rely on is an [`ExportBuffers`] that is
//! non-empty and index-consistent, which [`ExportBuffers::from_mesh`]
//! checks once up front.
//!
//! ## Example
//!
//! ```rust
//! use starforge_mesh::export::{ExportBuffers, MeshExporter, StlExporter};
//! use starforge_mesh::primitives::cuboid;
//! use glam::DVec3;
//!
//! let buffers = ExportBuffers::from_mesh(&cuboid(DVec3::ONE).unwrap()).unwrap();
//! let mut bytes = Vec::new();
//! StlExporter::binary().write_to(&buffers, &mut bytes).unwrap();
//! assert_eq!(bytes.len(), 84 + 12 * 50);
//! ```

pub mod stl;

pub use stl::{StlExporter, StlFormat};

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// =============================================================================
// BUFFERS
// =============================================================================

/// Flat buffers handed to exporters.
///
/// Positions are narrowed to `f32`, the precision interchange formats store.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub vertices: Vec<f32>,
    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl ExportBuffers {
    /// Extracts buffers from a mesh.
    ///
    /// # Errors
    ///
    /// - [`MeshError::EmptyMesh`] for a mesh without vertices
    /// - [`MeshError::IndexIntegrity`] for an out-of-range face index
    pub fn from_mesh(mesh: &Mesh) -> MeshResult<Self> {
        if mesh.is_empty() {
            return Err(MeshError::empty_mesh("refusing to export a mesh without vertices"));
        }
        mesh.validate()?;

        Ok(Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
        })
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Position of vertex `index`.
    pub fn position(&self, index: u32) -> [f32; 3] {
        let i = index as usize * 3;
        [self.vertices[i], self.vertices[i + 1], self.vertices[i + 2]]
    }

    /// Corner positions of every triangle, in order.
    pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [self.position(t[0]), self.position(t[1]), self.position(t[2])])
    }
}

// =============================================================================
// EXPORTER
// =============================================================================

/// A writer for one interchange format.
pub trait MeshExporter {
    /// Conventional file extension, without the dot.
    fn extension(&self) -> &'static str;

    /// Serializes `buffers` into `writer`.
    fn write_to(&self, buffers: &ExportBuffers, writer: &mut dyn Write) -> MeshResult<()>;

    /// Writes `buffers` to a file at `path`.
    fn save(&self, buffers: &ExportBuffers, path: &Path) -> MeshResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(buffers, &mut writer)?;
        writer.flush()?;

        log::info!(
            "Wrote {} ({} triangles) to {}",
            self.extension(),
            buffers.triangle_count(),
            path.display()
        );
        Ok(())
    }
}

/// Checks `mesh` and writes it with `exporter`.
pub fn export_mesh(mesh: &Mesh, exporter: &dyn MeshExporter, path: &Path) -> MeshResult<()> {
    let buffers = ExportBuffers::from_mesh(mesh)?;
    exporter.save(&buffers, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_buffers_from_empty_mesh_fail() {
        assert!(matches!(
            ExportBuffers::from_mesh(&Mesh::new()),
            Err(MeshError::EmptyMesh { .. })
        ));
    }

    #[test]
    fn test_buffers_reject_bad_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 0, 4);
        assert!(matches!(
            ExportBuffers::from_mesh(&mesh),
            Err(MeshError::IndexIntegrity { .. })
        ));
    }

    #[test]
    fn test_buffers_transcribe_without_changes() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        mesh.add_vertex(DVec3::new(7.0, 8.0, 9.0));
        mesh.add_triangle(2, 1, 0);

        let buffers = ExportBuffers::from_mesh(&mesh).unwrap();
        assert_eq!(buffers.vertex_count(), 3);
        assert_eq!(buffers.triangle_count(), 1);
        assert_eq!(buffers.indices, vec![2, 1, 0]);
        assert_eq!(
            buffers.triangles().next(),
            Some([[7.0, 8.0, 9.0], [4.0, 5.0, 6.0], [1.0, 2.0, 3.0]])
        );
    }
}

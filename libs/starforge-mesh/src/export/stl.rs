//! STL (Stereolithography) writer.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//! endsolid name
//! ```

use std::io::Write;

use config::constants::{STL_HEADER, STL_HEADER_SIZE, STL_SOLID_NAME};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{ExportBuffers, MeshExporter};
use crate::error::{MeshError, MeshResult};

/// STL encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StlFormat {
    /// Compact little-endian encoding.
    #[default]
    Binary,
    /// Human-readable text.
    Ascii,
}

/// STL exporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StlExporter {
    /// Encoding to write.
    pub format: StlFormat,
}

impl StlExporter {
    /// Binary STL exporter.
    pub fn binary() -> Self {
        Self {
            format: StlFormat::Binary,
        }
    }

    /// ASCII STL exporter.
    pub fn ascii() -> Self {
        Self {
            format: StlFormat::Ascii,
        }
    }
}

impl MeshExporter for StlExporter {
    fn extension(&self) -> &'static str {
        "stl"
    }

    fn write_to(&self, buffers: &ExportBuffers, writer: &mut dyn Write) -> MeshResult<()> {
        match self.format {
            StlFormat::Binary => write_binary(buffers, writer),
            StlFormat::Ascii => write_ascii(buffers, writer),
        }
    }
}

/// Unit facet normal from the winding, zero for a degenerate facet.
fn facet_normal([v0, v1, v2]: [[f32; 3]; 3]) -> Vec3 {
    let (v0, v1, v2) = (Vec3::from(v0), Vec3::from(v1), Vec3::from(v2));
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}

fn write_binary(buffers: &ExportBuffers, writer: &mut dyn Write) -> MeshResult<()> {
    let mut header = [b' '; STL_HEADER_SIZE];
    let text = STL_HEADER.as_bytes();
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    let face_count = u32::try_from(buffers.triangle_count()).map_err(|_| {
        MeshError::TooManyVertices {
            count: buffers.triangle_count(),
            max: u32::MAX as usize,
        }
    })?;
    writer.write_all(&face_count.to_le_bytes())?;

    for triangle in buffers.triangles() {
        let normal = facet_normal(triangle);
        for value in normal.to_array() {
            writer.write_all(&value.to_le_bytes())?;
        }
        for corner in triangle {
            for value in corner {
                writer.write_all(&value.to_le_bytes())?;
            }
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

fn write_ascii(buffers: &ExportBuffers, writer: &mut dyn Write) -> MeshResult<()> {
    writeln!(writer, "solid {}", STL_SOLID_NAME)?;

    for triangle in buffers.triangles() {
        let n = facet_normal(triangle);
        writeln!(writer, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for [x, y, z] in triangle {
            writeln!(writer, "      vertex {:e} {:e} {:e}", x, y, z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {}", STL_SOLID_NAME)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use crate::primitives::cuboid;
    use glam::DVec3;

    fn triangle_buffers() -> ExportBuffers {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
        mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(0, 1, 2);
        ExportBuffers::from_mesh(&mesh).unwrap()
    }

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn test_binary_layout() {
        let mut bytes = Vec::new();
        StlExporter::binary()
            .write_to(&triangle_buffers(), &mut bytes)
            .unwrap();

        assert_eq!(bytes.len(), STL_HEADER_SIZE + 4 + 50);
        assert!(bytes.starts_with(STL_HEADER.as_bytes()));
        assert_eq!(&bytes[80..84], &1u32.to_le_bytes());
        // Normal then the second vertex
        assert_eq!(read_f32(&bytes, 84 + 8), 1.0);
        assert_eq!(read_f32(&bytes, 84 + 24), 1.0);
        assert_eq!(&bytes[132..134], &[0, 0]);
    }

    #[test]
    fn test_binary_face_count_matches_mesh() {
        let buffers = ExportBuffers::from_mesh(&cuboid(DVec3::ONE).unwrap()).unwrap();
        let mut bytes = Vec::new();
        StlExporter::default().write_to(&buffers, &mut bytes).unwrap();
        assert_eq!(&bytes[80..84], &12u32.to_le_bytes());
        assert_eq!(bytes.len(), 84 + 12 * 50);
    }

    #[test]
    fn test_ascii_structure() {
        let mut bytes = Vec::new();
        StlExporter::ascii()
            .write_to(&triangle_buffers(), &mut bytes)
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("solid starforge\n"));
        assert!(text.trim_end().ends_with("endsolid starforge"));
        assert_eq!(text.matches("facet normal").count(), 1);
        assert_eq!(text.matches("vertex").count(), 3);
        assert!(text.contains("facet normal 0e0 0e0 1e0"));
    }

    #[test]
    fn test_save_writes_file() {
        let path = std::env::temp_dir().join(format!("starforge-stl-{}.stl", std::process::id()));
        StlExporter::binary()
            .save(&triangle_buffers(), &path)
            .unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written.len(), 134);
    }
}

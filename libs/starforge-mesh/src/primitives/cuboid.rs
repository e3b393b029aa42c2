//! # Box Primitive
//!
//! Axis-aligned rectangular prism centered on the origin.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a box with the given full extents, centered on the origin.
///
/// # Arguments
///
/// * `extents` - Edge lengths along X, Y and Z
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use starforge_mesh::primitives::cuboid;
/// use glam::DVec3;
///
/// let mesh = cuboid(DVec3::new(2.0, 4.0, 6.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn cuboid(extents: DVec3) -> MeshResult<Mesh> {
    if !extents.is_finite() || extents.min_element() <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Box extents must be positive: {:?}",
            extents
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);
    let max = extents / 2.0;
    let min = -max;

    // Bottom ring then top ring, counter-clockwise seen from +Z
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    for [a, b, c, d] in [
        [v0, v3, v2, v1], // -Z
        [v4, v5, v6, v7], // +Z
        [v0, v1, v5, v4], // -Y
        [v2, v3, v7, v6], // +Y
        [v3, v0, v4, v7], // -X
        [v1, v2, v6, v5], // +X
    ] {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }

    Ok(mesh)
}

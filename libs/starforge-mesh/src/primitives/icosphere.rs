//! # Icosphere Primitive
//!
//! Geodesic sphere built by repeatedly splitting the faces of an
//! icosahedron and projecting the new vertices onto the sphere.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::MAX_ICOSPHERE_SUBDIVISIONS;
use glam::DVec3;
use std::collections::HashMap;

/// Creates an icosphere centered on the origin.
///
/// Level `n` has `10 * 4^n + 2` vertices and `20 * 4^n` triangles.
///
/// # Example
///
/// ```rust
/// use starforge_mesh::primitives::icosphere;
///
/// let mesh = icosphere(1, 2.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 42);
/// assert_eq!(mesh.triangle_count(), 80);
/// ```
pub fn icosphere(subdivisions: u32, radius: f64) -> MeshResult<Mesh> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Icosphere radius must be positive: {}",
            radius
        )));
    }
    if subdivisions > MAX_ICOSPHERE_SUBDIVISIONS {
        return Err(MeshError::invalid_parameter(format!(
            "Icosphere subdivisions must be at most {}: {}",
            MAX_ICOSPHERE_SUBDIVISIONS, subdivisions
        )));
    }

    let (mut vertices, mut faces) = icosahedron();

    for _ in 0..subdivisions {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut next = Vec::with_capacity(faces.len() * 4);

        for [a, b, c] in faces {
            let ab = midpoint(&mut vertices, &mut midpoints, a, b);
            let bc = midpoint(&mut vertices, &mut midpoints, b, c);
            let ca = midpoint(&mut vertices, &mut midpoints, c, a);
            next.extend([[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
        }

        faces = next;
    }

    let vertices = vertices.into_iter().map(|v| v * radius).collect();
    Mesh::from_parts(vertices, faces)
}

/// Unit icosahedron with outward winding.
fn icosahedron() -> (Vec<DVec3>, Vec<[u32; 3]>) {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;

    let vertices = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ]
    .into_iter()
    .map(|p| DVec3::from_array(p).normalize())
    .collect();

    let faces = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    (vertices, faces)
}

/// Returns the index of the unit-sphere midpoint of edge `(a, b)`, creating
/// it on first use so neighbouring faces share it.
fn midpoint(
    vertices: &mut Vec<DVec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    *cache.entry(key).or_insert_with(|| {
        let mid = (vertices[a as usize] + vertices[b as usize]).normalize();
        vertices.push(mid);
        (vertices.len() - 1) as u32
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_icosahedron_level_zero() {
        let mesh = icosphere(0, 1.0).unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 20);
    }

    #[test]
    fn test_subdivision_counts() {
        for level in 0..4 {
            let mesh = icosphere(level, 1.0).unwrap();
            let factor = 4usize.pow(level);
            assert_eq!(mesh.vertex_count(), 10 * factor + 2);
            assert_eq!(mesh.triangle_count(), 20 * factor);
        }
    }

    #[test]
    fn test_vertices_on_sphere() {
        let mesh = icosphere(2, 3.5).unwrap();
        for v in mesh.vertices() {
            assert_relative_eq!(v.length(), 3.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_normals_face_outward() {
        let mesh = icosphere(1, 1.0).unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_corners(i);
            assert!(mesh.triangle_normal(i).dot(a + b + c) > 0.0);
        }
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(icosphere(2, 0.0).is_err());
        assert!(icosphere(MAX_ICOSPHERE_SUBDIVISIONS + 1, 1.0).is_err());
    }
}

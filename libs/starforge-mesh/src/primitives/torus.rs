//! # Torus Primitive

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::MIN_SECTIONS;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a torus centered on the origin with its ring in the XY plane.
///
/// # Arguments
///
/// * `major_radius` - Distance from the center to the tube center
/// * `minor_radius` - Tube radius
/// * `major_sections` - Segments around the ring
/// * `minor_sections` - Segments around the tube
///
/// # Example
///
/// ```rust
/// use starforge_mesh::primitives::torus;
///
/// let ring = torus(2.0, 0.1, 32, 8).unwrap();
/// assert_eq!(ring.vertex_count(), 32 * 8);
/// ```
pub fn torus(
    major_radius: f64,
    minor_radius: f64,
    major_sections: u32,
    minor_sections: u32,
) -> MeshResult<Mesh> {
    if !minor_radius.is_finite() || minor_radius <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Torus minor radius must be positive: {}",
            minor_radius
        )));
    }
    if !major_radius.is_finite() || major_radius <= minor_radius {
        return Err(MeshError::invalid_parameter(format!(
            "Torus major radius must exceed minor radius: {} <= {}",
            major_radius, minor_radius
        )));
    }
    if major_sections < MIN_SECTIONS || minor_sections < MIN_SECTIONS {
        return Err(MeshError::invalid_parameter(format!(
            "Torus sections must be at least {}: {}x{}",
            MIN_SECTIONS, major_sections, minor_sections
        )));
    }

    let (n, m) = (major_sections as usize, minor_sections as usize);
    let mut mesh = Mesh::with_capacity(n * m, 2 * n * m);

    for i in 0..n {
        let theta = TAU * i as f64 / n as f64;
        let (sin_t, cos_t) = theta.sin_cos();
        for j in 0..m {
            let phi = TAU * j as f64 / m as f64;
            let (sin_p, cos_p) = phi.sin_cos();
            let r = major_radius + minor_radius * cos_p;
            mesh.add_vertex(DVec3::new(r * cos_t, r * sin_t, minor_radius * sin_p));
        }
    }

    let index = |i: usize, j: usize| ((i % n) * m + (j % m)) as u32;
    for i in 0..n {
        for j in 0..m {
            let a = index(i, j);
            let b = index(i + 1, j);
            let c = index(i + 1, j + 1);
            let d = index(i, j + 1);
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(a, c, d);
        }
    }

    Ok(mesh)
}

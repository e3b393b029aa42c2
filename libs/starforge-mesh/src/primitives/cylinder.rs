//! # Cylinder and Cone Primitives
//!
//! Both shapes share one frustum generator. Frames:
//!
//! - cylinder: centered on the origin, axis +Z, spanning `[-h/2, h/2]`
//! - cone: base disk at `z = 0`, apex at `z = height`

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::MIN_SECTIONS;
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a cylinder centered on the origin.
///
/// # Arguments
///
/// * `radius` - Radius of both caps
/// * `height` - Extent along Z
/// * `sections` - Number of segments around the circumference
///
/// # Returns
///
/// A closed mesh with `2 * sections` vertices and `4 * sections - 4`
/// triangles.
///
/// # Example
///
/// ```rust
/// use starforge_mesh::primitives::cylinder;
///
/// let mesh = cylinder(1.0, 4.0, 8).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// let (min, max) = mesh.bounding_box().unwrap();
/// assert_eq!((min.z, max.z), (-2.0, 2.0));
/// ```
pub fn cylinder(radius: f64, height: f64, sections: u32) -> MeshResult<Mesh> {
    check_radius("Cylinder", radius)?;
    frustum(radius, radius, height, sections, true)
}

/// Creates a cone with its base on the XY plane and apex on +Z.
///
/// # Example
///
/// ```rust
/// use starforge_mesh::primitives::cone;
///
/// let mesh = cone(1.0, 2.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 17);
/// ```
pub fn cone(radius: f64, height: f64, sections: u32) -> MeshResult<Mesh> {
    check_radius("Cone", radius)?;
    frustum(radius, 0.0, height, sections, false)
}

fn check_radius(shape: &str, radius: f64) -> MeshResult<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(MeshError::invalid_parameter(format!(
            "{} radius must be positive: {}",
            shape, radius
        )))
    }
}

/// Shared generator for cylinders, cones and truncated cones.
///
/// A zero radius on either end collapses that circle to a single apex.
pub(crate) fn frustum(
    radius_bottom: f64,
    radius_top: f64,
    height: f64,
    sections: u32,
    centered: bool,
) -> MeshResult<Mesh> {
    if !height.is_finite() || height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Height must be positive: {}",
            height
        )));
    }

    if radius_bottom < 0.0 || radius_top < 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "Radii must be non-negative: r1={}, r2={}",
            radius_bottom, radius_top
        )));
    }

    if radius_bottom == 0.0 && radius_top == 0.0 {
        return Err(MeshError::invalid_parameter(
            "At least one radius must be non-zero",
        ));
    }

    if sections < MIN_SECTIONS {
        return Err(MeshError::invalid_parameter(format!(
            "Sections must be at least {}: {}",
            MIN_SECTIONS, sections
        )));
    }

    let mut mesh = Mesh::with_capacity(2 * sections as usize, 4 * sections as usize);

    let (z_bottom, z_top) = if centered {
        (-height / 2.0, height / 2.0)
    } else {
        (0.0, height)
    };

    let bottom = ring(&mut mesh, radius_bottom, z_bottom, sections);
    let top = ring(&mut mesh, radius_top, z_top, sections);

    // Side walls
    for j in 0..sections as usize {
        let next = (j + 1) % sections as usize;
        match (bottom.len() > 1, top.len() > 1) {
            (true, true) => {
                mesh.add_triangle(bottom[j], bottom[next], top[next]);
                mesh.add_triangle(bottom[j], top[next], top[j]);
            }
            (true, false) => mesh.add_triangle(bottom[j], bottom[next], top[0]),
            (false, true) => mesh.add_triangle(bottom[0], top[next], top[j]),
            (false, false) => {}
        }
    }

    // Caps, fanned from the first ring vertex
    if bottom.len() > 1 {
        for j in 1..bottom.len() - 1 {
            mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        }
    }
    if top.len() > 1 {
        for j in 1..top.len() - 1 {
            mesh.add_triangle(top[0], top[j], top[j + 1]);
        }
    }

    Ok(mesh)
}

/// Emits a circle of vertices, or a single apex for a zero radius.
fn ring(mesh: &mut Mesh, radius: f64, z: f64, sections: u32) -> Vec<u32> {
    if radius == 0.0 {
        return vec![mesh.add_vertex(DVec3::new(0.0, 0.0, z))];
    }

    (0..sections)
        .map(|j| {
            let theta = TAU * j as f64 / sections as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
        })
        .collect()
}

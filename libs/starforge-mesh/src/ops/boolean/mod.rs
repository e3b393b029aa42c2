//! # Boolean Difference (CSG)
//!
//! Subtraction of one closed mesh from another using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//!
//! ```text
//! A - B = ~(~A | B)
//! a.invert(); a.clipTo(b); b.clipTo(a); b.invert(); b.clipTo(a); b.invert();
//! combine; invert
//! ```
//!
//! ## Failure Policy
//!
//! Subtraction is best-effort. [`difference`] reports
//! [`MeshError::BooleanFailed`] when it cannot produce usable geometry, and
//! [`difference_or_fallback`] turns that into a warning and keeps the
//! un-subtracted operand so one decorative cut never aborts a whole model.
//!
//! ## Example
//!
//! ```rust
//! use starforge_mesh::ops::difference_or_fallback;
//! use starforge_mesh::primitives::cuboid;
//! use glam::DVec3;
//!
//! let block = cuboid(DVec3::splat(4.0)).unwrap();
//! let core = cuboid(DVec3::new(2.0, 2.0, 8.0)).unwrap();
//! let tube = difference_or_fallback(&block, &core);
//! assert!(tube.triangle_count() > block.triangle_count());
//! ```

mod bsp;
mod plane;
mod polygon;

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use bsp::BspNode;
use polygon::Polygon;
use serde::{Deserialize, Serialize};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Computes `a - b`.
///
/// ## Errors
///
/// [`MeshError::BooleanFailed`] when either operand references a missing
/// vertex or has no non-degenerate triangle, when the result is empty, or
/// when it contains non-finite coordinates.
pub fn difference(a: &Mesh, b: &Mesh) -> MeshResult<Mesh> {
    for (role, operand) in [("minuend", a), ("subtrahend", b)] {
        if let Err(err) = operand.validate() {
            return Err(MeshError::boolean_failed(format!(
                "{} is malformed: {}",
                role, err
            )));
        }
    }

    let polys_a = mesh_to_polygons(a);
    if polys_a.is_empty() {
        return Err(MeshError::boolean_failed(
            "minuend has no usable triangles",
        ));
    }
    let polys_b = mesh_to_polygons(b);
    if polys_b.is_empty() {
        return Err(MeshError::boolean_failed(
            "subtrahend has no usable triangles",
        ));
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());
    for poly in &mut result {
        poly.flip();
    }

    let mesh = polygons_to_mesh(&result)?;
    if mesh.triangle_count() == 0 {
        return Err(MeshError::boolean_failed(
            "subtraction removed the whole minuend",
        ));
    }
    if !mesh.vertices().iter().all(|v| v.is_finite()) {
        return Err(MeshError::boolean_failed(
            "subtraction produced non-finite vertices",
        ));
    }

    Ok(mesh)
}

/// Computes `a - b`, returning `a` unchanged if the subtraction fails.
pub fn difference_or_fallback(a: &Mesh, b: &Mesh) -> Mesh {
    match difference(a, b) {
        Ok(mesh) => mesh,
        Err(err) => {
            log::warn!(
                "Boolean difference failed, keeping un-subtracted operand ({} triangles): {}",
                a.triangle_count(),
                err
            );
            a.clone()
        }
    }
}

/// How a part that is "A with B cut out" is realized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subtraction {
    /// True BSP difference, falling back to `A` on failure.
    Exact,
    /// Keeps `A` and `B` as overlapping meshes; `B` drawn darker reads as a
    /// cavity in renders.
    #[default]
    OverlapOnly,
}

impl Subtraction {
    /// Realizes `a - b` under this policy.
    ///
    /// Returns one mesh for [`Subtraction::Exact`], both operands for
    /// [`Subtraction::OverlapOnly`].
    pub fn apply(self, a: &Mesh, b: &Mesh) -> Vec<Mesh> {
        match self {
            Subtraction::Exact => vec![difference_or_fallback(a, b)],
            Subtraction::OverlapOnly => vec![a.clone(), b.clone()],
        }
    }
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// One polygon per non-degenerate triangle.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    (0..mesh.triangle_count())
        .filter_map(|i| Polygon::from_vertices(mesh.triangle_corners(i).to_vec()))
        .collect()
}

/// Fan-triangulates convex polygons back into an indexed mesh.
fn polygons_to_mesh(polygons: &[Polygon]) -> MeshResult<Mesh> {
    let vertex_total: usize = polygons.iter().map(|p| p.vertices().len()).sum();
    let mut mesh = Mesh::with_capacity(vertex_total, vertex_total);

    for poly in polygons {
        let base = mesh.vertex_count() as u32;
        for &v in poly.vertices() {
            mesh.add_vertex(v);
        }
        for i in 1..(poly.vertices().len() as u32 - 1) {
            mesh.add_triangle(base, base + i, base + i + 1);
        }
    }

    mesh.validate()?;
    Ok(mesh)
}

#[cfg(test)]
mod tests;

//! # Bounds
//!
//! Axis-aligned bounding box of a mesh. Used to frame the preview camera,
//! never to validate geometry.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Per-axis minimum and maximum over a vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Bounds {
    /// Computes the bounds of `mesh`.
    ///
    /// # Errors
    ///
    /// [`MeshError::EmptyMesh`] for a mesh without vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use starforge_mesh::bounds::Bounds;
    /// use starforge_mesh::primitives::cuboid;
    /// use glam::DVec3;
    ///
    /// let bounds = Bounds::of(&cuboid(DVec3::splat(2.0)).unwrap()).unwrap();
    /// assert_eq!(bounds.size(), DVec3::splat(2.0));
    /// ```
    pub fn of(mesh: &Mesh) -> MeshResult<Self> {
        let (min, max) = mesh
            .bounding_box()
            .ok_or_else(|| MeshError::empty_mesh("cannot bound a mesh without vertices"))?;
        Ok(Self { min, max })
    }

    /// Grows the box by `margin` on every side.
    pub fn with_margin(&self, margin: f64) -> Self {
        Self {
            min: self.min - DVec3::splat(margin),
            max: self.max + DVec3::splat(margin),
        }
    }

    /// Center point.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) / 2.0
    }

    /// Edge lengths.
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// True if `point` lies inside or on the box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Convenience form returning `(min_corner, max_corner)`.
pub fn bounds(mesh: &Mesh) -> MeshResult<(DVec3, DVec3)> {
    Bounds::of(mesh).map(|b| (b.min, b.max))
}

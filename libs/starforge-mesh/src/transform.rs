//! # Transform Composer
//!
//! Places generated meshes in the model frame. Order of application is
//! fixed: **scale, then rotation, then translation**, i.e. one matrix
//! `T · R · S`. Rotations take an angle in radians and an axis that is
//! normalized before use, and may turn about an arbitrary pivot.
//!
//! Sources are never mutated: every operation returns a new [`Mesh`], so a
//! template mesh can be placed many times.
//!
//! ## Example
//!
//! ```rust
//! use starforge_mesh::primitives::cylinder;
//! use starforge_mesh::transform::{Rotation, Transform};
//! use glam::DVec3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let leg = cylinder(0.1, 2.0, 8).unwrap();
//! let placement = Transform::new()
//!     .rotated(Rotation::new(FRAC_PI_2, DVec3::Y).unwrap())
//!     .translated(DVec3::new(0.0, 0.0, 5.0));
//! let placed = placement.apply(&leg);
//! assert_eq!(placed.vertex_count(), leg.vertex_count());
//! ```

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::EPSILON;
use glam::{DMat4, DQuat, DVec3};

// =============================================================================
// ROTATION
// =============================================================================

/// Rotation by an angle about a normalized axis through a pivot point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    angle: f64,
    axis: DVec3,
    pivot: DVec3,
}

impl Rotation {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        angle: 0.0,
        axis: DVec3::Z,
        pivot: DVec3::ZERO,
    };

    /// Creates a rotation of `angle` radians about `axis` through the origin.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] when the axis has zero length or a
    /// non-finite component, or the angle is not finite.
    pub fn new(angle: f64, axis: DVec3) -> MeshResult<Self> {
        if !angle.is_finite() {
            return Err(MeshError::invalid_parameter(format!(
                "Rotation angle must be finite: {}",
                angle
            )));
        }
        if !axis.is_finite() || axis.length_squared() < EPSILON {
            return Err(MeshError::invalid_parameter(format!(
                "Rotation axis must be a finite non-zero vector: {:?}",
                axis
            )));
        }

        Ok(Self {
            angle,
            axis: axis.normalize(),
            pivot: DVec3::ZERO,
        })
    }

    /// Rotates about `pivot` instead of the origin.
    pub fn about(mut self, pivot: DVec3) -> Self {
        self.pivot = pivot;
        self
    }

    /// Angle in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Unit rotation axis.
    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    /// Point the rotation turns about.
    pub fn pivot(&self) -> DVec3 {
        self.pivot
    }

    /// The rotation as an affine matrix, `T(p) · R · T(-p)`.
    pub fn matrix(&self) -> DMat4 {
        let rotation = DMat4::from_quat(DQuat::from_axis_angle(self.axis, self.angle));
        if self.pivot == DVec3::ZERO {
            rotation
        } else {
            DMat4::from_translation(self.pivot) * rotation * DMat4::from_translation(-self.pivot)
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// TRANSFORM
// =============================================================================

/// One instance placement: non-uniform scale, rotation, translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale: DVec3,
    rotation: Rotation,
    translation: DVec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: DVec3::ONE,
            rotation: Rotation::IDENTITY,
            translation: DVec3::ZERO,
        }
    }
}

impl Transform {
    /// The identity placement.
    pub fn new() -> Self {
        Self::default()
    }

    /// A pure translation.
    pub fn from_translation(translation: DVec3) -> Self {
        Self::new().translated(translation)
    }

    /// Sets the scale factors.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] for a zero or non-finite factor.
    pub fn scaled(mut self, scale: DVec3) -> MeshResult<Self> {
        if !scale.is_finite() || scale.abs().min_element() < EPSILON {
            return Err(MeshError::invalid_parameter(format!(
                "Scale factors must be finite and non-zero: {:?}",
                scale
            )));
        }
        self.scale = scale;
        Ok(self)
    }

    /// Sets the rotation.
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the translation.
    pub fn translated(mut self, translation: DVec3) -> Self {
        self.translation = translation;
        self
    }

    /// Scale factors.
    pub fn scale(&self) -> DVec3 {
        self.scale
    }

    /// Rotation component.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Translation component.
    pub fn translation(&self) -> DVec3 {
        self.translation
    }

    /// The single placement matrix `T · R · S`.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(self.translation)
            * self.rotation.matrix()
            * DMat4::from_scale(self.scale)
    }

    /// Composes this placement followed by `next`.
    pub fn then(&self, next: &Transform) -> DMat4 {
        next.matrix() * self.matrix()
    }

    /// Returns a placed copy of `mesh`.
    pub fn apply(&self, mesh: &Mesh) -> Mesh {
        apply_matrix(mesh, &self.matrix())
    }
}

// =============================================================================
// FREE FUNCTIONS
// =============================================================================

/// Places `mesh` with scale, then rotation, then translation.
///
/// # Errors
///
/// [`MeshError::InvalidParameter`] for a zero or non-finite scale.
pub fn apply(
    mesh: &Mesh,
    translation: DVec3,
    rotation: Rotation,
    scale: DVec3,
) -> MeshResult<Mesh> {
    let transform = Transform::new()
        .scaled(scale)?
        .rotated(rotation)
        .translated(translation);
    Ok(transform.apply(mesh))
}

/// Maps every vertex of `mesh` through `matrix` into a new mesh.
///
/// A mirroring matrix reverses triangle winding so normals keep facing out.
pub fn apply_matrix(mesh: &Mesh, matrix: &DMat4) -> Mesh {
    let mut placed = mesh.clone();
    placed.transform(matrix);
    placed
}

/// Returns a translated copy of `mesh`.
pub fn translate(mesh: &Mesh, offset: DVec3) -> Mesh {
    apply_matrix(mesh, &DMat4::from_translation(offset))
}

/// Rotation matrix for `angle` radians about `axis` through `pivot`.
///
/// # Errors
///
/// [`MeshError::InvalidParameter`] for a degenerate axis.
pub fn rotation_matrix(angle: f64, axis: DVec3, pivot: DVec3) -> MeshResult<DMat4> {
    Ok(Rotation::new(angle, axis)?.about(pivot).matrix())
}

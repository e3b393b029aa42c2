//! # Primitives
//!
//! Canonical solids returned untransformed, in their own local frame:
//!
//! | Shape | Frame |
//! |-------|-------|
//! | cylinder | centered, axis +Z |
//! | cone | base at `z = 0`, apex at `z = height` |
//! | box | centered |
//! | icosphere | centered |
//! | torus | centered, ring in the XY plane |
//!
//! Callers translate by half-extents where a part must sit on a surface.

pub mod cuboid;
pub mod custom;
pub mod cylinder;
pub mod icosphere;
pub mod torus;

pub use cuboid::cuboid;
pub use custom::custom;
pub use cylinder::{cone, cylinder};
pub use icosphere::icosphere;
pub use torus::torus;

use crate::error::MeshResult;
use crate::mesh::Mesh;
use config::constants::{DEFAULT_ICOSPHERE_SUBDIVISIONS, DEFAULT_SECTIONS, DEFAULT_TORUS_SECTIONS};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Shape kind plus parameter record.
///
/// # Example
///
/// ```rust
/// use starforge_mesh::primitives::PrimitiveSpec;
///
/// let spec = PrimitiveSpec::Cylinder { radius: 1.0, height: 4.0, sections: 8 };
/// assert_eq!(spec.build().unwrap().vertex_count(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimitiveSpec {
    /// Centered cylinder along Z.
    Cylinder {
        /// Cap radius.
        radius: f64,
        /// Extent along Z.
        height: f64,
        /// Segments around the circumference.
        #[serde(default = "default_sections")]
        sections: u32,
    },
    /// Cone with base at the origin.
    Cone {
        /// Base radius.
        radius: f64,
        /// Apex height.
        height: f64,
        /// Segments around the circumference.
        #[serde(default = "default_sections")]
        sections: u32,
    },
    /// Centered box.
    Box {
        /// Full edge lengths.
        extents: DVec3,
    },
    /// Centered geodesic sphere.
    Icosphere {
        /// Subdivision level.
        #[serde(default = "default_subdivisions")]
        subdivisions: u32,
        /// Sphere radius.
        radius: f64,
    },
    /// Centered torus in the XY plane.
    Torus {
        /// Ring radius.
        major_radius: f64,
        /// Tube radius.
        minor_radius: f64,
        /// Segments around the ring.
        #[serde(default = "default_torus_sections")]
        major_sections: u32,
        /// Segments around the tube.
        #[serde(default = "default_torus_sections")]
        minor_sections: u32,
    },
}

fn default_sections() -> u32 {
    DEFAULT_SECTIONS
}

fn default_subdivisions() -> u32 {
    DEFAULT_ICOSPHERE_SUBDIVISIONS
}

fn default_torus_sections() -> u32 {
    DEFAULT_TORUS_SECTIONS
}

impl PrimitiveSpec {
    /// Generates the untransformed mesh for this shape.
    pub fn build(&self) -> MeshResult<Mesh> {
        match *self {
            PrimitiveSpec::Cylinder {
                radius,
                height,
                sections,
            } => cylinder(radius, height, sections),
            PrimitiveSpec::Cone {
                radius,
                height,
                sections,
            } => cone(radius, height, sections),
            PrimitiveSpec::Box { extents } => cuboid(extents),
            PrimitiveSpec::Icosphere {
                subdivisions,
                radius,
            } => icosphere(subdivisions, radius),
            PrimitiveSpec::Torus {
                major_radius,
                minor_radius,
                major_sections,
                minor_sections,
            } => torus(major_radius, minor_radius, major_sections, minor_sections),
        }
    }
}

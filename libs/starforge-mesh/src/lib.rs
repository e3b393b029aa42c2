//! # Starforge Mesh
//!
//! Procedural mesh assembly engine for spacecraft-like models.
//!
//! ## Architecture
//!
//! ```text
//! primitives / shield → transform → assembly (Combiner) → bounds → export / preview
//! ```
//!
//! Data flows one way. Every stage takes its input by reference or by
//! ownership transfer and returns new data; nothing is shared between two
//! model builds.
//!
//! ## Algorithms
//!
//! - **Primitives**: cylinder, cone, box, icosphere, torus, custom polyhedron
//! - **Transforms**: scale, then rotation about a pivot, then translation
//! - **Shielding**: hand-built hex prism tiled on an offset grid, clipped to a disk
//! - **Boolean Difference**: BSP trees (csg.js algorithm) with a fallback
//! - **Combination**: index-offset concatenation in bounded batches
//!
//! ## Usage
//!
//! ```rust
//! use starforge_mesh::prelude::*;
//! use glam::DVec3;
//!
//! let body = cylinder(1.0, 4.0, 8)?;
//! let mut assembly = Assembly::new("probe");
//! assembly.push(translate(&body, DVec3::new(0.0, 0.0, 2.0)));
//! assembly.extend(hex_shield_layer(5.0, 3.0)?);
//!
//! let combined = assembly.combine()?;
//! let bounds = combined.bounds()?;
//! assert!(bounds.max.z >= 5.1);
//! # Ok::<(), starforge_mesh::MeshError>(())
//! ```

pub mod assembly;
pub mod bounds;
pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod preview;
pub mod primitives;
pub mod shield;
pub mod transform;

pub use assembly::{combine, Assembly, CombinedMesh, Combiner, Instance, InstanceSink};
pub use bounds::Bounds;
pub use error::{MeshError, MeshResult};
pub use export::{ExportBuffers, MeshExporter, StlExporter};
pub use mesh::{Mesh, Rgba};
pub use ops::{difference, difference_or_fallback, Subtraction};
pub use preview::{PreviewConfig, PreviewFrame, PreviewRenderer, RasterPreview};
pub use shield::{hex_shield_layer, HexPanel, ShieldLayer};
pub use transform::{Rotation, Transform};

/// Common imports for building models.
pub mod prelude {
    pub use crate::assembly::{combine, Assembly, CombinedMesh, Combiner, Instance, InstanceSink};
    pub use crate::bounds::{bounds, Bounds};
    pub use crate::error::{MeshError, MeshResult};
    pub use crate::export::{ExportBuffers, MeshExporter, StlExporter, StlFormat};
    pub use crate::mesh::{Mesh, Rgba};
    pub use crate::ops::{difference, difference_or_fallback, Subtraction};
    pub use crate::preview::{PreviewConfig, PreviewFrame, PreviewRenderer, RasterPreview};
    pub use crate::primitives::{cone, cuboid, custom, cylinder, icosphere, torus, PrimitiveSpec};
    pub use crate::shield::{hex_shield_layer, HexPanel, ShieldLayer};
    pub use crate::transform::{
        apply, apply_matrix, rotation_matrix, translate, Rotation, Transform,
    };
}

//! # Starforge Models
//!
//! Catalog of procedural spacecraft built from `starforge-mesh` parts.
//!
//! ## Models
//!
//! - [`falcon::falcon_parker`]: the reference spacecraft, about two hundred
//!   placed parts including two hex shield layers
//! - [`merlin::merlin_engine`]: a detailed engine with a hollow nozzle
//!
//! Each model function returns an uncombined [`Assembly`]; callers choose
//! when to combine, export or preview it. The `_into` variants stream parts
//! into any [`InstanceSink`] instead, so a [`Combiner`] can merge them as
//! they are generated.
//!
//! ## Usage
//!
//! ```rust
//! use starforge_models::ModelKind;
//!
//! let kind: ModelKind = "merlin-engine".parse().unwrap();
//! let combined = kind.build().unwrap().combine().unwrap();
//! assert!(combined.mesh().triangle_count() > 0);
//! ```
//!
//! [`Assembly`]: starforge_mesh::Assembly
//! [`InstanceSink`]: starforge_mesh::InstanceSink
//! [`Combiner`]: starforge_mesh::Combiner

pub mod catalog;
pub mod error;
pub mod falcon;
pub mod merlin;

pub use catalog::ModelKind;
pub use error::{ModelError, ModelResult};
pub use falcon::{falcon_parker, falcon_parker_into, FalconParkerConfig};
pub use merlin::{merlin_engine, merlin_engine_into, MerlinConfig};

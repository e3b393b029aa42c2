//! # Config Crate
//!
//! Centralized configuration constants for the starforge mesh pipeline.
//! All magic numbers and tunable parameters are defined here so that the
//! generators, the combiner and the exporters agree on the same defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SECTIONS, EPSILON, MIN_SECTIONS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Section counts below MIN_SECTIONS are rejected by the generators
//! assert!(DEFAULT_SECTIONS >= MIN_SECTIONS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No I/O**: Nothing here reads the environment or the filesystem
//! - **Reproducible**: Defaults match the reference spacecraft scripts

pub mod constants;

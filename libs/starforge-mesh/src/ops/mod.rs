//! # Mesh Operations
//!
//! Boolean subtraction with the best-effort fallback policy.

pub mod boolean;

pub use boolean::{difference, difference_or_fallback, Subtraction};

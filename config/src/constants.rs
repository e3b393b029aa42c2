//! # Configuration Constants
//!
//! Centralized constants for the starforge pipeline. Tessellation defaults,
//! shield tiling parameters, combiner batching, preview framing and export
//! settings are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters for curved primitives
//! - **Shielding**: Hexagonal tile dimensions and grid divisor
//! - **Assembly**: Combiner batching and index limits
//! - **Preview / Export**: Camera framing, colors and STL header

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Plane thickness used when classifying points during boolean operations.
///
/// Larger than [`EPSILON`] because BSP splitting accumulates rounding error.
pub const CSG_PLANE_EPSILON: f64 = 1e-5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of sections around the circumference of cylinders and cones.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SECTIONS;
///
/// let user_sections: Option<u32> = None;
/// assert_eq!(user_sections.unwrap_or(DEFAULT_SECTIONS), 32);
/// ```
pub const DEFAULT_SECTIONS: u32 = 32;

/// Minimum number of sections for any circular cross-section.
///
/// Fewer than three points cannot enclose an area.
pub const MIN_SECTIONS: u32 = 3;

/// Default subdivision level for icospheres.
pub const DEFAULT_ICOSPHERE_SUBDIVISIONS: u32 = 3;

/// Maximum subdivision level for icospheres.
///
/// Each level multiplies the face count by four; level 7 already yields
/// 327,680 triangles.
pub const MAX_ICOSPHERE_SUBDIVISIONS: u32 = 7;

/// Default number of sections along both circles of a torus.
pub const DEFAULT_TORUS_SECTIONS: u32 = 32;

// =============================================================================
// SHIELDING CONSTANTS
// =============================================================================

/// Circumradius of a single hexagonal shield tile.
pub const HEX_PANEL_RADIUS: f64 = 0.5;

/// Thickness (Z extent) of a single hexagonal shield tile.
pub const HEX_PANEL_THICKNESS: f64 = 0.1;

/// Divisor of the layer diameter giving the horizontal grid step.
///
/// Roughly seven tiles span the diameter of a shield layer.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_SHIELD_RADIUS, HEX_GRID_DIVISOR};
///
/// let step = 2.0 * DEFAULT_SHIELD_RADIUS / HEX_GRID_DIVISOR;
/// assert!((step - 0.942857).abs() < 1e-6);
/// ```
pub const HEX_GRID_DIVISOR: f64 = 7.0;

/// Default outer radius of a hexagonal shield layer.
pub const DEFAULT_SHIELD_RADIUS: f64 = 3.3;

/// Translucent orange given to shield tiles (RGBA).
pub const SHIELD_TILE_COLOR: [u8; 4] = [255, 140, 0, 160];

// =============================================================================
// ASSEMBLY CONSTANTS
// =============================================================================

/// Number of instances merged per combiner batch.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_COMBINE_BATCH_SIZE;
///
/// let parts: usize = 53;
/// let batches = parts.div_ceil(DEFAULT_COMBINE_BATCH_SIZE);
/// assert_eq!(batches, 6);
/// ```
pub const DEFAULT_COMBINE_BATCH_SIZE: usize = 10;

/// Maximum number of vertices in a single mesh.
///
/// Triangle indices are stored as `u32`.
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// MODEL CONSTANTS
// =============================================================================

/// Fuselage length of the reference spacecraft.
pub const FUSELAGE_LENGTH: f64 = 20.0;

/// Fuselage radius of the reference spacecraft.
///
/// The hull itself is drawn slightly wider; fittings are placed relative to
/// this value.
pub const FUSELAGE_RADIUS: f64 = 1.35;

/// Heights of the two hex shield layers above the fuselage top.
pub const SHIELD_LAYER_OFFSETS: [f64; 2] = [1.2, 1.35];

/// Section count for the detailed engine nozzle and housings.
pub const ENGINE_SECTIONS: u32 = 64;

/// Section count for the detailed engine feed lines.
pub const FEED_LINE_SECTIONS: u32 = 24;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Color given to untagged vertices when other parts of a model carry colors.
///
/// RGBA, 0-255 per channel.
pub const DEFAULT_VERTEX_COLOR: [u8; 4] = [102, 102, 102, 255];

// =============================================================================
// PREVIEW CONSTANTS
// =============================================================================

/// Margin added on every side of the bounding box when framing the preview.
pub const PREVIEW_MARGIN: f64 = 3.0;

/// Camera elevation above the XY plane, in degrees.
pub const PREVIEW_ELEVATION_DEG: f64 = 35.0;

/// Camera azimuth around the Z axis, in degrees.
pub const PREVIEW_AZIMUTH_DEG: f64 = 40.0;

/// Opacity applied to every face drawn in the preview.
pub const PREVIEW_FACE_ALPHA: f32 = 0.9;

/// Default preview image edge length in pixels.
pub const PREVIEW_DEFAULT_SIZE: u32 = 1400;

/// Preview background (RGBA).
pub const PREVIEW_BACKGROUND: [u8; 4] = [255, 255, 255, 255];

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Size of the binary STL header in bytes.
pub const STL_HEADER_SIZE: usize = 80;

/// Text written at the start of the binary STL header.
pub const STL_HEADER: &str = "Binary STL generated by starforge";

/// Solid name used in ASCII STL output.
pub const STL_SOLID_NAME: &str = "starforge";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

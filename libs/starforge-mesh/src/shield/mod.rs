//! # Hexagonal Shield Generator
//!
//! Builds a hexagonal prism tile by hand and packs copies of it across a
//! disk.
//!
//! ## Tile Topology
//!
//! ```text
//! vertices  0..6   bottom ring, angle i·60°, z = 0
//!           6..12  top ring, same points at z = thickness
//! sides     (i, j, j+6), (i, j+6, i+6)   j = (i+1) mod 6
//! bottom    (0, i, i+1) for i in 1..5, then (0, 5, 1)
//! top       (6, i, i+1) for i in 7..11, then (6, 11, 7)
//! ```
//!
//! 12 vertices and 22 triangles regardless of radius or thickness. The
//! closing fan triangles overlap the fan they close; both caps are kept
//! exactly as listed.
//!
//! ## Layer Tiling
//!
//! Candidate centers form an offset (honeycomb) grid with horizontal step
//! `2·radius / 7` and row spacing `step·√3/2`. Odd rows shift by `step/2`.
//! Only centers with `x² + y² ≤ radius²` keep a tile. A layer too small for
//! its step legitimately yields no tiles.

use crate::assembly::{Instance, InstanceSink};
use crate::error::{MeshError, MeshResult};
use crate::mesh::{Mesh, Rgba};
use crate::primitives::custom;
use crate::transform::translate;
use config::constants::{
    DEFAULT_SHIELD_RADIUS, HEX_GRID_DIVISOR, HEX_PANEL_RADIUS, HEX_PANEL_THICKNESS,
    SHIELD_TILE_COLOR,
};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_3;

// =============================================================================
// HEX PANEL
// =============================================================================

/// One hexagonal prism tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexPanel {
    /// Circumradius of the hexagon.
    pub radius: f64,
    /// Extent along +Z.
    pub thickness: f64,
}

impl Default for HexPanel {
    fn default() -> Self {
        Self {
            radius: HEX_PANEL_RADIUS,
            thickness: HEX_PANEL_THICKNESS,
        }
    }
}

impl HexPanel {
    /// Vertices in every tile.
    pub const VERTEX_COUNT: usize = 12;

    /// Triangles in every tile.
    pub const FACE_COUNT: usize = 22;

    /// Builds the tile mesh in its local frame (bottom cap on `z = 0`).
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] for a non-positive radius or thickness.
    pub fn build(&self) -> MeshResult<Mesh> {
        for (name, value) in [("radius", self.radius), ("thickness", self.thickness)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MeshError::invalid_parameter(format!(
                    "Hex panel {} must be positive: {}",
                    name, value
                )));
            }
        }

        let bottom: Vec<DVec3> = (0..6)
            .map(|i| {
                let (sin, cos) = (i as f64 * FRAC_PI_3).sin_cos();
                DVec3::new(cos * self.radius, sin * self.radius, 0.0)
            })
            .collect();
        let lift = DVec3::new(0.0, 0.0, self.thickness);
        let mut vertices = bottom.clone();
        vertices.extend(bottom.iter().map(|&p| p + lift));

        custom(vertices, hex_faces())
    }
}

/// Fixed tile topology over the 12-vertex buffer.
fn hex_faces() -> Vec<[u32; 3]> {
    let mut faces = Vec::with_capacity(HexPanel::FACE_COUNT);

    for i in 0..6 {
        let j = (i + 1) % 6;
        faces.push([i, j, j + 6]);
        faces.push([i, j + 6, i + 6]);
    }

    for i in 1..5 {
        faces.push([0, i, i + 1]);
    }
    faces.push([0, 5, 1]);

    for i in 7..11 {
        faces.push([6, i, i + 1]);
    }
    faces.push([6, 11, 7]);

    faces
}

// =============================================================================
// SHIELD LAYER
// =============================================================================

/// A disk of hex tiles at one height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShieldLayer {
    /// Z of every tile's bottom cap.
    pub z_height: f64,
    /// Radius of the clipping disk.
    pub radius: f64,
    /// Horizontal grid step; `None` derives `2·radius / 7`.
    pub step: Option<f64>,
    /// Tile shape.
    pub panel: HexPanel,
    /// Color tag carried by every tile.
    pub color: Option<Rgba>,
}

impl Default for ShieldLayer {
    fn default() -> Self {
        Self {
            z_height: 0.0,
            radius: DEFAULT_SHIELD_RADIUS,
            step: None,
            panel: HexPanel::default(),
            color: Some(SHIELD_TILE_COLOR),
        }
    }
}

impl ShieldLayer {
    /// A default layer of the given radius at `z_height`.
    pub fn new(z_height: f64, radius: f64) -> Self {
        Self {
            z_height,
            radius,
            ..Self::default()
        }
    }

    /// Uses an explicit grid step instead of the radius-derived one.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// Sets the tile shape.
    pub fn with_panel(mut self, panel: HexPanel) -> Self {
        self.panel = panel;
        self
    }

    /// Sets or clears the color tag.
    pub fn with_color(mut self, color: Option<Rgba>) -> Self {
        self.color = color;
        self
    }

    /// Horizontal step in effect.
    pub fn effective_step(&self) -> f64 {
        self.step.unwrap_or(2.0 * self.radius / HEX_GRID_DIVISOR)
    }

    /// Centers of the tiles that survive the circular clip, row by row.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] for a non-positive radius or step.
    pub fn tile_centers(&self) -> MeshResult<Vec<DVec2>> {
        let step = self.effective_step();
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "Shield radius must be positive: {}",
                self.radius
            )));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "Shield grid step must be positive: {}",
                step
            )));
        }

        let r = self.radius;
        let xs = arange(-r, r + step, step);
        let ys = arange(-r, r + step, step * 3.0_f64.sqrt() / 2.0);

        let mut centers = Vec::new();
        for (row, &y) in ys.iter().enumerate() {
            let offset = if row % 2 == 0 { 0.0 } else { step / 2.0 };
            for &x in &xs {
                let x = x + offset;
                if x * x + y * y <= r * r {
                    centers.push(DVec2::new(x, y));
                }
            }
        }

        Ok(centers)
    }

    /// Builds one placed tile per surviving center.
    ///
    /// The tile is generated once and translated per placement.
    pub fn build(&self) -> MeshResult<Vec<Instance>> {
        let mut instances = Vec::new();
        self.build_into(&mut instances)?;
        Ok(instances)
    }

    /// Places the tiles one at a time into `sink`, returning the tile count.
    pub fn build_into<S: InstanceSink>(&self, sink: &mut S) -> MeshResult<usize> {
        let centers = self.tile_centers()?;
        let tile = self.panel.build()?;

        for c in &centers {
            sink.accept(Instance {
                mesh: translate(&tile, DVec3::new(c.x, c.y, self.z_height)),
                color: self.color,
            })?;
        }

        log::debug!(
            "Shield layer at z={:.3}: radius {:.3}, step {:.4}, {} tiles",
            self.z_height,
            self.radius,
            self.effective_step(),
            centers.len()
        );

        Ok(centers.len())
    }
}

/// Shield layer with default tile and step at `z_height`.
pub fn hex_shield_layer(z_height: f64, radius: f64) -> MeshResult<Vec<Instance>> {
    ShieldLayer::new(z_height, radius).build()
}

/// Half-open range `[start, stop)` sampled every `delta`, with the sample
/// count `ceil((stop - start) / delta)` fixed up front so that accumulated
/// rounding never adds or drops a row.
fn arange(start: f64, stop: f64, delta: f64) -> Vec<f64> {
    let count = ((stop - start) / delta).ceil().max(0.0) as usize;
    (0..count).map(|i| start + i as f64 * delta).collect()
}

#[cfg(test)]
mod tests;

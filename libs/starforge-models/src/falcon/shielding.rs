//! Thermal protection stacked on top of the hull.

use config::constants::SHIELD_LAYER_OFFSETS;
use glam::DVec3;
use starforge_mesh::primitives::cylinder;
use starforge_mesh::{Instance, InstanceSink, MeshResult, Rgba, ShieldLayer};

use super::{part, FalconParkerConfig};

const THERMAL: Rgba = [255, 69, 0, 150];

/// Radius, thickness and color of each reinforced layer, bottom up.
const REINFORCED: [(f64, f64, Rgba); 3] = [
    (2.7, 0.15, [255, 140, 0, 120]),
    (2.9, 0.15, [255, 69, 0, 100]),
    (3.1, 0.15, [178, 34, 34, 80]),
];

pub(super) fn thermal_shield(cfg: &FalconParkerConfig) -> MeshResult<Instance> {
    let shield = cylinder(2.6, 0.6, cfg.sections)?;
    Ok(part(shield, DVec3::new(0.0, 0.0, cfg.length + 0.3), THERMAL))
}

/// Three progressively wider discs above the thermal shield.
pub(super) fn reinforced_layers(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let mut z = cfg.length + 0.6;
    let mut layers = Vec::with_capacity(REINFORCED.len());
    for (radius, thickness, color) in REINFORCED {
        let disc = cylinder(radius, thickness, cfg.sections)?;
        layers.push(part(disc, DVec3::new(0.0, 0.0, z), color));
        z += thickness;
    }
    Ok(layers)
}

/// Two hex-tile layers capping the stack, streamed tile by tile.
///
/// Returns the number of tiles placed.
pub(super) fn hex_layers<S: InstanceSink>(
    cfg: &FalconParkerConfig,
    sink: &mut S,
) -> MeshResult<usize> {
    let mut placed = 0;
    for offset in SHIELD_LAYER_OFFSETS {
        placed += ShieldLayer::new(cfg.length + offset, cfg.shield_radius).build_into(sink)?;
    }
    Ok(placed)
}

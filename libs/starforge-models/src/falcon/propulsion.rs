//! Engines below the hull and the side-mounted warp propulsors.

use glam::DVec3;
use starforge_mesh::primitives::{cone, cylinder};
use starforge_mesh::transform::translate;
use starforge_mesh::{Instance, MeshResult, Rgba};

use super::{part, ring_positions, FalconParkerConfig};

const BASE: Rgba = [105, 105, 105, 255];
const CHAMBER: Rgba = [220, 220, 220, 255];
const NOZZLE: Rgba = [169, 169, 169, 255];
const ION_RING: Rgba = [80, 80, 90, 255];
const ION_RING_CORE: Rgba = [0, 0, 0, 0];
const ION_THRUSTER: Rgba = [100, 149, 237, 255];
const WARP_OUTER: Rgba = [50, 50, 80, 180];
const WARP_INNER: Rgba = [80, 80, 140, 220];
const WARP_TUBE: Rgba = [150, 150, 200, 200];

/// Engine cluster plane below the hull.
const ENGINE_PLANE_Z: f64 = -1.5;

pub(super) fn propulsion_base(cfg: &FalconParkerConfig) -> MeshResult<Instance> {
    let base = cone(1.4, 1.2, cfg.sections)?;
    Ok(part(base, DVec3::new(0.0, 0.0, -0.6), BASE))
}

/// One compact engine: chamber above, nozzle below its mount point.
fn cluster_engine(cfg: &FalconParkerConfig, at: DVec3) -> MeshResult<[Instance; 2]> {
    let chamber = cylinder(0.15, 0.4, cfg.sections)?;
    let nozzle = cone(0.25, 0.6, cfg.sections)?;
    Ok([
        part(chamber, at + DVec3::new(0.0, 0.0, 0.2), CHAMBER),
        part(nozzle, at + DVec3::new(0.0, 0.0, -0.3), NOZZLE),
    ])
}

/// Eight engines on a ring plus one in the center.
pub(super) fn merlin_array(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let mut parts = Vec::with_capacity(18);
    let centers = ring_positions(8, 0.75).chain(std::iter::once((0.0, 0.0)));
    for (x, y) in centers {
        parts.extend(cluster_engine(cfg, DVec3::new(x, y, ENGINE_PLANE_Z))?);
    }
    Ok(parts)
}

/// Annular ring around the base and six small ion thrusters.
///
/// The ring is "outer cylinder minus inner cylinder"; how the cut is made is
/// decided by the configured [`Subtraction`](starforge_mesh::Subtraction).
pub(super) fn ion_propulsion(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let at = DVec3::new(0.0, 0.0, -0.7);
    let outer = translate(&cylinder(1.5, 0.2, cfg.sections)?, at);
    let inner = translate(&cylinder(1.2, 0.2, cfg.sections)?, at);

    let mut parts: Vec<Instance> = cfg
        .ring_subtraction
        .apply(&outer, &inner)
        .into_iter()
        .zip([ION_RING, ION_RING_CORE])
        .map(|(mesh, color)| Instance::colored(mesh, color))
        .collect();

    let thruster = cone(0.1, 0.3, cfg.sections)?;
    for (x, y) in ring_positions(6, 1.3) {
        parts.push(part(thruster.clone(), DVec3::new(x, y, -1.2), ION_THRUSTER));
    }

    Ok(parts)
}

/// Double-walled propulsor pod with eight radial tubes, base at `at`.
pub(super) fn warp_propulsor(cfg: &FalconParkerConfig, at: DVec3) -> MeshResult<Vec<Instance>> {
    const MAIN_RADIUS: f64 = 0.8;
    const LENGTH: f64 = 3.5;

    let mut parts = Vec::with_capacity(10);

    let tube = cylinder(0.05, LENGTH, cfg.sections)?;
    for (x, y) in ring_positions(8, MAIN_RADIUS + 0.2) {
        parts.push(part(tube.clone(), at + DVec3::new(x, y, LENGTH / 2.0), WARP_TUBE));
    }

    let outer = cylinder(MAIN_RADIUS + 0.15, LENGTH, cfg.sections)?;
    parts.push(part(outer, at + DVec3::new(0.0, 0.0, LENGTH / 2.0), WARP_OUTER));

    let inner = cylinder(MAIN_RADIUS, LENGTH * 0.95, cfg.sections)?;
    parts.push(part(inner, at + DVec3::new(0.0, 0.0, LENGTH / 2.0 + 0.1), WARP_INNER));

    Ok(parts)
}

//! Hull, nose and the fittings along the central axis.

use glam::DVec3;
use starforge_mesh::primitives::{cone, cuboid, cylinder, icosphere, torus};
use starforge_mesh::{Instance, MeshResult, Rgba, Transform};

use super::{linspace, part, ring_positions, FalconParkerConfig};

const HULL: Rgba = [65, 105, 225, 255];
const RING: Rgba = [105, 105, 105, 255];
const COMPARTMENT: Rgba = [139, 69, 19, 255];
const KEVLAR: Rgba = [184, 134, 11, 90];
const FIN: Rgba = [169, 169, 169, 200];
const HULL_SENSOR: Rgba = [255, 140, 0, 255];
const NOSE: Rgba = [255, 215, 0, 255];
const TOWER: Rgba = [192, 192, 192, 220];
const SPINE: Rgba = [105, 105, 105, 255];
const DOME: Rgba = [135, 206, 250, 180];

/// Hull with structural rings, external compartments, kevlar skin, fins and
/// hull sensors.
pub(super) fn advanced_fuselage(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let (length, radius) = (cfg.length, cfg.radius);
    let mid = DVec3::new(0.0, 0.0, length / 2.0);
    let mut parts = Vec::new();

    parts.push(part(cylinder(radius + 0.3, length, cfg.sections)?, mid, HULL));

    let ring = torus(radius + 0.32, 0.05, cfg.sections, cfg.sections)?;
    for z in linspace(2.0, length - 2.0, 5) {
        parts.push(part(ring.clone(), DVec3::new(0.0, 0.0, z), RING));
    }

    let compartment = cylinder(0.4, 1.5, cfg.sections)?;
    for z in [5.0, 10.0, 15.0] {
        let at = DVec3::new(radius + 0.6, 0.0, z);
        parts.push(part(compartment.clone(), at, COMPARTMENT));
    }

    parts.push(part(cylinder(radius + 0.4, length, cfg.sections)?, mid, KEVLAR));

    let fin = cuboid(DVec3::new(0.05, 1.2, 0.8))?;
    for (x, y) in ring_positions(3, radius + 0.5) {
        parts.push(part(fin.clone(), DVec3::new(x, y, mid.z), FIN));
    }

    let sensor = icosphere(cfg.subdivisions, 0.2)?;
    for z in [4.0, 12.0] {
        let at = DVec3::new(0.0, -(radius + 0.4), z);
        parts.push(part(sensor.clone(), at, HULL_SENSOR));
    }

    Ok(parts)
}

pub(super) fn nose_cone(cfg: &FalconParkerConfig) -> MeshResult<Instance> {
    let nose = cone(cfg.radius * 0.9, 3.2, cfg.sections)?;
    Ok(part(nose, DVec3::new(0.0, 0.0, cfg.length + 1.6), NOSE))
}

pub(super) fn escape_tower(cfg: &FalconParkerConfig) -> MeshResult<Instance> {
    let tower = cylinder(0.2, 1.4, cfg.sections)?;
    Ok(part(tower, DVec3::new(0.0, 0.0, cfg.length + 3.2), TOWER))
}

/// Thin central truss through the lower four fifths of the hull.
pub(super) fn spine(cfg: &FalconParkerConfig) -> MeshResult<Instance> {
    let spine = cylinder(0.08, cfg.length * 0.8, cfg.sections)?;
    Ok(part(spine, DVec3::new(0.0, 0.0, cfg.length * 0.4), SPINE))
}

/// Flattened observation dome above the nose.
pub(super) fn dome(cfg: &FalconParkerConfig) -> MeshResult<Instance> {
    let sphere = icosphere(cfg.subdivisions, 1.2)?;
    let placement = Transform::new()
        .scaled(DVec3::new(1.1, 1.1, 0.5))?
        .translated(DVec3::new(0.0, 0.0, cfg.length + 2.6));
    Ok(Instance::placed(&sphere, &placement, Some(DOME)))
}

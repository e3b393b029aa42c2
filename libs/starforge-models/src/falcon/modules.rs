//! Pressurized modules, hull panels and the habitation cluster.

use std::f64::consts::FRAC_PI_2;

use glam::DVec3;
use starforge_mesh::primitives::{cuboid, cylinder, icosphere};
use starforge_mesh::transform::translate;
use starforge_mesh::{Instance, MeshResult, Rgba, Rotation, Transform};

use super::{linspace, part, ring_positions, FalconParkerConfig};

const SCIENCE: Rgba = [0, 191, 255, 255];
const PAYLOAD: Rgba = [160, 82, 45, 255];
const SIDE_MODULE: Rgba = [100, 100, 140, 255];
const SIDE_MODULE_DARK: Rgba = [80, 80, 120, 255];
const SURFACE_PANEL: Rgba = [100, 100, 150, 200];
const NODE: Rgba = [200, 200, 220, 255];
const TUNNEL: Rgba = [169, 169, 169, 255];
const LAB: Rgba = [0, 128, 255, 255];
const LAB_DARK: Rgba = [0, 100, 180, 255];
const CUPOLA_GLASS: Rgba = [135, 206, 250, 180];
const GYRO: Rgba = [105, 105, 105, 255];
const CAPSULE: Rgba = [139, 0, 0, 255];

/// Default extents of a side module.
const SIDE_MODULE_SIZE: DVec3 = DVec3::new(1.2, 2.5, 1.0);

/// Default extents of a hull surface panel.
const SURFACE_PANEL_SIZE: DVec3 = DVec3::new(1.0, 0.05, 0.7);

/// Rectangular module centered at `position`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use starforge_models::falcon::side_module;
///
/// let size = DVec3::new(1.2, 2.5, 1.0);
/// let module = side_module(DVec3::new(2.85, 0.0, 6.0), size, [100, 100, 140, 255]).unwrap();
/// assert_eq!(module.mesh.vertex_count(), 8);
/// ```
pub fn side_module(position: DVec3, size: DVec3, color: Rgba) -> MeshResult<Instance> {
    Ok(part(cuboid(size)?, position, color))
}

/// Thin plate centered at `position`.
pub fn surface_panel(position: DVec3, size: DVec3, color: Rgba) -> MeshResult<Instance> {
    Ok(part(cuboid(size)?, position, color))
}

pub(super) fn scientific_module(cfg: &FalconParkerConfig) -> MeshResult<Instance> {
    let module = cylinder(1.0, 0.4, cfg.sections)?;
    Ok(part(module, DVec3::new(0.0, 0.0, cfg.length * 0.2), SCIENCE))
}

pub(super) fn payload_module(cfg: &FalconParkerConfig) -> MeshResult<Instance> {
    let module = cuboid(DVec3::new(2.5, 2.5, 1.2))?;
    Ok(part(module, DVec3::new(0.0, 0.0, cfg.length * 0.3), PAYLOAD))
}

pub(super) fn side_modules(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let r = cfg.radius;
    Ok(vec![
        side_module(DVec3::new(r + 1.5, 0.0, 6.0), SIDE_MODULE_SIZE, SIDE_MODULE)?,
        side_module(DVec3::new(-r - 1.5, 0.0, 8.0), SIDE_MODULE_SIZE, SIDE_MODULE)?,
        side_module(
            DVec3::new(0.0, r + 1.2, 12.0),
            DVec3::new(1.5, 1.5, 0.8),
            SIDE_MODULE_DARK,
        )?,
    ])
}

/// Six rows of panels on both flanks of the hull.
pub(super) fn surface_panels(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let y = cfg.radius + 0.25;
    let mut panels = Vec::with_capacity(12);
    for z in linspace(3.0, cfg.length - 3.0, 6) {
        for side in [1.0, -1.0] {
            panels.push(surface_panel(
                DVec3::new(0.0, side * y, z),
                SURFACE_PANEL_SIZE,
                SURFACE_PANEL,
            )?);
        }
    }
    Ok(panels)
}

/// Spherical node with a tunnel along each of the six axis directions.
pub(super) fn docking_node(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    const TUNNEL_LENGTH: f64 = 1.8;

    let center = DVec3::new(0.0, 0.0, cfg.length * 0.6);
    let mut parts = vec![part(icosphere(cfg.subdivisions, 0.8)?, center, NODE)];

    let tunnel = cylinder(0.35, TUNNEL_LENGTH, cfg.sections)?;
    let tilt_x = Rotation::new(FRAC_PI_2, DVec3::Y)?;
    let tilt_y = Rotation::new(FRAC_PI_2, DVec3::X)?;
    let ports = [
        (DVec3::X, tilt_x),
        (DVec3::NEG_X, tilt_x),
        (DVec3::Y, tilt_y),
        (DVec3::NEG_Y, tilt_y),
        (DVec3::Z, Rotation::IDENTITY),
        (DVec3::NEG_Z, Rotation::IDENTITY),
    ];
    for (direction, rotation) in ports {
        let placement = Transform::new()
            .rotated(rotation)
            .translated(center + direction * (TUNNEL_LENGTH / 2.0));
        parts.push(Instance::placed(&tunnel, &placement, Some(TUNNEL)));
    }

    Ok(parts)
}

pub(super) fn lab_modules(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let lab = cuboid(DVec3::new(2.4, 2.4, 3.5))?;
    let z = cfg.length * 0.6;
    Ok(vec![
        part(lab.clone(), DVec3::new(3.5, 0.0, z), LAB),
        part(lab, DVec3::new(-3.5, 0.0, z), LAB_DARK),
    ])
}

/// Observation cupola: plain base disc under a glass dome.
///
/// The base carries no color tag and is drawn in the default vertex color.
pub(super) fn cupola(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let mount = DVec3::new(0.0, 0.0, cfg.length * 0.95);
    let base = cylinder(0.8, 0.2, cfg.sections)?;
    let glass = icosphere(cfg.subdivisions.saturating_sub(1), 0.9)?;
    Ok(vec![
        Instance::new(translate(&base, mount)),
        part(glass, mount + DVec3::new(0.0, 0.0, 0.5), CUPOLA_GLASS),
    ])
}

pub(super) fn control_moment_gyros(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let gyro = cylinder(0.25, 0.2, cfg.sections)?;
    Ok(ring_positions(3, 2.2)
        .map(|(x, y)| part(gyro.clone(), DVec3::new(x, y, cfg.length * 0.6), GYRO))
        .collect())
}

/// Ellipsoidal capsule centered at `position`.
pub(super) fn escape_capsule(cfg: &FalconParkerConfig, position: DVec3) -> MeshResult<Instance> {
    let shell = icosphere(cfg.subdivisions, 1.0)?;
    let placement = Transform::new()
        .scaled(DVec3::new(1.5, 1.5, 2.4))?
        .translated(position);
    Ok(Instance::placed(&shell, &placement, Some(CAPSULE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use starforge_mesh::Bounds;

    #[test]
    fn test_surface_panels_cover_both_flanks() {
        let cfg = FalconParkerConfig::default();
        let panels = surface_panels(&cfg).unwrap();
        assert_eq!(panels.len(), 12);

        let first = Bounds::of(&panels[0].mesh).unwrap().center();
        let last = Bounds::of(&panels[11].mesh).unwrap().center();
        assert_relative_eq!(first.z, 3.0, epsilon = 1e-9);
        assert_relative_eq!(last.z, 17.0, epsilon = 1e-9);
        assert_relative_eq!(first.y, -last.y, epsilon = 1e-9);
    }

    #[test]
    fn test_docking_tunnels_point_outward() {
        let cfg = FalconParkerConfig::default();
        let parts = docking_node(&cfg).unwrap();
        assert_eq!(parts.len(), 7);

        let node_center = DVec3::new(0.0, 0.0, 12.0);
        let east = Bounds::of(&parts[1].mesh).unwrap();
        assert_relative_eq!(east.center().x, 0.9, epsilon = 1e-9);
        assert_relative_eq!(east.size().x, 1.8, epsilon = 1e-9);
        assert_relative_eq!(east.center().z, node_center.z, epsilon = 1e-9);

        let down = Bounds::of(&parts[6].mesh).unwrap();
        assert_relative_eq!(down.max.z, node_center.z, epsilon = 1e-9);
    }

    #[test]
    fn test_cupola_base_is_untagged() {
        let parts = cupola(&FalconParkerConfig::default()).unwrap();
        assert_eq!(parts[0].color, None);
        assert_eq!(parts[1].color, Some(CUPOLA_GLASS));
    }

    #[test]
    fn test_escape_capsule_is_stretched() {
        let capsule =
            escape_capsule(&FalconParkerConfig::default(), DVec3::new(0.0, 3.0, 2.0)).unwrap();
        let bounds = Bounds::of(&capsule.mesh).unwrap();
        assert_relative_eq!(bounds.size().z, 4.8, epsilon = 1e-9);
        assert_relative_eq!(bounds.center().y, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_side_module_rejects_flat_box() {
        assert!(side_module(DVec3::ZERO, DVec3::new(1.0, 0.0, 1.0), SIDE_MODULE).is_err());
    }
}

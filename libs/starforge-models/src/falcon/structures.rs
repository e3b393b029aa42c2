//! External structures: power, thermal control, landing gear, sensing and
//! communication.

use glam::DVec3;
use starforge_mesh::primitives::{cone, cuboid, cylinder, icosphere};
use starforge_mesh::transform::apply_matrix;
use starforge_mesh::{Instance, MeshResult, Rgba, Rotation, Transform};

use super::{part, FalconParkerConfig};

const SOLAR_CELL: Rgba = [30, 144, 255, 180];
const SOLAR_FRAME: Rgba = [169, 169, 169, 255];
const RADIATOR: Rgba = [70, 70, 70, 180];
const LEG: Rgba = [128, 128, 128, 255];
const SENSOR: Rgba = [255, 140, 0, 200];
const MAST: Rgba = [255, 255, 224, 255];
const ARM_BASE: Rgba = [139, 69, 19, 255];
const ARM: Rgba = [160, 82, 45, 255];
const DISH: Rgba = [211, 211, 211, 220];
const DISH_MAST: Rgba = [169, 169, 169, 255];
const WHIP: Rgba = [220, 220, 220, 200];
const WHIP_TIP: Rgba = [200, 200, 255, 230];

/// Horizontal offsets of the two solar wings.
const WING_X: [f64; 2] = [-3.2, 3.2];

/// Tilt of every landing leg about the X axis.
const LEG_TILT_DEG: f64 = 35.0;

pub(super) fn solar_panels(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let panel = cuboid(DVec3::new(5.0, 0.1, 1.5))?;
    Ok(WING_X
        .iter()
        .map(|&x| part(panel.clone(), DVec3::new(x, 0.0, cfg.length * 0.4), SOLAR_CELL))
        .collect())
}

pub(super) fn solar_panel_frames(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let frame = cuboid(DVec3::new(5.1, 0.12, 1.6))?;
    Ok(WING_X
        .iter()
        .map(|&x| part(frame.clone(), DVec3::new(x, 0.0, cfg.length * 0.4), SOLAR_FRAME))
        .collect())
}

pub(super) fn radiators(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let panel = cuboid(DVec3::new(3.0, 0.05, 1.0))?;
    Ok([2.5, -2.5]
        .into_iter()
        .map(|x| part(panel.clone(), DVec3::new(x, 0.0, cfg.length * 0.7), RADIATOR))
        .collect())
}

/// Four struts on the diagonals, each tilted about its own center.
pub(super) fn landing_legs() -> MeshResult<Vec<Instance>> {
    use std::f64::consts::FRAC_PI_4;

    let strut = cuboid(DVec3::new(0.1, 0.1, 2.0))?;
    let mut legs = Vec::with_capacity(4);
    for angle in [FRAC_PI_4, 3.0 * FRAC_PI_4, -FRAC_PI_4, -3.0 * FRAC_PI_4] {
        let center = DVec3::new(angle.cos() * 1.8, angle.sin() * 1.8, -1.0);
        let tilt = Rotation::new(LEG_TILT_DEG.to_radians(), DVec3::X)?.about(center);
        let placement =
            Transform::from_translation(center).then(&Transform::new().rotated(tilt));
        legs.push(Instance::colored(apply_matrix(&strut, &placement), LEG));
    }
    Ok(legs)
}

/// Pair of spherical sensors near the top of the hull.
pub(super) fn sensors(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let sensor = icosphere(cfg.subdivisions, 0.15)?;
    Ok([1.1, -1.1]
        .into_iter()
        .map(|x| part(sensor.clone(), DVec3::new(x, 0.0, cfg.length - 2.0), SENSOR))
        .collect())
}

pub(super) fn antenna_array(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let mast = cylinder(0.05, 1.3, cfg.sections)?;
    let z = cfg.length - 0.8 + 0.65;
    Ok([(0.4, 0.4), (-0.4, -0.4)]
        .into_iter()
        .map(|(x, y)| part(mast.clone(), DVec3::new(x, y, z), MAST))
        .collect())
}

/// Short turret with a boom reaching along +Y.
pub(super) fn robotic_arm(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let mount = DVec3::new(1.6, 0.0, cfg.length * 0.7);
    Ok(vec![
        part(cylinder(0.1, 0.4, cfg.sections)?, mount, ARM_BASE),
        part(
            cuboid(DVec3::new(0.1, 1.2, 0.1))?,
            mount + DVec3::new(0.0, 0.6, 0.0),
            ARM,
        ),
    ])
}

/// Dish approximated by a shallow cone on a support mast.
pub(super) fn parabolic_antenna(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let z = cfg.length * 0.9;
    Ok(vec![
        part(cone(1.2, 0.6, cfg.sections)?, DVec3::new(0.0, 0.0, z), DISH),
        part(
            cylinder(0.07, 0.8, cfg.sections)?,
            DVec3::new(0.0, 0.0, z - 0.8),
            DISH_MAST,
        ),
    ])
}

/// Whip antennas with a ball tip at their base point.
pub(super) fn extra_antennas(cfg: &FalconParkerConfig) -> MeshResult<Vec<Instance>> {
    let top = cfg.length;
    let positions = [
        DVec3::new(1.0, 1.0, top - 1.5),
        DVec3::new(-1.2, 1.5, top - 1.7),
        DVec3::new(1.5, -1.3, top - 2.2),
        DVec3::new(-1.4, -1.6, top - 2.5),
        DVec3::new(0.0, 0.0, top - 0.5),
    ];

    let whip = cylinder(0.03, 1.0, cfg.sections)?;
    let tip = icosphere(cfg.subdivisions, 0.06)?;
    let mut parts = Vec::with_capacity(positions.len() * 2);
    for at in positions {
        parts.push(part(whip.clone(), at + DVec3::new(0.0, 0.0, 0.5), WHIP));
        parts.push(part(tip.clone(), at, WHIP_TIP));
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use starforge_mesh::Bounds;

    #[test]
    fn test_wings_are_symmetric() {
        let cfg = FalconParkerConfig::default();
        let wings = solar_panels(&cfg).unwrap();
        let left = Bounds::of(&wings[0].mesh).unwrap();
        let right = Bounds::of(&wings[1].mesh).unwrap();
        assert_relative_eq!(left.center().x, -right.center().x);
        assert_relative_eq!(left.center().z, 8.0);
    }

    #[test]
    fn test_legs_tilt_about_their_center() {
        let legs = landing_legs().unwrap();
        assert_eq!(legs.len(), 4);
        for leg in &legs {
            let bounds = Bounds::of(&leg.mesh).unwrap();
            assert_relative_eq!(bounds.center().z, -1.0, epsilon = 1e-9);
            // A 2.0 strut tilted by 35 degrees spans less height.
            assert!(bounds.size().z < 2.0);
            assert!(bounds.size().y > 1.0);
        }
    }

    #[test]
    fn test_extra_antennas_pair_whip_and_tip() {
        let parts = extra_antennas(&FalconParkerConfig::default()).unwrap();
        assert_eq!(parts.len(), 10);
        assert_eq!(parts[1].color, Some(WHIP_TIP));
    }
}

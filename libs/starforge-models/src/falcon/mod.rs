//! # Falcon Parker
//!
//! The reference spacecraft: a long cylindrical hull with a nose cone and
//! thermal shield on top, a nine-engine cluster and ion ring below, and
//! solar wings, radiators, habitation modules and antennas around it.
//!
//! Every part family is one parameterized builder in a submodule. Parts are
//! generated inside [`falcon_parker`] on every call; nothing is precomputed
//! or shared between builds.
//!
//! ## Layout
//!
//! ```text
//! z = length + 1.35   second hex shield layer
//! z = length + 1.2    first hex shield layer
//! z = length          fuselage top, thermal shield
//! z = 0               fuselage base
//! z < 0               propulsion base, engines, ion ring, landing legs
//! ```

mod fuselage;
mod modules;
mod propulsion;
mod shielding;
mod structures;

pub use modules::{side_module, surface_panel};

use config::constants::{
    DEFAULT_COMBINE_BATCH_SIZE, DEFAULT_ICOSPHERE_SUBDIVISIONS, DEFAULT_SECTIONS,
    DEFAULT_SHIELD_RADIUS, FUSELAGE_LENGTH, FUSELAGE_RADIUS,
};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use starforge_mesh::transform::translate;
use starforge_mesh::{Assembly, Instance, InstanceSink, Mesh, MeshResult, Rgba, Subtraction};

use crate::error::ModelResult;

/// Parameters of the reference spacecraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FalconParkerConfig {
    /// Fuselage length along +Z.
    pub length: f64,
    /// Nominal fuselage radius.
    pub radius: f64,
    /// Radius of both hex shield layers.
    pub shield_radius: f64,
    /// Sections for cylinders, cones and tori.
    pub sections: u32,
    /// Icosphere subdivision level for sensors, domes and capsules.
    pub subdivisions: u32,
    /// Instances merged per combiner batch.
    pub batch_size: usize,
    /// How the ion propulsion ring is hollowed out.
    pub ring_subtraction: Subtraction,
}

impl Default for FalconParkerConfig {
    fn default() -> Self {
        Self {
            length: FUSELAGE_LENGTH,
            radius: FUSELAGE_RADIUS,
            shield_radius: DEFAULT_SHIELD_RADIUS,
            sections: DEFAULT_SECTIONS,
            subdivisions: DEFAULT_ICOSPHERE_SUBDIVISIONS,
            batch_size: DEFAULT_COMBINE_BATCH_SIZE,
            ring_subtraction: Subtraction::default(),
        }
    }
}

/// Builds the full reference spacecraft as an uncombined [`Assembly`].
///
/// # Errors
///
/// Propagates the first part that fails to generate, e.g. a non-positive
/// length or a section count below three.
///
/// # Example
///
/// ```rust,no_run
/// use starforge_models::falcon::{falcon_parker, FalconParkerConfig};
///
/// let assembly = falcon_parker(&FalconParkerConfig::default()).unwrap();
/// let combined = assembly.combine().unwrap();
/// assert!(combined.mesh().vertex_count() > 0);
/// ```
pub fn falcon_parker(cfg: &FalconParkerConfig) -> ModelResult<Assembly> {
    let mut assembly = Assembly::new("falcon-parker").with_batch_size(cfg.batch_size);
    falcon_parker_into(cfg, &mut assembly)?;

    log::info!(
        "Assembled {}: {} parts, {} vertices, {} triangles",
        assembly.name(),
        assembly.len(),
        assembly.vertex_count(),
        assembly.triangle_count()
    );
    Ok(assembly)
}

/// Generates the reference spacecraft part by part into `sink`.
///
/// Each part family is handed over as soon as it is built, and shield tiles
/// one at a time, so a [`Combiner`](starforge_mesh::Combiner) sink holds at
/// most one family plus its pending batch. Returns the number of parts.
///
/// # Errors
///
/// As [`falcon_parker`], plus whatever the sink reports.
pub fn falcon_parker_into<S: InstanceSink>(
    cfg: &FalconParkerConfig,
    sink: &mut S,
) -> ModelResult<usize> {
    let mut sink = Counted::new(sink);

    sink.accept_all(fuselage::advanced_fuselage(cfg)?)?;
    sink.accept(fuselage::nose_cone(cfg)?)?;
    sink.accept(fuselage::escape_tower(cfg)?)?;
    sink.accept(propulsion::propulsion_base(cfg)?)?;
    sink.accept(shielding::thermal_shield(cfg)?)?;
    sink.accept_all(shielding::reinforced_layers(cfg)?)?;
    sink.accept(fuselage::spine(cfg)?)?;
    sink.accept(modules::scientific_module(cfg)?)?;
    sink.accept_all(propulsion::merlin_array(cfg)?)?;
    sink.accept_all(structures::solar_panels(cfg)?)?;
    sink.accept_all(structures::solar_panel_frames(cfg)?)?;
    sink.accept_all(structures::radiators(cfg)?)?;
    sink.accept_all(structures::landing_legs()?)?;
    sink.accept_all(structures::sensors(cfg)?)?;
    sink.accept_all(structures::antenna_array(cfg)?)?;
    sink.accept_all(structures::robotic_arm(cfg)?)?;
    sink.accept(fuselage::dome(cfg)?)?;
    sink.accept(modules::payload_module(cfg)?)?;
    shielding::hex_layers(cfg, &mut sink)?;
    sink.accept_all(propulsion::ion_propulsion(cfg)?)?;
    sink.accept_all(structures::parabolic_antenna(cfg)?)?;
    sink.accept_all(modules::side_modules(cfg)?)?;
    sink.accept_all(structures::extra_antennas(cfg)?)?;
    for side in [1.0, -1.0] {
        let at = DVec3::new(side * (cfg.radius + 2.5), 0.0, 6.0);
        sink.accept_all(propulsion::warp_propulsor(cfg, at)?)?;
    }
    sink.accept_all(modules::surface_panels(cfg)?)?;
    sink.accept_all(modules::docking_node(cfg)?)?;
    sink.accept_all(modules::lab_modules(cfg)?)?;
    sink.accept_all(modules::cupola(cfg)?)?;
    sink.accept_all(modules::control_moment_gyros(cfg)?)?;
    for side in [-1.0, 1.0] {
        sink.accept(modules::escape_capsule(cfg, DVec3::new(0.0, side * 3.0, 2.0))?)?;
    }

    log::debug!("Generated falcon-parker: {} parts", sink.count);
    Ok(sink.count)
}

/// Counts what passes through to the wrapped sink.
struct Counted<'a, S> {
    inner: &'a mut S,
    count: usize,
}

impl<'a, S> Counted<'a, S> {
    fn new(inner: &'a mut S) -> Self {
        Self { inner, count: 0 }
    }
}

impl<S: InstanceSink> InstanceSink for Counted<'_, S> {
    fn accept(&mut self, instance: Instance) -> MeshResult<()> {
        self.inner.accept(instance)?;
        self.count += 1;
        Ok(())
    }
}

/// Translated, color-tagged part.
fn part(mesh: Mesh, at: DVec3, color: Rgba) -> Instance {
    Instance::colored(translate(&mesh, at), color)
}

/// `count` evenly spaced samples over `[start, stop]`, both ends included.
fn linspace(start: f64, stop: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (stop - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| start + step * i as f64)
}

/// Points on a circle of `radius` in the XY plane, starting on +X.
fn ring_positions(count: usize, radius: f64) -> impl Iterator<Item = (f64, f64)> {
    (0..count).map(move |i| {
        let angle = std::f64::consts::TAU * i as f64 / count as f64;
        (angle.cos() * radius, angle.sin() * radius)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_both_ends() {
        let zs: Vec<f64> = linspace(2.0, 18.0, 5).collect();
        assert_eq!(zs, vec![2.0, 6.0, 10.0, 14.0, 18.0]);
        assert_eq!(linspace(3.0, 9.0, 1).collect::<Vec<_>>(), vec![3.0]);
    }

    #[test]
    fn test_ring_positions_start_on_x_axis() {
        let points: Vec<(f64, f64)> = ring_positions(4, 2.0).collect();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], (2.0, 0.0));
        assert!((points[1].1 - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_config_matches_reference() {
        let cfg = FalconParkerConfig::default();
        assert_eq!(cfg.length, 20.0);
        assert_eq!(cfg.radius, 1.35);
        assert_eq!(cfg.shield_radius, 3.3);
        assert_eq!(cfg.batch_size, 10);
        assert_eq!(cfg.ring_subtraction, Subtraction::OverlapOnly);
    }

    #[test]
    fn test_config_fills_missing_fields() {
        let cfg: FalconParkerConfig = serde_json::from_str(r#"{"length": 12.0}"#).unwrap();
        assert_eq!(cfg.length, 12.0);
        assert_eq!(cfg.sections, DEFAULT_SECTIONS);
    }

    #[test]
    fn test_bad_section_count_fails_build() {
        let cfg = FalconParkerConfig {
            sections: 2,
            ..FalconParkerConfig::default()
        };
        assert!(falcon_parker(&cfg).is_err());
    }

    #[test]
    fn test_counted_sink_forwards_everything() {
        let mut parts: Vec<Instance> = Vec::new();
        let mut counted = Counted::new(&mut parts);
        counted
            .accept_all([Mesh::new(), Mesh::new()])
            .unwrap();
        assert_eq!(counted.count, 2);
        assert_eq!(parts.len(), 2);
    }
}

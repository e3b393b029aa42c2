//! # Merlin Engine
//!
//! Detailed single engine: a hollow nozzle, the combustion chamber stacked
//! on its apex, a turbopump on top and four feed lines around the chamber.
//!
//! The nozzle is a cone with the throat cylinder cut out. The cut uses the
//! configured [`Subtraction`]; on the exact path a failed boolean keeps the
//! solid cone.

use config::constants::{ENGINE_SECTIONS, FEED_LINE_SECTIONS};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use starforge_mesh::primitives::{cone, cylinder};
use starforge_mesh::transform::translate;
use starforge_mesh::{
    Assembly, Instance, InstanceSink, Rgba, Rotation, Subtraction, Transform,
};

use crate::error::ModelResult;

const NOZZLE: Rgba = [200, 200, 200, 255];
const THROAT: Rgba = [60, 60, 60, 255];
const CHAMBER: Rgba = [150, 150, 150, 255];
const TURBOPUMP: Rgba = [80, 80, 80, 255];

/// Engine dimensions. The nozzle base sits at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerlinConfig {
    /// Mount point of the nozzle base.
    pub position: DVec3,
    /// Nozzle base radius.
    pub nozzle_radius: f64,
    /// Nozzle height; the chamber starts here.
    pub nozzle_height: f64,
    /// Radius of the bore cut through the nozzle.
    pub throat_radius: f64,
    /// Combustion chamber radius.
    pub chamber_radius: f64,
    /// Combustion chamber height.
    pub chamber_height: f64,
    /// Turbopump radius.
    pub turbopump_radius: f64,
    /// Turbopump height.
    pub turbopump_height: f64,
    /// Feed line radius.
    pub feed_line_radius: f64,
    /// Feed line length.
    pub feed_line_length: f64,
    /// Distance of the feed lines from the engine axis.
    pub feed_line_offset: f64,
    /// Sections of the nozzle and housings.
    pub sections: u32,
    /// Sections of the feed lines.
    pub feed_line_sections: u32,
    /// How the throat is cut out of the nozzle.
    pub nozzle_cut: Subtraction,
}

impl Default for MerlinConfig {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            nozzle_radius: 0.65,
            nozzle_height: 1.2,
            throat_radius: 0.15,
            chamber_radius: 0.22,
            chamber_height: 0.5,
            turbopump_radius: 0.28,
            turbopump_height: 0.4,
            feed_line_radius: 0.02,
            feed_line_length: 0.3,
            feed_line_offset: 0.3,
            sections: ENGINE_SECTIONS,
            feed_line_sections: FEED_LINE_SECTIONS,
            nozzle_cut: Subtraction::Exact,
        }
    }
}

/// Builds the detailed engine.
///
/// # Errors
///
/// Propagates generator errors for non-positive dimensions or too few
/// sections. A failed nozzle cut is not an error.
///
/// # Example
///
/// ```rust
/// use starforge_models::merlin::{merlin_engine, MerlinConfig};
///
/// let cfg = MerlinConfig { sections: 16, ..MerlinConfig::default() };
/// let engine = merlin_engine(&cfg).unwrap();
/// assert_eq!(engine.len(), 7);
/// ```
pub fn merlin_engine(cfg: &MerlinConfig) -> ModelResult<Assembly> {
    let mut assembly = Assembly::new("merlin-engine");
    merlin_engine_into(cfg, &mut assembly)?;

    log::debug!(
        "Built {}: {} parts, {} vertices",
        assembly.name(),
        assembly.len(),
        assembly.vertex_count()
    );
    Ok(assembly)
}

/// Generates the engine parts into `sink`, bottom up.
///
/// # Errors
///
/// As [`merlin_engine`], plus whatever the sink reports.
pub fn merlin_engine_into<S: InstanceSink>(cfg: &MerlinConfig, sink: &mut S) -> ModelResult<()> {
    let axis = |z: f64| cfg.position + DVec3::new(0.0, 0.0, z);

    let outer = translate(&cone(cfg.nozzle_radius, cfg.nozzle_height, cfg.sections)?, cfg.position);
    let throat = translate(
        &cylinder(cfg.throat_radius, cfg.nozzle_height, cfg.sections)?,
        axis(cfg.nozzle_height / 2.0),
    );
    for (mesh, color) in cfg.nozzle_cut.apply(&outer, &throat).into_iter().zip([NOZZLE, THROAT]) {
        sink.accept(Instance::colored(mesh, color))?;
    }

    let chamber = cylinder(cfg.chamber_radius, cfg.chamber_height, cfg.sections)?;
    sink.accept(Instance::colored(
        translate(&chamber, axis(cfg.nozzle_height)),
        CHAMBER,
    ))?;

    let turbopump = cylinder(cfg.turbopump_radius, cfg.turbopump_height, cfg.sections)?;
    sink.accept(Instance::colored(
        translate(&turbopump, axis(cfg.nozzle_height + cfg.chamber_height)),
        TURBOPUMP,
    ))?;

    let line = cylinder(cfg.feed_line_radius, cfg.feed_line_length, cfg.feed_line_sections)?;
    for quarter in 0..4 {
        let angle = f64::from(quarter) * std::f64::consts::FRAC_PI_2;
        let offset = DVec3::new(angle.cos(), angle.sin(), 0.0) * cfg.feed_line_offset;
        let placement = Transform::new()
            .rotated(Rotation::new(angle, DVec3::Z)?)
            .translated(axis(cfg.nozzle_height + cfg.feed_line_length) + offset);
        sink.accept(Instance::placed(&line, &placement, None))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use starforge_mesh::Bounds;

    fn coarse() -> MerlinConfig {
        MerlinConfig {
            sections: 16,
            feed_line_sections: 8,
            ..MerlinConfig::default()
        }
    }

    #[test]
    fn test_exact_cut_yields_one_nozzle() {
        let engine = merlin_engine(&coarse()).unwrap();
        // nozzle, chamber, turbopump, four feed lines
        assert_eq!(engine.len(), 7);
        assert_eq!(engine.instances()[0].color, Some(NOZZLE));
    }

    #[test]
    fn test_overlap_keeps_throat_visible() {
        let cfg = MerlinConfig {
            nozzle_cut: Subtraction::OverlapOnly,
            ..coarse()
        };
        let engine = merlin_engine(&cfg).unwrap();
        assert_eq!(engine.len(), 8);
        assert_eq!(engine.instances()[1].color, Some(THROAT));
    }

    #[test]
    fn test_stack_heights() {
        let engine = merlin_engine(&coarse()).unwrap();
        let bounds = Bounds::of(engine.combine().unwrap().mesh()).unwrap();
        assert_relative_eq!(bounds.min.z, 0.0, epsilon = 1e-9);
        // turbopump centered at 1.7, half height 0.2
        assert_relative_eq!(bounds.max.z, 1.9, epsilon = 1e-9);
    }

    #[test]
    fn test_feed_lines_surround_chamber() {
        let engine = merlin_engine(&coarse()).unwrap();
        for line in &engine.instances()[3..] {
            let center = Bounds::of(&line.mesh).unwrap().center();
            assert_relative_eq!(center.truncate().length(), 0.3, epsilon = 1e-9);
            assert_relative_eq!(center.z, 1.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_engine_follows_position() {
        let cfg = MerlinConfig {
            position: DVec3::new(2.0, -1.0, 5.0),
            ..coarse()
        };
        let bounds = Bounds::of(merlin_engine(&cfg).unwrap().combine().unwrap().mesh()).unwrap();
        assert_relative_eq!(bounds.min.z, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_zero_throat() {
        let cfg = MerlinConfig {
            throat_radius: 0.0,
            ..coarse()
        };
        assert!(merlin_engine(&cfg).is_err());
    }
}

use starforge_mesh::{Combiner, HexPanel, Instance, InstanceSink, MeshResult, ShieldLayer};
use starforge_models::{falcon_parker, falcon_parker_into, FalconParkerConfig, ModelKind};

fn coarse_falcon() -> FalconParkerConfig {
    FalconParkerConfig {
        sections: 8,
        subdivisions: 1,
        ..FalconParkerConfig::default()
    }
}

#[test]
fn falcon_parker_combines_with_valid_indices() {
    let assembly = falcon_parker(&coarse_falcon()).unwrap();
    let parts = assembly.len();
    let vertices = assembly.vertex_count();
    let triangles = assembly.triangle_count();

    let combined = assembly.combine().unwrap();
    let mesh = combined.mesh();
    assert_eq!(combined.instance_count(), parts);
    assert_eq!(mesh.vertex_count(), vertices);
    assert_eq!(mesh.triangle_count(), triangles);
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.colors().map(|c| c.len()), Some(vertices));
}

#[test]
fn falcon_parker_carries_two_shield_layers() {
    let cfg = coarse_falcon();
    let tiles_per_layer = ShieldLayer::new(0.0, cfg.shield_radius)
        .tile_centers()
        .unwrap()
        .len();

    let assembly = falcon_parker(&cfg).unwrap();
    let tiles = assembly
        .instances()
        .iter()
        .filter(|i| i.mesh.vertex_count() == HexPanel::VERTEX_COUNT)
        .count();
    assert_eq!(tiles, 2 * tiles_per_layer);
}

#[test]
fn falcon_parker_spans_landing_legs_to_nose() {
    let cfg = coarse_falcon();
    let combined = falcon_parker(&cfg).unwrap().combine().unwrap();
    let bounds = combined.bounds().unwrap();
    // tilted legs reach below the nozzles at -1.8
    assert!(bounds.min.z < -1.8 && bounds.min.z > -2.0);
    // nose cone apex
    assert!((bounds.max.z - (cfg.length + 4.8)).abs() < 1e-9);
}

#[test]
fn batch_size_does_not_change_geometry() {
    let small = FalconParkerConfig {
        batch_size: 3,
        ..coarse_falcon()
    };
    let a = falcon_parker(&small).unwrap().combine().unwrap();
    let b = falcon_parker(&coarse_falcon()).unwrap().combine().unwrap();
    assert!(a.batch_count() > b.batch_count());
    assert_eq!(a.mesh(), b.mesh());
}

#[test]
fn builds_are_independent() {
    let first = falcon_parker(&coarse_falcon()).unwrap().combine().unwrap();
    let second = falcon_parker(&coarse_falcon()).unwrap().combine().unwrap();
    assert_eq!(first.mesh(), second.mesh());
}

#[test]
fn every_catalog_model_builds() {
    for kind in ModelKind::ALL {
        let combined = kind.build().unwrap().combine().unwrap();
        assert!(combined.mesh().triangle_count() > 0, "{kind} is empty");
    }
}

/// Combiner that records the most instances it ever held unmerged.
struct Watched {
    combiner: Combiner,
    peak_pending: usize,
}

impl InstanceSink for Watched {
    fn accept(&mut self, instance: Instance) -> MeshResult<()> {
        self.combiner.accept(instance)?;
        self.peak_pending = self.peak_pending.max(self.combiner.pending());
        Ok(())
    }
}

#[test]
fn streamed_falcon_never_holds_more_than_a_batch() {
    let cfg = coarse_falcon();
    let mut sink = Watched {
        combiner: Combiner::new(4).unwrap(),
        peak_pending: 0,
    };

    let parts = falcon_parker_into(&cfg, &mut sink).unwrap();
    assert!(sink.peak_pending < 4);
    assert_eq!(sink.combiner.instance_count(), parts);

    let streamed = sink.combiner.finish().unwrap();
    let collected = falcon_parker(&cfg).unwrap().combine().unwrap();
    assert_eq!(streamed.instance_count(), collected.instance_count());
    assert_eq!(streamed.mesh(), collected.mesh());
}

#[test]
fn every_catalog_model_streams_into_a_combiner() {
    for kind in ModelKind::ALL {
        let mut combiner = Combiner::default();
        kind.build_into(&mut combiner).unwrap();
        assert_eq!(combiner.instance_count(), kind.build().unwrap().len());
    }
}

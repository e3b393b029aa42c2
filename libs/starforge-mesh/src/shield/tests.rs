//! # Shield Generator Tests

use super::*;
use crate::assembly::Combiner;
use approx::assert_relative_eq;

// =============================================================================
// PANEL
// =============================================================================

#[test]
fn test_panel_topology_is_parameter_independent() {
    for (radius, thickness) in [(0.5, 0.1), (1.0, 0.15), (0.7, 0.2), (3.0, 0.01)] {
        let mesh = HexPanel { radius, thickness }.build().unwrap();
        assert_eq!(mesh.vertex_count(), HexPanel::VERTEX_COUNT);
        assert_eq!(mesh.triangle_count(), HexPanel::FACE_COUNT);
        assert!(mesh.indices_u32().iter().all(|&i| i < 12));
    }
}

#[test]
fn test_panel_face_list() {
    let mesh = HexPanel::default().build().unwrap();
    let faces = mesh.triangles();
    assert_eq!(faces[0], [0, 1, 7]);
    assert_eq!(faces[1], [0, 7, 6]);
    assert_eq!(faces[10], [5, 0, 6]);
    assert_eq!(faces[11], [5, 6, 11]);
    assert_eq!(faces[16], [0, 5, 1]);
    assert_eq!(faces[21], [6, 11, 7]);
}

#[test]
fn test_panel_geometry() {
    let panel = HexPanel {
        radius: 2.0,
        thickness: 0.3,
    };
    let mesh = panel.build().unwrap();
    for i in 0..6 {
        let bottom = mesh.vertex(i);
        let top = mesh.vertex(i + 6);
        assert_relative_eq!(bottom.truncate().length(), 2.0, epsilon = 1e-12);
        assert_eq!(bottom.z, 0.0);
        assert_relative_eq!(top.z, 0.3);
        assert_eq!(top.truncate(), bottom.truncate());
    }
    assert_relative_eq!(mesh.vertex(1).x, 1.0, epsilon = 1e-12);
}

#[test]
fn test_panel_side_walls_face_outward() {
    let mesh = HexPanel::default().build().unwrap();
    for i in 0..12 {
        let [a, b, c] = mesh.triangle_corners(i);
        let centroid = (a + b + c) / 3.0;
        let radial = DVec3::new(centroid.x, centroid.y, 0.0);
        assert!(mesh.triangle_normal(i).dot(radial) > 0.0);
    }
}

#[test]
fn test_panel_rejects_bad_dimensions() {
    let flat = HexPanel {
        radius: 0.5,
        thickness: 0.0,
    };
    assert!(matches!(
        flat.build(),
        Err(MeshError::InvalidParameter { .. })
    ));
    let negative = HexPanel {
        radius: -1.0,
        thickness: 0.1,
    };
    assert!(negative.build().is_err());
}

// =============================================================================
// LAYER
// =============================================================================

#[test]
fn test_default_step() {
    let layer = ShieldLayer::new(0.0, 3.5);
    assert_relative_eq!(layer.effective_step(), 1.0);
}

#[test]
fn test_centers_inside_disk_and_unique() {
    for radius in [0.6, 1.0, 3.0, 3.3, 6.0] {
        let centers = ShieldLayer::new(0.0, radius).tile_centers().unwrap();
        for (i, c) in centers.iter().enumerate() {
            assert!(c.x * c.x + c.y * c.y <= radius * radius);
            assert!(centers[i + 1..].iter().all(|other| other != c));
        }
    }
}

#[test]
fn test_grid_follows_range_semantics() {
    // 8 columns from -r in steps of 2r/7, rows every step·√3/2.
    let xs = arange(-3.5, 4.5, 1.0);
    assert_eq!(xs, vec![-3.5, -2.5, -1.5, -0.5, 0.5, 1.5, 2.5, 3.5]);

    let ys = arange(-3.5, 4.5, 3.0_f64.sqrt() / 2.0);
    assert_eq!(ys.len(), 10);
    assert!(ys.iter().all(|&y| y < 4.5));

    assert!(arange(1.0, 0.0, 0.5).is_empty());
}

#[test]
fn test_odd_rows_are_offset() {
    let layer = ShieldLayer::new(0.0, 3.5);
    let centers = layer.tile_centers().unwrap();
    let row_step = 3.0_f64.sqrt() / 2.0;
    for c in centers {
        let row = ((c.y + 3.5) / row_step).round() as usize;
        let shift = if row % 2 == 0 { 0.0 } else { 0.5 };
        // Columns sit on -3.5 + k (+ shift).
        let k = c.x + 3.5 - shift;
        assert_relative_eq!(k, k.round(), epsilon = 1e-9);
    }
}

#[test]
fn test_small_layer_yields_no_tiles() {
    let layer = ShieldLayer::new(0.0, 0.1).with_step(2.0 * 3.3 / 7.0);
    assert!(layer.tile_centers().unwrap().is_empty());
    assert!(layer.build().unwrap().is_empty());
}

#[test]
fn test_layer_instances_at_height() {
    let instances = hex_shield_layer(5.0, 3.0).unwrap();
    assert!(!instances.is_empty());
    for instance in &instances {
        let (min, max) = instance.mesh.bounding_box().unwrap();
        assert_relative_eq!(min.z, 5.0);
        assert_relative_eq!(max.z, 5.0 + HEX_PANEL_THICKNESS);
        assert_eq!(instance.color, Some(SHIELD_TILE_COLOR));
        assert_eq!(instance.mesh.vertex_count(), 12);
    }
}

#[test]
fn test_layer_tile_positions_match_centers() {
    let layer = ShieldLayer::new(2.0, 3.3).with_color(None);
    let centers = layer.tile_centers().unwrap();
    let instances = layer.build().unwrap();
    assert_eq!(centers.len(), instances.len());
    for (center, instance) in centers.iter().zip(&instances) {
        // Vertex 0 sits at angle 0 on the panel radius.
        let v0 = instance.mesh.vertex(0);
        assert_relative_eq!(v0.x, center.x + HEX_PANEL_RADIUS, epsilon = 1e-12);
        assert_relative_eq!(v0.y, center.y, epsilon = 1e-12);
        assert!(instance.color.is_none());
    }
}

#[test]
fn test_layer_rejects_bad_inputs() {
    assert!(ShieldLayer::new(0.0, 0.0).tile_centers().is_err());
    assert!(ShieldLayer::new(0.0, 1.0).with_step(0.0).tile_centers().is_err());
    assert!(ShieldLayer::new(0.0, 1.0).with_step(f64::NAN).build().is_err());
}

#[test]
fn test_layer_streams_into_combiner() {
    let layer = ShieldLayer::new(1.0, 3.3);
    let mut combiner = Combiner::new(4).unwrap();
    let placed = layer.build_into(&mut combiner).unwrap();

    assert_eq!(placed, layer.tile_centers().unwrap().len());
    assert_eq!(combiner.instance_count(), placed);
    assert!(combiner.pending() < 4);

    let streamed = combiner.finish().unwrap();
    let collected = crate::assembly::combine(layer.build().unwrap()).unwrap();
    assert_eq!(streamed.mesh(), collected.mesh());
}

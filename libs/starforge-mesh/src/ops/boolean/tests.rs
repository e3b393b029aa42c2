//! # Boolean Operation Tests

use super::*;
use crate::primitives::{cone, cuboid, cylinder};
use crate::transform::translate;
use glam::DVec3;

fn cube_at(pos: DVec3, size: f64) -> Mesh {
    translate(&cuboid(DVec3::splat(size)).unwrap(), pos)
}

// =============================================================================
// DIFFERENCE
// =============================================================================

#[test]
fn test_difference_non_overlapping_keeps_extent() {
    let a = cube_at(DVec3::new(-3.0, 0.0, 0.0), 2.0);
    let b = cube_at(DVec3::new(3.0, 0.0, 0.0), 2.0);

    let result = difference(&a, &b).unwrap();
    assert_eq!(result.bounding_box(), a.bounding_box());
}

#[test]
fn test_difference_corner_cut_shrinks_nothing_outside() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::splat(1.0), 2.0);

    let result = difference(&a, &b).unwrap();
    let (min, max) = result.bounding_box().unwrap();
    assert!(min.abs_diff_eq(DVec3::splat(-1.0), 1e-6));
    assert!(max.abs_diff_eq(DVec3::splat(1.0), 1e-6));
    assert!(result.validate().is_ok());
}

#[test]
fn test_difference_through_hole() {
    let block = cube_at(DVec3::ZERO, 4.0);
    let core = cuboid(DVec3::new(2.0, 2.0, 8.0)).unwrap();

    let result = difference(&block, &core).unwrap();

    // No surviving vertex lies strictly inside the removed core.
    for v in result.vertices() {
        assert!(!(v.x.abs() < 0.99 && v.y.abs() < 0.99 && v.z.abs() < 1.99));
    }
    assert!(result.triangle_count() > 12);
}

#[test]
fn test_difference_nozzle_shell() {
    let outer = cone(1.0, 2.0, 16).unwrap();
    let throat = translate(&cylinder(0.4, 3.0, 16).unwrap(), DVec3::new(0.0, 0.0, 1.0));

    let result = difference(&outer, &throat).unwrap();
    assert!(result.validate().is_ok());
    assert!(result.triangle_count() > 0);
}

#[test]
fn test_difference_fully_removed_fails() {
    let small = cube_at(DVec3::ZERO, 1.0);
    let big = cube_at(DVec3::ZERO, 4.0);

    assert!(matches!(
        difference(&small, &big),
        Err(MeshError::BooleanFailed { .. })
    ));
}

#[test]
fn test_difference_empty_operands_fail() {
    let cube = cube_at(DVec3::ZERO, 1.0);
    assert!(matches!(
        difference(&Mesh::new(), &cube),
        Err(MeshError::BooleanFailed { .. })
    ));
    assert!(matches!(
        difference(&cube, &Mesh::new()),
        Err(MeshError::BooleanFailed { .. })
    ));
}

// =============================================================================
// FALLBACK POLICY
// =============================================================================

#[test]
fn test_fallback_returns_minuend() {
    let small = cube_at(DVec3::ZERO, 1.0);
    let big = cube_at(DVec3::ZERO, 4.0);

    let result = difference_or_fallback(&small, &big);
    assert_eq!(result, small);
}

#[test]
fn test_malformed_operand_falls_back() {
    let block = cube_at(DVec3::ZERO, 2.0);
    let mut dangling = Mesh::new();
    dangling.add_vertex(DVec3::ZERO);
    dangling.add_triangle(0, 1, 2);

    assert!(matches!(
        difference(&block, &dangling),
        Err(MeshError::BooleanFailed { .. })
    ));
    assert!(matches!(
        difference(&dangling, &block),
        Err(MeshError::BooleanFailed { .. })
    ));
    assert_eq!(difference_or_fallback(&block, &dangling), block);
}

#[test]
fn test_subtraction_overlap_only_keeps_both() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::ZERO, 1.0);

    let parts = Subtraction::OverlapOnly.apply(&a, &b);
    assert_eq!(parts, vec![a, b]);
}

#[test]
fn test_subtraction_exact_single_mesh() {
    let a = cube_at(DVec3::ZERO, 2.0);
    let b = cube_at(DVec3::splat(1.0), 2.0);

    let parts = Subtraction::Exact.apply(&a, &b);
    assert_eq!(parts.len(), 1);
    assert_ne!(parts[0], a);
}

#[test]
fn test_subtraction_default_is_overlap() {
    assert_eq!(Subtraction::default(), Subtraction::OverlapOnly);
}

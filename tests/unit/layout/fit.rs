use super::*;

#[test]
fn single_target_keeps_aspect() {
    assert_eq!(fit_extent(200, 100, Some(50), None, false), (50, 25));
    assert_eq!(fit_extent(100, 200, None, Some(50), false), (25, 50));
    assert_eq!(fit_extent(3, 2, Some(10), None, true), (10, 7));
}

#[test]
fn both_targets_pick_one_axis() {
    // Landscape: fill matches width, otherwise height.
    assert_eq!(fit_extent(200, 100, Some(50), Some(50), true), (50, 25));
    assert_eq!(fit_extent(200, 100, Some(50), Some(50), false), (100, 50));
    // Portrait: fill matches height, otherwise width.
    assert_eq!(fit_extent(100, 200, Some(50), Some(50), true), (25, 50));
    assert_eq!(fit_extent(100, 200, Some(50), Some(50), false), (50, 100));
    // Square without fill matches width.
    assert_eq!(fit_extent(64, 64, Some(10), Some(20), false), (10, 10));
}

#[test]
fn no_target_returns_source_extent() {
    assert_eq!(fit_extent(30, 20, None, None, false), (30, 20));
}

#[test]
fn empty_source_is_zero() {
    assert_eq!(fit_extent(0, 20, Some(10), None, false), (0, 0));
    assert_eq!(fit_extent(20, 0, None, None, true), (0, 0));
}

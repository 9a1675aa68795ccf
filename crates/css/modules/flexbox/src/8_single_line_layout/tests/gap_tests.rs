//! Tests for CSS gap behavior in flexbox.

use super::*;

#[test]
/// Ensures the main-axis gap counts toward the space a line consumes.
///
/// # Panics
/// Panics if gaps are not added between items of a line.
fn main_gap_is_consumed_between_items() {
    let lines = break_into_lines(&three_items_50(), 1000.0, 20.0, true);
    assert_eq!(lines.len(), 1);
    assert!(close(lines[0].size_consumed, 190.0));
}

#[test]
/// Ensures a gap can push an item onto the next line.
///
/// # Panics
/// Panics if gaps are ignored when breaking lines.
fn main_gap_forces_break() {
    let items = vec![item_zero_margins(0, 40.0), item_zero_margins(1, 40.0)];
    assert_eq!(break_into_lines(&items, 100.0, 10.0, true).len(), 1);
    assert_eq!(break_into_lines(&items, 100.0, 30.0, true).len(), 2);
}

#[test]
/// Undefined and negative gaps count as zero.
///
/// # Panics
/// Panics if a degenerate gap changes the consumed size.
fn degenerate_gaps_are_zero() {
    let nan_gap = break_into_lines(&three_items_50(), 1000.0, f32::NAN, true);
    let negative_gap = break_into_lines(&three_items_50(), 1000.0, -5.0, true);
    assert!(close(nan_gap[0].size_consumed, 150.0));
    assert!(close(negative_gap[0].size_consumed, 150.0));
}

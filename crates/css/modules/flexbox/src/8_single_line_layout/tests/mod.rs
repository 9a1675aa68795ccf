//! Tests for the flex layout algorithm pieces.

use super::*;
use crate::chapter6::ItemRef;

mod auto_margin_tests;
mod baseline_tests;
mod cross_alignment_tests;
mod gap_tests;

/// Helper to create an inflexible `FlexChild` with zero margins and the given basis.
#[inline]
pub fn item_zero_margins(handle: usize, basis: f32) -> FlexChild {
    FlexChild::fixed(ItemRef(handle), basis)
}

/// Helper to create three items with basis 50.
#[inline]
pub fn three_items_50() -> Vec<FlexChild> {
    vec![
        item_zero_margins(0, 50.0),
        item_zero_margins(1, 50.0),
        item_zero_margins(2, 50.0),
    ]
}

/// Approximate float comparison for assertions.
#[inline]
pub fn close(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.01
}

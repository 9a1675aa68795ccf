//! Tests for baseline bookkeeping.

use super::*;

#[test]
/// # Panics
/// Panics if ascent/descent tracking is wrong.
fn line_baseline_tracks_extremes() {
    let mut line = LineBaseline::default();
    line.add(10.0, 30.0);
    line.add(20.0, 25.0);
    assert!(close(line.max_ascent, 20.0));
    assert!(close(line.max_descent, 20.0));
    assert!(close(line.height(), 40.0));
    assert!(close(line.offset_for(10.0), 10.0));
    assert!(close(line.offset_for(20.0), 0.0));
}

#[test]
/// # Panics
/// Panics if an empty line has a height.
fn empty_line_has_no_height() {
    assert!(close(LineBaseline::default().height(), 0.0));
}

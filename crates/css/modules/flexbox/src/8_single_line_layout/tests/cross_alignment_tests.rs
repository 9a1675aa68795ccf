//! Tests for cross-axis alignment within a line.

use super::*;

#[test]
/// # Panics
/// Panics if align-self offsets are wrong.
fn align_offsets() {
    assert!(close(cross_offset_in_line(Align::FlexStart, 20.0, false, false), 0.0));
    assert!(close(cross_offset_in_line(Align::Center, 20.0, false, false), 10.0));
    assert!(close(cross_offset_in_line(Align::FlexEnd, 20.0, false, false), 20.0));
    assert!(close(cross_offset_in_line(Align::Stretch, 20.0, false, false), 0.0));
}

#[test]
/// # Panics
/// Panics if auto cross margins do not override alignment.
fn auto_margins_override_alignment() {
    assert!(close(cross_offset_in_line(Align::FlexEnd, 20.0, true, true), 10.0));
    assert!(close(cross_offset_in_line(Align::FlexEnd, 20.0, false, true), 0.0));
    assert!(close(cross_offset_in_line(Align::FlexStart, 20.0, true, false), 20.0));
}

#[test]
/// # Panics
/// Panics if auto margins absorb negative space.
fn auto_margins_clamp_overflow() {
    assert!(close(cross_offset_in_line(Align::Center, -20.0, true, true), 0.0));
    assert!(close(cross_offset_in_line(Align::Center, -20.0, false, false), -10.0));
}

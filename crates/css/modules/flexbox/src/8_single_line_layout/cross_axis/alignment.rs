//! Cross-axis alignment of flex items within a line.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-items-property>

use super::super::Align;

/// Offset of an item from the cross-start edge of its line.
///
/// `free` is the line's cross size minus the item's outer cross size. Auto
/// cross margins take precedence over `align`: two auto margins center the
/// item, a single auto margin pushes it away from that side. Auto margins
/// never absorb negative space. `stretch` and `baseline` items start at the
/// cross-start edge; baselines are aligned separately.
pub fn cross_offset_in_line(
    align: Align,
    free: f32,
    leading_margin_auto: bool,
    trailing_margin_auto: bool,
) -> f32 {
    match (leading_margin_auto, trailing_margin_auto) {
        (true, true) => (free / 2.0).max(0.0),
        (false, true) => 0.0,
        (true, false) => free.max(0.0),
        (false, false) => match align {
            Align::Center => free / 2.0,
            Align::FlexEnd => free,
            Align::Auto
            | Align::FlexStart
            | Align::Stretch
            | Align::Baseline
            | Align::SpaceBetween
            | Align::SpaceAround => 0.0,
        },
    }
}

//! Collecting flex items into flex lines.
//!
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use log::debug;

use super::super::FlexChild;

/// A flex line: the items `[start, end)` of the in-flow item list.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexLine {
    pub start: usize,
    pub end: usize,
    /// Sum of outer hypothetical main sizes plus the main gaps between them.
    pub size_consumed: f32,
    /// Sum of the grow factors of flexible items.
    pub total_flex_grow: f32,
}

impl FlexLine {
    #[inline]
    pub const fn items_on_line(&self) -> usize {
        self.end - self.start
    }
}

/// Break items into lines by accumulating outer hypothetical sizes and
/// `main_gap` until adding an item would exceed `available_main`.
///
/// A line always takes at least one item. Without wrapping, or with an
/// undefined available size, everything lands on a single line. No items
/// means no lines.
pub fn break_into_lines(
    items: &[FlexChild],
    available_main: f32,
    main_gap: f32,
    wrap: bool,
) -> Vec<FlexLine> {
    let gap = if main_gap.is_nan() {
        0.0
    } else {
        main_gap.max(0.0)
    };
    let mut lines: Vec<FlexLine> = Vec::new();
    let mut line = FlexLine::default();
    for (index, item) in items.iter().enumerate() {
        let outer = item.hypothetical_outer_size();
        let is_first_in_line = index == line.start;
        let gap_before = if is_first_in_line { 0.0 } else { gap };
        if wrap && !is_first_in_line && line.size_consumed + gap_before + outer > available_main {
            line.end = index;
            lines.push(line);
            line = FlexLine {
                start: index,
                ..FlexLine::default()
            };
            line.size_consumed = outer;
        } else {
            line.size_consumed += gap_before + outer;
        }
        line.total_flex_grow += item.flex_grow;
    }
    line.end = items.len();
    if line.end > line.start {
        lines.push(line);
    }
    debug!(
        target: "css::flexbox::lines",
        "[FLEX-LINES] items={} available_main={available_main:.3} gap={gap:.3} wrap={wrap} lines={}",
        items.len(),
        lines.len()
    );
    lines
}

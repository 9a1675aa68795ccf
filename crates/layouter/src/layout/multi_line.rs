//! Align-content packing of flex lines and baseline alignment.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-align>
//!
//! ## Placement within a line
//!
//! ```text
//! flex-start → lead + leading margin
//! flex-end   → lead + line height - trailing margin - size
//! center     → lead + leading margin + (line height - outer size) / 2
//! stretch    → lead + leading margin, laid out again at the line height
//! baseline   → lead + line ascent - item baseline
//! ```
//!
//! Relative offsets of the items are kept on top of the placement.

use css_box::Edge;
use css_flexbox::{
    Align, Display, FlexDirection, FlexLine, LineBaseline, PositionType, align_content_params,
};
use css_sizing::MeasureMode;
use css_values_units::floats_equal;
use indextree::NodeId;
use log::{debug, warn};

use super::LayoutInput;
use super::container::FlexContainer;
use crate::style::Style;
use crate::tree::LayoutTree;

impl LayoutTree {
    /// True when items of this container align on their baselines: a row
    /// container whose items, or any in-flow child, ask for it.
    pub(super) fn is_baseline_layout(&self, style: &Style, children: &[NodeId]) -> bool {
        if style.flex_direction.is_column() {
            return false;
        }
        if style.align_items == Align::Baseline {
            return true;
        }
        children.iter().any(|child| {
            let child_style = &self.node(*child).style;
            child_style.position_type == PositionType::Relative
                && child_style.display != Display::None
                && child_style.align_self == Align::Baseline
        })
    }

    /// Distance from the top of `id`'s border box to its first baseline.
    ///
    /// A baseline function wins. Otherwise the baseline comes from the first
    /// line's reference child: the first one aligned on baselines or marked
    /// as reference, else the first child. Without children it is the
    /// bottom edge.
    pub(crate) fn baseline(&mut self, id: NodeId) -> f32 {
        let size = self.node(id).layout.measured;
        if let Some(callback) = self.node_mut(id).baseline.as_mut() {
            let baseline = callback.baseline(size.width, size.height);
            if baseline.is_nan() {
                warn!(target: "layouter::baseline", "[BASELINE] {id:?} returned NaN, using its height");
                return size.height;
            }
            return baseline;
        }

        let Some(reference) = self.reference_baseline_child(id) else {
            return size.height;
        };
        self.baseline(reference) + self.node(reference).layout.position.top
    }

    fn reference_baseline_child(&self, id: NodeId) -> Option<NodeId> {
        let style = &self.node(id).style;
        let mut first = None;
        for child in id.children(&self.arena) {
            let node = self.node(child);
            if node.style.position_type == PositionType::Absolute || node.style.display == Display::None {
                continue;
            }
            if node.layout.line_index > 0 {
                break;
            }
            if style.align_item(&node.style) == Align::Baseline || node.is_reference_baseline {
                return Some(child);
            }
            first = first.or(Some(child));
        }
        first
    }

    /// Distribute the container's free cross space over its lines and place
    /// every item within its line.
    pub(super) fn align_lines(
        &mut self,
        container: &FlexContainer,
        lines: &[FlexLine],
        items: &[NodeId],
        total_line_cross: f32,
    ) {
        let remaining = if container.available_inner_cross.is_nan() {
            0.0
        } else {
            container.available_inner_cross - total_line_cross
        };
        let spacing = align_content_params(container.style.align_content, remaining, lines.len());
        debug!(
            target: "layouter::flex",
            "[FLEX-ALIGN-CONTENT] {:?} lines={} remaining={remaining} leading={} extra={} between={}",
            container.node,
            lines.len(),
            spacing.leading,
            spacing.line_extra,
            spacing.between
        );

        let mut current_lead = container.leading_pb_cross + spacing.leading;
        let last = lines.len().saturating_sub(1);
        for (index, line) in lines.iter().enumerate() {
            let line_items = items.get(line.start..line.end).unwrap_or_default();
            let (height, line_baseline) = self.line_height(container, line_items);
            let height = height + spacing.line_extra;
            for child in line_items {
                self.place_in_line(container, *child, current_lead, height, line_baseline);
            }
            current_lead += height;
            if index < last {
                current_lead += spacing.between + container.cross_gap;
            }
        }
    }

    /// Cross size of a line and the baseline shared by its baseline-aligned
    /// items.
    fn line_height(&mut self, container: &FlexContainer, line_items: &[NodeId]) -> (f32, LineBaseline) {
        let cross = container.axes.cross;
        let inner_width = container.available_inner.width;
        let mut height: f32 = 0.0;
        let mut line_baseline = LineBaseline::default();
        for child in line_items.iter().copied() {
            let node = self.node(child);
            if container.style.align_item(&node.style) == Align::Baseline {
                let leading_margin = node.style.leading_margin(FlexDirection::Column, inner_width);
                let outer = self.dimension_with_margin(child, FlexDirection::Column, inner_width);
                let ascent = self.baseline(child) + leading_margin;
                line_baseline.add(ascent, outer);
            } else if node.layout.measured.get(cross.dimension()) >= 0.0 {
                height = height.max(self.dimension_with_margin(child, cross, inner_width));
            }
        }
        (height.max(line_baseline.height()), line_baseline)
    }

    /// Relative offset of `child` along `axis`, resolved against the
    /// container's inner size.
    fn relative_offset(&self, container: &FlexContainer, child: NodeId, axis: FlexDirection) -> f32 {
        let inner = container.available_inner;
        let axis_size = if axis.is_row() { inner.width } else { inner.height };
        self.node(child).style.relative_position(axis, axis_size)
    }

    fn place_in_line(
        &mut self,
        container: &FlexContainer,
        child: NodeId,
        lead: f32,
        line_height: f32,
        line_baseline: LineBaseline,
    ) {
        let cross = container.axes.cross;
        let dimension = cross.dimension();
        let inner_width = container.available_inner.width;
        let node = self.node(child);
        let style = &node.style;
        let size = node.layout.measured.get(dimension);
        let leading_margin = style.leading_margin(cross, inner_width);
        let trailing_margin = style.trailing_margin(cross, inner_width);
        let cross_defined = style.is_dimension_defined(cross, container.available_inner_cross);
        let align = container.style.align_item(style);
        let relative = self.relative_offset(container, child, cross);

        match align {
            Align::FlexEnd => {
                let position = lead + line_height - trailing_margin - size + relative;
                self.set_position_on(child, cross.leading_edge(), position);
            }
            Align::Center => {
                let outer = size + leading_margin + trailing_margin;
                let position = lead + leading_margin + (line_height - outer) / 2.0 + relative;
                self.set_position_on(child, cross.leading_edge(), position);
            }
            Align::Stretch => {
                self.set_position_on(child, cross.leading_edge(), lead + leading_margin + relative);
                if !cross_defined {
                    self.stretch_to_line(container, child, line_height);
                }
            }
            Align::Baseline => {
                let vertical_offset = self.relative_offset(container, child, FlexDirection::Column);
                let top = lead + line_baseline.offset_for(self.baseline(child)) + vertical_offset;
                self.set_position_on(child, Edge::Top, top);
            }
            Align::Auto | Align::FlexStart | Align::SpaceBetween | Align::SpaceAround => {
                self.set_position_on(child, cross.leading_edge(), lead + leading_margin + relative);
            }
        }
    }

    /// Lay a stretched item out again when the line ended up taller than the
    /// item's own cross size.
    fn stretch_to_line(&mut self, container: &FlexContainer, child: NodeId, line_height: f32) {
        let main = container.axes.main;
        let cross = container.axes.cross;
        let inner_width = container.available_inner.width;
        let node = self.node(child);
        let measured = node.layout.measured;
        let outer_main = measured.get(main.dimension()) + node.style.margin_for_axis(main, inner_width);
        let outer_cross = measured.get(cross.dimension()) + node.style.margin_for_axis(cross, inner_width);
        if floats_equal(outer_cross, line_height) {
            return;
        }
        let available = container.size(outer_main, line_height);
        self.layout_node_internal(
            child,
            LayoutInput {
                available,
                width_mode: MeasureMode::Exactly,
                height_mode: MeasureMode::Exactly,
                owner: container.available_inner,
                parent_direction: container.direction,
                perform_layout: true,
                reason: "multiline-stretch",
            },
        );
    }
}

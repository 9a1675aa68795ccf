//! Flex container driver: resolves the container's inner box, runs the line
//! passes and computes the container's final size.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! ## Steps
//!
//! ```text
//! 1-2. inner sizes, padding, border, gaps        FlexContainer::new
//! 3.   flex base sizes                           flex_basis.rs
//! 4.   collect items into lines                  css_flexbox::break_into_lines
//! 5-7. flex, justify and align each line         lines.rs
//! 8.   align-content and baselines               multi_line.rs
//! 9.   final container size                      finish_container_size
//! 10.  absolutely positioned children            absolute.rs
//! 11.  reversed axes measure from the far edge   set_trailing_positions
//! ```

use css_flexbox::{
    Axes, Direction, Display, FlexChild, FlexDirection, FlexWrap, ItemRef, ItemStyle, Overflow,
    PositionType, break_into_lines, collect_flex_items, resolve_axes, resolve_flex_grow,
};
use css_sizing::{MeasureMode, Size};
use indextree::NodeId;
use log::debug;
use smallvec::SmallVec;

use super::LayoutInput;
use crate::style::Style;
use crate::tree::LayoutTree;

/// Everything a flex container resolves once before laying out its lines.
///
/// Sizes are inner sizes (inside padding and border) unless named otherwise.
#[derive(Clone, Debug)]
pub(super) struct FlexContainer {
    pub node: NodeId,
    pub style: Style,
    pub direction: Direction,
    pub axes: Axes,
    pub wrap: bool,
    pub perform_layout: bool,
    /// Outer size requested by the parent.
    pub available: Size,
    pub owner: Size,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
    /// Main-axis mode; tightened to exact when wrapping items overflow.
    pub main_mode: MeasureMode,
    pub cross_mode: MeasureMode,
    pub main_owner: f32,
    pub cross_owner: f32,
    pub leading_pb_main: f32,
    pub trailing_pb_main: f32,
    pub leading_pb_cross: f32,
    pub pb_main: f32,
    pub pb_cross: f32,
    pub min_inner_main: f32,
    pub max_inner_main: f32,
    pub available_inner: Size,
    /// Replaced per line when the main size comes from the content.
    pub available_inner_main: f32,
    pub available_inner_cross: f32,
    pub main_gap: f32,
    pub cross_gap: f32,
    pub flex_basis_overflows: bool,
    /// The container's own resolved flex-grow; zero for the root.
    pub grow: f32,
}

impl FlexContainer {
    fn new(tree: &LayoutTree, id: NodeId, style: Style, direction: Direction, input: &LayoutInput) -> Self {
        let axes = resolve_axes(style.flex_direction, direction);
        let main_is_row = axes.main.is_row();
        let owner = input.owner;
        let (main_owner, cross_owner) = if main_is_row {
            (owner.width, owner.height)
        } else {
            (owner.height, owner.width)
        };
        let (main_mode, cross_mode) = if main_is_row {
            (input.width_mode, input.height_mode)
        } else {
            (input.height_mode, input.width_mode)
        };

        let pb_main = style.padding_and_border_for_axis(axes.main, owner.width);
        let pb_cross = style.padding_and_border_for_axis(axes.cross, owner.width);
        let main_dimension = axes.main.dimension();
        let min_inner_main = style.min_dimension(main_dimension).resolve(main_owner) - pb_main;
        let max_inner_main = style.max_dimension(main_dimension).resolve(main_owner) - pb_main;

        let available_inner = Size::new(
            inner_size(&style, FlexDirection::Row, input.available.width, owner.width, owner.width),
            inner_size(&style, FlexDirection::Column, input.available.height, owner.height, owner.width),
        );
        let (available_inner_main, available_inner_cross) = if main_is_row {
            (available_inner.width, available_inner.height)
        } else {
            (available_inner.height, available_inner.width)
        };
        let (main_gap, cross_gap) = if main_is_row {
            (style.column_gap, style.row_gap)
        } else {
            (style.row_gap, style.column_gap)
        };
        let grow = resolve_flex_grow(style.flex, style.flex_grow, id.parent(&tree.arena).is_none());

        Self {
            node: id,
            direction,
            axes,
            wrap: style.flex_wrap.is_wrapping(),
            perform_layout: input.perform_layout,
            available: input.available,
            owner,
            width_mode: input.width_mode,
            height_mode: input.height_mode,
            main_mode,
            cross_mode,
            main_owner,
            cross_owner,
            leading_pb_main: style.leading_padding_and_border(axes.main, owner.width),
            trailing_pb_main: style.trailing_padding_and_border(axes.main, owner.width),
            leading_pb_cross: style.leading_padding_and_border(axes.cross, owner.width),
            pb_main,
            pb_cross,
            min_inner_main,
            max_inner_main,
            available_inner,
            available_inner_main,
            available_inner_cross,
            // f32::max drops NaN: unresolvable gaps are zero.
            main_gap: main_gap.resolve(available_inner_main).max(0.0),
            cross_gap: cross_gap.resolve(available_inner_cross).max(0.0),
            flex_basis_overflows: false,
            grow,
            style,
        }
    }

    pub const fn main_is_row(&self) -> bool {
        self.axes.main.is_row()
    }

    /// Width and height from main and cross sizes.
    pub const fn size(&self, main: f32, cross: f32) -> Size {
        if self.main_is_row() {
            Size::new(main, cross)
        } else {
            Size::new(cross, main)
        }
    }

    /// Width and height modes from main and cross modes.
    pub const fn modes(&self, main: MeasureMode, cross: MeasureMode) -> (MeasureMode, MeasureMode) {
        if self.main_is_row() {
            (main, cross)
        } else {
            (cross, main)
        }
    }
}

/// Available size inside margins, padding and border, kept within the
/// node's inner min and max sizes.
fn inner_size(style: &Style, axis: FlexDirection, available: f32, owner_size: f32, owner_width: f32) -> f32 {
    let dimension = axis.dimension();
    let padding_and_border = style.padding_and_border_for_axis(axis, owner_width);
    let inner = available - style.margin_for_axis(axis, owner_width) - padding_and_border;
    if inner.is_nan() {
        return inner;
    }
    let min = style.min_dimension(dimension).resolve(owner_size) - padding_and_border;
    let max = style.max_dimension(dimension).resolve(owner_size) - padding_and_border;
    inner.min(max).max(min)
}

/// Stacked cross size of the lines laid out so far, and the longest line.
#[derive(Copy, Clone, Debug, Default)]
struct LineTotals {
    cross: f32,
    max_main: f32,
}

impl LayoutTree {
    pub(super) fn layout_flex_container(
        &mut self,
        id: NodeId,
        style: Style,
        direction: Direction,
        children: Vec<NodeId>,
        input: &LayoutInput,
    ) {
        let mut container = FlexContainer::new(self, id, style, direction, input);
        debug!(
            target: "layouter::flex",
            "[FLEX-START] {id:?} {} main={} inner={}x{} modes={}/{} children={}",
            input.reason,
            container.axes.main.label(),
            container.available_inner.width,
            container.available_inner.height,
            container.main_mode.label(),
            container.cross_mode.label(),
            children.len()
        );

        let total_outer_basis = self.compute_flex_bases(&container, &children);
        container.flex_basis_overflows = container.main_mode != MeasureMode::Undefined
            && total_outer_basis > container.available_inner_main;
        if container.wrap && container.flex_basis_overflows && container.main_mode == MeasureMode::AtMost {
            container.main_mode = MeasureMode::Exactly;
        }

        let items = self.in_flow_items(&children);
        let flex_children: Vec<FlexChild> = items
            .iter()
            .enumerate()
            .map(|(index, item)| self.flex_child(&container, index, *item))
            .collect();
        let lines = break_into_lines(
            &flex_children,
            container.available_inner_main,
            container.main_gap,
            container.wrap,
        );
        for (line_index, line) in lines.iter().enumerate() {
            for item in items.get(line.start..line.end).unwrap_or_default() {
                self.node_mut(*item).layout.line_index = line_index;
            }
        }

        let mut totals = LineTotals::default();
        for (line_index, line) in lines.iter().enumerate() {
            if line_index > 0 {
                totals.cross += container.cross_gap;
            }
            let metrics = self.layout_line(&mut container, line, &items, &flex_children, totals.cross);
            totals.cross += metrics.cross;
            totals.max_main = totals.max_main.max(metrics.main);
        }

        let cross_defined = !container.available_inner_cross.is_nan();
        if container.perform_layout
            && ((lines.len() > 1 && cross_defined) || self.is_baseline_layout(&container.style, &children))
        {
            self.align_lines(&container, &lines, &items, totals.cross);
        }

        self.finish_container_size(&container, totals);

        if container.perform_layout {
            if container.style.flex_wrap == FlexWrap::WrapReverse {
                self.flip_wrap_reverse(&container, &children);
            }
            for child in &children {
                let child_style = &self.node(*child).style;
                if child_style.position_type == PositionType::Absolute
                    && child_style.display != Display::None
                {
                    self.layout_absolute_child(&container, *child);
                }
            }
            self.set_trailing_positions(&container, &children);
        }

        let measured = self.node(id).layout.measured;
        debug!(
            target: "layouter::flex",
            "[FLEX-END] {id:?} lines={} measured={}x{}",
            lines.len(),
            measured.width,
            measured.height
        );
    }

    /// Children that take part in flex layout, in order.
    fn in_flow_items(&self, children: &[NodeId]) -> Vec<NodeId> {
        let styles: SmallVec<ItemStyle, 8> = children
            .iter()
            .map(|child| {
                let style = &self.node(*child).style;
                ItemStyle {
                    is_none: style.display == Display::None,
                    out_of_flow: style.position_type == PositionType::Absolute,
                }
            })
            .collect();
        collect_flex_items(&styles)
            .into_iter()
            .filter_map(|ItemRef(index)| children.get(index).copied())
            .collect()
    }

    /// Main-axis sizing inputs of one item, after its flex basis is known.
    fn flex_child(&self, container: &FlexContainer, index: usize, child: NodeId) -> FlexChild {
        let node = self.node(child);
        let style = &node.style;
        let factors = self.flex_factors(child);
        let main = container.axes.main;
        let dimension = main.dimension();
        let inner_width = container.available_inner.width;
        FlexChild {
            handle: ItemRef(index),
            flex_basis: node.layout.computed_flex_basis,
            flex_grow: factors.grow,
            flex_shrink: factors.shrink,
            min_main: style.min_dimension(dimension).resolve(container.available_inner_main),
            max_main: style.max_dimension(dimension).resolve(container.available_inner_main),
            padding_border_main: style.padding_and_border_for_axis(main, inner_width),
            margin_main: style.margin_for_axis(main, inner_width),
        }
    }

    /// Size the container from the request, or from its lines when the
    /// request leaves a dimension to the content.
    fn finish_container_size(&mut self, container: &FlexContainer, totals: LineTotals) {
        let style = &container.style;
        let owner = container.owner;
        let mut measured = Size::new(
            style.bound_axis(
                FlexDirection::Row,
                container.available.width - style.margin_for_axis(FlexDirection::Row, owner.width),
                owner.width,
                owner.width,
            ),
            style.bound_axis(
                FlexDirection::Column,
                container.available.height - style.margin_for_axis(FlexDirection::Column, owner.width),
                owner.height,
                owner.width,
            ),
        );

        let scroll = style.overflow == Overflow::Scroll;
        let content_sized = |mode: MeasureMode| {
            mode == MeasureMode::Undefined || (!scroll && mode == MeasureMode::AtMost)
        };
        let main = container.axes.main;
        let cross = container.axes.cross;

        if content_sized(container.main_mode) {
            measured.set(
                main.dimension(),
                style.bound_axis(main, totals.max_main, container.main_owner, owner.width),
            );
        } else if container.main_mode == MeasureMode::AtMost {
            let content = style.bound_within_min_max(main, totals.max_main, container.main_owner);
            measured.set(
                main.dimension(),
                (container.available_inner_main + container.pb_main)
                    .min(content)
                    .max(container.pb_main),
            );
        }

        let content_cross = totals.cross + container.pb_cross;
        if content_sized(container.cross_mode) {
            measured.set(
                cross.dimension(),
                style.bound_axis(cross, content_cross, container.cross_owner, owner.width),
            );
        } else if container.cross_mode == MeasureMode::AtMost {
            let content = style.bound_within_min_max(cross, content_cross, container.cross_owner);
            measured.set(
                cross.dimension(),
                (container.available_inner_cross + container.pb_cross)
                    .min(content)
                    .max(container.pb_cross),
            );
        }

        self.node_mut(container.node).layout.measured = measured;
    }

    /// Lines were stacked from the cross start; mirror them for wrap-reverse.
    fn flip_wrap_reverse(&mut self, container: &FlexContainer, children: &[NodeId]) {
        let cross = container.axes.cross;
        let dimension = cross.dimension();
        let edge = cross.leading_edge();
        let container_cross = self.node(container.node).layout.measured.get(dimension);
        for child in children {
            let node = self.node(*child);
            if node.style.position_type != PositionType::Relative
                || node.style.display == Display::None
            {
                continue;
            }
            let flipped = container_cross - self.position_on(*child, edge) - node.layout.measured.get(dimension);
            self.set_position_on(*child, edge, flipped);
        }
    }

    /// Children of reversed axes were positioned from the axis' leading
    /// edge; derive the offset from the opposite edge as well.
    fn set_trailing_positions(&mut self, container: &FlexContainer, children: &[NodeId]) {
        let reversed: SmallVec<FlexDirection, 2> = [container.axes.main, container.axes.cross]
            .into_iter()
            .filter(|axis| axis.is_reverse())
            .collect();
        if reversed.is_empty() {
            return;
        }
        let container_size = self.node(container.node).layout.measured;
        for child in children {
            if self.node(*child).style.display == Display::None {
                continue;
            }
            for axis in &reversed {
                let dimension = axis.dimension();
                let size = self.node(*child).layout.measured.get(dimension);
                let trailing = container_size.get(dimension) - size - self.position_on(*child, axis.leading_edge());
                self.set_position_on(*child, axis.trailing_edge(), trailing);
            }
        }
    }
}

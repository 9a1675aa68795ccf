//! One flex line: resolve flexible lengths, lay the items out at their
//! final main size, justify them and align them in the line's cross axis.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use std::iter;

use css_flexbox::{
    Align, FlexChild, FlexDirection, FlexLine, JustifySpacing, LineBaseline, auto_margin_share,
    cross_offset_in_line, justify_params, resolve_flexible_lengths,
};
use css_sizing::{Dimension, MeasureMode, constrain_max_size_for_mode};
use css_values_units::Value;
use indextree::NodeId;
use log::trace;

use super::LayoutInput;
use super::container::FlexContainer;
use crate::tree::LayoutTree;

/// Main size of a line including the container's padding and border, and
/// the line's cross size.
#[derive(Copy, Clone, Debug, Default)]
pub(super) struct LineMetrics {
    pub main: f32,
    pub cross: f32,
}

/// Mode for a child dimension that the child's own style leaves open.
const fn open_mode(size: f32) -> MeasureMode {
    if size.is_nan() {
        MeasureMode::Undefined
    } else {
        MeasureMode::AtMost
    }
}

impl LayoutTree {
    /// Lay out one line starting `line_offset` below the first line's
    /// cross-start edge.
    pub(super) fn layout_line(
        &mut self,
        container: &mut FlexContainer,
        line: &FlexLine,
        items: &[NodeId],
        flex_children: &[FlexChild],
        line_offset: f32,
    ) -> LineMetrics {
        let line_items = items.get(line.start..line.end).unwrap_or_default();
        let line_children = flex_children.get(line.start..line.end).unwrap_or_default();

        let mut remaining = self.line_free_space(container, line);
        let can_skip_flex = !container.perform_layout && container.cross_mode == MeasureMode::Exactly;
        if !can_skip_flex {
            let resolution = resolve_flexible_lengths(line_children, remaining);
            trace!(
                target: "layouter::flex",
                "[FLEX-LINE] {:?} items={} free={remaining} → remaining={} iterations={}",
                container.node,
                line_items.len(),
                resolution.remaining_free_space,
                resolution.iterations
            );
            for (child, size) in line_items.iter().zip(resolution.sizes.iter()) {
                self.layout_flex_item(container, *child, *size);
            }
            remaining = resolution.remaining_free_space;
        }
        if remaining < 0.0 {
            self.node_mut(container.node).layout.had_overflow = true;
        }

        let baseline_layout = self.is_baseline_layout(&container.style, line_items);
        let mut metrics = self.justify_line(container, line_items, remaining, can_skip_flex, baseline_layout);

        let cross = container.axes.cross;
        let style = &container.style;
        let container_cross = if matches!(container.cross_mode, MeasureMode::Undefined | MeasureMode::AtMost) {
            style.bound_axis(
                cross,
                metrics.cross + container.pb_cross,
                container.cross_owner,
                container.owner.width,
            ) - container.pb_cross
        } else {
            container.available_inner_cross
        };
        if !container.wrap && container.cross_mode == MeasureMode::Exactly {
            metrics.cross = container.available_inner_cross;
        }
        metrics.cross = style.bound_axis(
            cross,
            metrics.cross + container.pb_cross,
            container.cross_owner,
            container.owner.width,
        ) - container.pb_cross;

        if container.perform_layout {
            for child in line_items {
                self.align_item_in_line(container, *child, container_cross, metrics.cross, line_offset);
            }
        }
        metrics
    }

    /// Free main space of a line. When the container sizes to its content
    /// the available main size shrinks to what the line consumes.
    fn line_free_space(&self, container: &mut FlexContainer, line: &FlexLine) -> f32 {
        let consumed = line.size_consumed;
        let mut sized_by_content = false;
        if container.main_mode != MeasureMode::Exactly {
            if !container.min_inner_main.is_nan() && consumed < container.min_inner_main {
                container.available_inner_main = container.min_inner_main;
            } else if !container.max_inner_main.is_nan() && consumed > container.max_inner_main {
                container.available_inner_main = container.max_inner_main;
            } else {
                let legacy = self.config.use_legacy_stretch_behaviour;
                if !legacy && (line.total_flex_grow == 0.0 || container.grow == 0.0) {
                    container.available_inner_main = consumed;
                }
                sized_by_content = !legacy;
            }
        }
        if !sized_by_content && !container.available_inner_main.is_nan() {
            container.available_inner_main - consumed
        } else if consumed < 0.0 {
            -consumed
        } else {
            0.0
        }
    }

    /// Lay out an item at its resolved main size.
    fn layout_flex_item(&mut self, container: &FlexContainer, child: NodeId, main_size: f32) {
        let main = container.axes.main;
        let cross = container.axes.cross;
        let inner = container.available_inner;
        let inner_cross = container.available_inner_cross;
        let node = self.node(child);
        let style = &node.style;
        let margin_main = style.margin_for_axis(main, inner.width);
        let margin_cross = style.margin_for_axis(cross, inner.width);
        let cross_defined = style.is_dimension_defined(cross, inner_cross);
        let auto_cross_margin = style.is_leading_margin_auto(cross) || style.is_trailing_margin_auto(cross);
        let stretches = container.style.align_item(style) == Align::Stretch && !auto_cross_margin;

        let main_size = main_size + margin_main;
        let (cross_mode, cross_size) = if let Some(ratio) = style.aspect_ratio {
            let content = main_size - margin_main;
            let size = if container.main_is_row() {
                content / ratio
            } else {
                content * ratio
            };
            (MeasureMode::Exactly, size + margin_cross)
        } else if !inner_cross.is_nan()
            && !cross_defined
            && container.cross_mode == MeasureMode::Exactly
            && !(container.wrap && container.flex_basis_overflows)
            && stretches
        {
            (MeasureMode::Exactly, inner_cross)
        } else if !cross_defined {
            (open_mode(inner_cross), inner_cross)
        } else {
            let declared = style.resolved_dimension(cross.dimension());
            let size = declared.resolve(inner_cross) + margin_cross;
            let loose_percent =
                matches!(declared, Value::Percent(_)) && container.cross_mode != MeasureMode::Exactly;
            let mode = if size.is_nan() || loose_percent {
                MeasureMode::Undefined
            } else {
                MeasureMode::Exactly
            };
            (mode, size)
        };

        let max_main = style.max_dimension(main.dimension()).resolve(container.available_inner_main) + margin_main;
        let max_cross = style.max_dimension(cross.dimension()).resolve(inner_cross) + margin_cross;
        let (main_mode, main_size) = constrain_max_size_for_mode(MeasureMode::Exactly, main_size, max_main);
        let (cross_mode, cross_size) = constrain_max_size_for_mode(cross_mode, cross_size, max_cross);
        let requires_stretch_layout = !cross_defined && stretches;

        let (width_mode, height_mode) = container.modes(main_mode, cross_mode);
        self.layout_node_internal(
            child,
            LayoutInput {
                available: container.size(main_size, cross_size),
                width_mode,
                height_mode,
                owner: inner,
                parent_direction: container.direction,
                perform_layout: container.perform_layout && !requires_stretch_layout,
                reason: "flex",
            },
        );
        if self.node(child).layout.had_overflow {
            self.node_mut(container.node).layout.had_overflow = true;
        }
    }

    /// Distribute the line's free space along the main axis and measure the
    /// line. On full layouts the items' main offsets are set as well.
    fn justify_line(
        &mut self,
        container: &FlexContainer,
        line_items: &[NodeId],
        remaining: f32,
        can_skip_flex: bool,
        baseline_layout: bool,
    ) -> LineMetrics {
        let main = container.axes.main;
        let cross = container.axes.cross;
        let inner_width = container.available_inner.width;

        let mut remaining = remaining;
        if container.main_mode == MeasureMode::AtMost && remaining > 0.0 {
            let min_main = container
                .style
                .min_dimension(main.dimension())
                .resolve(container.main_owner);
            remaining = if min_main >= 0.0 {
                let occupied = container.available_inner_main - remaining;
                (min_main - container.pb_main - occupied).max(0.0)
            } else {
                0.0
            };
        }

        let auto_margins: usize = line_items
            .iter()
            .map(|child| {
                let style = &self.node(*child).style;
                usize::from(style.is_leading_margin_auto(main)) + usize::from(style.is_trailing_margin_auto(main))
            })
            .sum();
        let spacing = if auto_margins == 0 {
            justify_params(container.style.justify_content, remaining, line_items.len())
        } else {
            JustifySpacing::default()
        };
        let (first_share, rest_share) = auto_margin_share(remaining, auto_margins);
        let mut shares = iter::once(first_share).chain(iter::repeat(rest_share));

        let mut main_dim = container.leading_pb_main + spacing.leading;
        let mut cross_dim: f32 = 0.0;
        let mut line_baseline = LineBaseline::default();
        let last = line_items.len().saturating_sub(1);
        for (index, child) in line_items.iter().copied().enumerate() {
            let style = &self.node(child).style;
            let trailing_auto = style.is_trailing_margin_auto(main);
            if style.is_leading_margin_auto(main) {
                main_dim += shares.next().unwrap_or(0.0);
            }
            if container.perform_layout {
                let edge = main.leading_edge();
                let position = self.position_on(child, edge);
                self.set_position_on(child, edge, position + main_dim);
            }
            if trailing_auto {
                main_dim += shares.next().unwrap_or(0.0);
            }
            if index < last {
                main_dim += spacing.between_after(index) + container.main_gap;
            }

            if can_skip_flex {
                let node = self.node(child);
                main_dim += node.style.margin_for_axis(main, inner_width) + node.layout.computed_flex_basis;
                cross_dim = container.available_inner_cross;
            } else {
                main_dim += self.dimension_with_margin(child, main, inner_width);
                if baseline_layout {
                    let ascent = self.baseline(child)
                        + self.node(child).style.leading_margin(FlexDirection::Column, inner_width);
                    let outer = self.dimension_with_margin(child, FlexDirection::Column, inner_width);
                    line_baseline.add(ascent, outer);
                } else {
                    cross_dim = cross_dim.max(self.dimension_with_margin(child, cross, inner_width));
                }
            }
        }
        main_dim += container.trailing_pb_main;
        if baseline_layout {
            cross_dim = line_baseline.height();
        }
        LineMetrics {
            main: main_dim,
            cross: cross_dim,
        }
    }

    /// Place an item along the cross axis of its line, stretching it when
    /// it has no cross size of its own.
    fn align_item_in_line(
        &mut self,
        container: &FlexContainer,
        child: NodeId,
        container_cross: f32,
        line_cross: f32,
        line_offset: f32,
    ) {
        let cross = container.axes.cross;
        let inner_width = container.available_inner.width;
        let style = &self.node(child).style;
        let align = container.style.align_item(style);
        let leading_auto = style.is_leading_margin_auto(cross);
        let trailing_auto = style.is_trailing_margin_auto(cross);

        let offset = if align == Align::Stretch && !leading_auto && !trailing_auto {
            if !style.is_dimension_defined(cross, container.available_inner_cross) {
                self.stretch_item(container, child, line_cross);
            }
            0.0
        } else {
            let free = container_cross - self.dimension_with_margin(child, cross, inner_width);
            cross_offset_in_line(align, free, leading_auto, trailing_auto)
        };

        let edge = cross.leading_edge();
        let position = self.position_on(child, edge);
        self.set_position_on(child, edge, position + line_offset + container.leading_pb_cross + offset);
    }

    /// Lay an item out again with its cross size set to the line's.
    fn stretch_item(&mut self, container: &FlexContainer, child: NodeId, line_cross: f32) {
        let main = container.axes.main;
        let cross = container.axes.cross;
        let inner_width = container.available_inner.width;
        let node = self.node(child);
        let style = &node.style;
        let measured_main = node.layout.measured.get(main.dimension());
        let margin_main = style.margin_for_axis(main, inner_width);
        let margin_cross = style.margin_for_axis(cross, inner_width);

        let cross_size = style.aspect_ratio.map_or(line_cross, |ratio| {
            margin_cross
                + if container.main_is_row() {
                    measured_main / ratio
                } else {
                    measured_main * ratio
                }
        });
        let max_main = style.max_dimension(main.dimension()).resolve(container.available_inner_main) + margin_main;
        let max_cross =
            style.max_dimension(cross.dimension()).resolve(container.available_inner_cross) + margin_cross;
        let (_, main_size) = constrain_max_size_for_mode(MeasureMode::Exactly, measured_main + margin_main, max_main);
        let (_, cross_size) = constrain_max_size_for_mode(MeasureMode::Exactly, cross_size, max_cross);

        let available = container.size(main_size, cross_size);
        let cross_does_not_grow = container.style.align_content != Align::Stretch && container.wrap;
        let mode_for = |size: f32, dimension: Dimension| {
            let grows_freely = cross_does_not_grow && cross.dimension() == dimension;
            if size.is_nan() || grows_freely {
                MeasureMode::Undefined
            } else {
                MeasureMode::Exactly
            }
        };
        trace!(target: "layouter::flex", "[FLEX-STRETCH] {child:?} cross={cross_size}");
        self.layout_node_internal(
            child,
            LayoutInput {
                available,
                width_mode: mode_for(available.width, Dimension::Width),
                height_mode: mode_for(available.height, Dimension::Height),
                owner: container.available_inner,
                parent_direction: container.direction,
                perform_layout: true,
                reason: "stretch",
            },
        );
    }
}

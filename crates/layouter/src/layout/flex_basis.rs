//! Flex base sizes of a container's children.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-main-item>

use css_flexbox::{Align, Display, FlexDirection, Overflow, PositionType, resolve_flex_basis};
use css_sizing::{Dimension, MeasureMode, Size, constrain_max_size_for_mode};
use css_values_units::floats_equal;
use indextree::NodeId;
use log::trace;

use super::LayoutInput;
use super::container::FlexContainer;
use crate::style::Style;
use crate::tree::LayoutTree;

/// A tentative size and how binding it is.
#[derive(Copy, Clone, Debug)]
struct Constraint {
    size: f32,
    mode: MeasureMode,
}

impl Constraint {
    const UNDEFINED: Self = Self {
        size: f32::NAN,
        mode: MeasureMode::Undefined,
    };

    const fn exactly(size: f32) -> Self {
        Self {
            size,
            mode: MeasureMode::Exactly,
        }
    }

    fn constrain_max(self, max_size: f32) -> Self {
        let (mode, size) = constrain_max_size_for_mode(self.mode, self.size, max_size);
        Self { size, mode }
    }
}

impl LayoutTree {
    /// The only flexible in-flow child of an exactly sized container, if it
    /// both grows and shrinks. Its basis is zero: it ends up filling exactly
    /// the space the others leave, so measuring it is wasted work.
    fn single_flex_child(&self, container: &FlexContainer, children: &[NodeId]) -> Option<NodeId> {
        if container.main_mode != MeasureMode::Exactly {
            return None;
        }
        let mut flexible = children.iter().copied().filter(|child| {
            let style = &self.node(*child).style;
            style.display != Display::None
                && style.position_type != PositionType::Absolute
                && self.flex_factors(*child).is_flexible()
        });
        let only = flexible.next()?;
        if flexible.next().is_some() {
            return None;
        }
        let factors = self.flex_factors(only);
        (factors.grow > 0.0 && factors.shrink > 0.0).then_some(only)
    }

    /// Compute the flex basis of every in-flow child and return the sum of
    /// the bases plus main-axis margins.
    ///
    /// Hidden children get a zero layout. On full layouts every displayed
    /// child also gets its initial position from margins and relative insets.
    pub(super) fn compute_flex_bases(&mut self, container: &FlexContainer, children: &[NodeId]) -> f32 {
        let single = self.single_flex_child(container, children);
        let inner = container.available_inner;
        let mut total_outer_basis = 0.0;

        for child in children.iter().copied() {
            let style = self.node(child).style.clone();
            if style.display == Display::None {
                self.zero_out_layout(child);
                continue;
            }
            if container.perform_layout {
                self.set_position(child, container.direction, inner, inner.width);
            }
            if style.position_type == PositionType::Absolute {
                continue;
            }

            let basis = if Some(child) == single {
                trace!(target: "layouter::flex", "[FLEX-BASIS] {child:?} single flexible child, basis 0");
                0.0
            } else {
                self.compute_flex_basis_for_child(container, child, &style)
            };
            let generation = self.generation;
            let layout = &mut self.node_mut(child).layout;
            layout.computed_flex_basis = basis;
            layout.computed_flex_basis_generation = generation;
            layout.computed_flex_basis_owner = inner;

            total_outer_basis += basis + style.margin_for_axis(container.axes.main, inner.width);
        }
        total_outer_basis
    }

    fn compute_flex_basis_for_child(&mut self, container: &FlexContainer, child: NodeId, style: &Style) -> f32 {
        let main = container.axes.main;
        let inner = container.available_inner;
        let main_size = if container.main_is_row() {
            inner.width
        } else {
            inner.height
        };
        let resolved_basis =
            resolve_flex_basis(style.flex_basis, style.flex, self.config.use_web_defaults).resolve(main_size);
        let row_defined = style.is_dimension_defined(FlexDirection::Row, inner.width);
        let column_defined = style.is_dimension_defined(FlexDirection::Column, inner.height);

        let basis = if !resolved_basis.is_nan() && !main_size.is_nan() {
            let layout = &self.node(child).layout;
            let owner = layout.computed_flex_basis_owner;
            let stale = layout.computed_flex_basis.is_nan()
                || !floats_equal(owner.width, inner.width)
                || !floats_equal(owner.height, inner.height)
                || (self.config.experimental_web_flex_basis
                    && layout.computed_flex_basis_generation != self.generation);
            if stale {
                resolved_basis.max(style.padding_and_border_for_axis(main, inner.width))
            } else {
                layout.computed_flex_basis
            }
        } else if container.main_is_row() && row_defined {
            style
                .resolved_dimension(Dimension::Width)
                .resolve(inner.width)
                .max(style.padding_and_border_for_axis(FlexDirection::Row, inner.width))
        } else if !container.main_is_row() && column_defined {
            style
                .resolved_dimension(Dimension::Height)
                .resolve(inner.height)
                .max(style.padding_and_border_for_axis(FlexDirection::Column, inner.width))
        } else {
            self.measure_flex_basis(container, child, style, row_defined, column_defined)
        };
        trace!(target: "layouter::flex", "[FLEX-BASIS] {child:?} basis={basis}");
        basis
    }

    /// Flex basis of a child without a definite main size: lay it out for
    /// measurement only, under the tightest constraints that are known.
    fn measure_flex_basis(
        &mut self,
        container: &FlexContainer,
        child: NodeId,
        style: &Style,
        row_defined: bool,
        column_defined: bool,
    ) -> f32 {
        let inner = container.available_inner;
        let main_is_row = container.main_is_row();
        let margin_row = style.margin_for_axis(FlexDirection::Row, inner.width);
        let margin_column = style.margin_for_axis(FlexDirection::Column, inner.width);

        let mut width = if row_defined {
            Constraint::exactly(style.resolved_dimension(Dimension::Width).resolve(inner.width) + margin_row)
        } else {
            Constraint::UNDEFINED
        };
        let mut height = if column_defined {
            Constraint::exactly(
                style.resolved_dimension(Dimension::Height).resolve(inner.height) + margin_column,
            )
        } else {
            Constraint::UNDEFINED
        };

        // A scroll container only bounds its children along the cross axis.
        let scroll = container.style.overflow == Overflow::Scroll;
        if (!scroll || !main_is_row) && width.size.is_nan() && !inner.width.is_nan() {
            width = Constraint {
                size: inner.width,
                mode: MeasureMode::AtMost,
            };
        }
        if (!scroll || main_is_row) && height.size.is_nan() && !inner.height.is_nan() {
            height = Constraint {
                size: inner.height,
                mode: MeasureMode::AtMost,
            };
        }

        if let Some(ratio) = style.aspect_ratio {
            if !main_is_row && width.mode == MeasureMode::Exactly {
                height = Constraint::exactly(margin_column + (width.size - margin_row) / ratio);
            } else if main_is_row && height.mode == MeasureMode::Exactly {
                width = Constraint::exactly(margin_row + (height.size - margin_column) * ratio);
            }
        }

        let stretches = container.style.align_item(style) == Align::Stretch;
        let exact_width = !inner.width.is_nan() && container.width_mode == MeasureMode::Exactly;
        if !main_is_row && !row_defined && exact_width && stretches && width.mode != MeasureMode::Exactly {
            width = Constraint::exactly(inner.width);
            if let Some(ratio) = style.aspect_ratio {
                height = Constraint::exactly((width.size - margin_row) / ratio);
            }
        }
        let exact_height = !inner.height.is_nan() && container.height_mode == MeasureMode::Exactly;
        if main_is_row && !column_defined && exact_height && stretches && height.mode != MeasureMode::Exactly {
            height = Constraint::exactly(inner.height);
            if let Some(ratio) = style.aspect_ratio {
                width = Constraint::exactly((height.size - margin_column) * ratio);
            }
        }

        let width = width.constrain_max(style.max_width.resolve(inner.width) + margin_row);
        let height = height.constrain_max(style.max_height.resolve(inner.height) + margin_column);

        self.layout_node_internal(
            child,
            LayoutInput {
                available: Size::new(width.size, height.size),
                width_mode: width.mode,
                height_mode: height.mode,
                owner: inner,
                parent_direction: container.direction,
                perform_layout: false,
                reason: "measure",
            },
        );
        let main = container.axes.main;
        self.node(child)
            .layout
            .measured
            .get(main.dimension())
            .max(style.padding_and_border_for_axis(main, inner.width))
    }
}

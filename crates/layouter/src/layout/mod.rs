//! Recursive flex layout driver.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>
//!
//! ## Architecture
//!
//! Every node is laid out through [`LayoutTree::layout_node_internal`], which
//! answers from the node's cache when it can and otherwise dispatches on the
//! kind of node:
//!
//! ```text
//! measured leaf      → leaf::measure_leaf         (calls the Measure callback)
//! empty container    → leaf::size_empty_container
//! fixed-size shortcut→ leaf::size_fixed_container  (measurement passes only)
//! flex container     → container::layout_flex_container
//! ```
//!
//! A request either only measures the node (`perform_layout == false`) or also
//! positions its children. The pure line-breaking, flexing, justification and
//! alignment math lives in `css_flexbox`; this module feeds it the resolved
//! style of each child and recurses.

mod absolute;
mod container;
mod flex_basis;
mod leaf;
mod lines;
pub(crate) mod metrics;
mod multi_line;

use css_box::{Edge, Sides};
use css_flexbox::{Direction, FlexDirection};
use css_sizing::{MeasureMode, Size};
use css_values_units::undefined_if_none;
use indextree::NodeId;
use log::{debug, trace};
#[cfg(feature = "trace_spans")]
use tracing::debug_span;

use crate::cache::CacheRequest;
use crate::node::DirtyKind;
use crate::printing::PrintOptions;
use crate::rounding::rounded_equal;
use crate::style::Style;
use crate::tree::LayoutTree;
use crate::LayoutError;
use metrics::set_side;

/// One layout request for one node.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LayoutInput {
    /// Available outer size (margins included); NaN when unconstrained.
    pub available: Size,
    pub width_mode: MeasureMode,
    pub height_mode: MeasureMode,
    /// Size percentages resolve against: the parent's available inner size.
    pub owner: Size,
    pub parent_direction: Direction,
    /// Position children as well as sizing the node.
    pub perform_layout: bool,
    /// Short label for logs.
    pub reason: &'static str,
}

/// Available size and mode for the root along one axis.
fn root_constraint(
    style: &Style,
    axis: FlexDirection,
    owner_size: f32,
    owner_width: f32,
) -> (f32, MeasureMode) {
    let dimension = axis.dimension();
    if style.is_dimension_defined(axis, owner_size) {
        let size = style.resolved_dimension(dimension).resolve(owner_size)
            + style.margin_for_axis(axis, owner_width);
        return (size, MeasureMode::Exactly);
    }
    let max = style.max_dimension(dimension).resolve(owner_size);
    if max >= 0.0 {
        return (max, MeasureMode::AtMost);
    }
    if owner_size.is_nan() {
        (owner_size, MeasureMode::Undefined)
    } else {
        (owner_size, MeasureMode::Exactly)
    }
}

impl LayoutTree {
    /// Lay out the subtree rooted at `root` within the given available size.
    ///
    /// `None` leaves a dimension unconstrained. Results are cached on every
    /// node; laying out an unchanged tree again with the same inputs does no
    /// work and calls no measure functions.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn calculate_layout(
        &mut self,
        root: NodeId,
        available_width: Option<f32>,
        available_height: Option<f32>,
        direction: Direction,
    ) -> Result<(), LayoutError> {
        let style = self.checked(root)?.style.clone();
        #[cfg(feature = "trace_spans")]
        let _span = debug_span!("calculate_layout", ?root).entered();

        self.generation = self.generation.wrapping_add(1);
        let owner = Size::new(
            undefined_if_none(available_width),
            undefined_if_none(available_height),
        );
        let (width, width_mode) = root_constraint(&style, FlexDirection::Row, owner.width, owner.width);
        let (height, height_mode) =
            root_constraint(&style, FlexDirection::Column, owner.height, owner.width);
        debug!(
            target: "layouter::flex",
            "[FLEX-ROOT] {root:?} available={width}x{height} modes={}/{} generation={}",
            width_mode.label(),
            height_mode.label(),
            self.generation
        );

        self.node_mut(root).layout.owner_size = owner;
        let input = LayoutInput {
            available: Size::new(width, height),
            width_mode,
            height_mode,
            owner,
            parent_direction: direction,
            perform_layout: true,
            reason: "initial",
        };
        if self.layout_node_internal(root, input) {
            let resolved = self.node(root).layout.direction;
            self.set_position(root, resolved, owner, owner.width);
            self.round_to_pixel_grid(root);
            if self.config.print_tree {
                debug!(
                    target: "layouter::print",
                    "{}",
                    self.display_tree(root, PrintOptions::ALL)
                );
            }
        }
        Ok(())
    }

    /// Lay out `id` for `input`, reusing a cached result when one applies.
    ///
    /// Returns true when the node was actually visited or its result was not
    /// cached before.
    pub(crate) fn layout_node_internal(&mut self, id: NodeId, input: LayoutInput) -> bool {
        let generation = self.generation;
        let need_to_visit = {
            let node = self.node_mut(id);
            let visit = (node.dirty.is_dirty() && node.layout.generation != generation)
                || node.layout.last_parent_direction != Some(input.parent_direction);
            if visit {
                node.layout.cache.clear();
            }
            visit
        };

        let request = {
            let node = self.node(id);
            CacheRequest {
                available: input.available,
                width_mode: input.width_mode,
                height_mode: input.height_mode,
                margin: Size::new(
                    node.style.margin_for_axis(FlexDirection::Row, input.owner.width),
                    node.style.margin_for_axis(FlexDirection::Column, input.owner.width),
                ),
                perform_layout: input.perform_layout,
                has_measure: node.measure.is_some(),
            }
        };
        let cached = {
            let scale = self.config.point_scale_factor();
            let rounding = self.rounding.as_ref();
            self.arena[id]
                .get()
                .layout
                .cache
                .lookup(&request, |lhs, rhs| rounded_equal(rounding, scale, lhs, rhs))
        };

        match cached {
            Some(entry) if !need_to_visit => {
                trace!(
                    target: "layouter::cache",
                    "[CACHE] hit {id:?} {} {}x{} → {}x{}",
                    input.reason,
                    input.available.width,
                    input.available.height,
                    entry.computed.width,
                    entry.computed.height
                );
                self.node_mut(id).layout.measured = entry.computed;
            }
            _ => {
                trace!(
                    target: "layouter::flex",
                    "[FLEX-VISIT] {id:?} {} available={}x{} modes={}/{} perform={}",
                    input.reason,
                    input.available.width,
                    input.available.height,
                    input.width_mode.label(),
                    input.height_mode.label(),
                    input.perform_layout
                );
                self.layout_impl(id, input);
                let node = self.node_mut(id);
                node.layout.last_parent_direction = Some(input.parent_direction);
                if cached.is_none() {
                    let measured = node.layout.measured;
                    node.layout.cache.store(&request, measured);
                }
            }
        }

        let node = self.node_mut(id);
        if input.perform_layout {
            node.layout.dimensions = node.layout.measured;
            node.has_new_layout = true;
            node.dirty = DirtyKind::NONE;
        }
        node.layout.generation = generation;
        need_to_visit || cached.is_none()
    }

    fn layout_impl(&mut self, id: NodeId, input: LayoutInput) {
        let style = self.node(id).style.clone();
        let direction = style.direction.resolve(input.parent_direction);
        self.resolve_box_edges(id, &style, direction, input.owner.width);

        if self.node(id).measure.is_some() {
            self.measure_leaf(id, &style, &input);
            return;
        }
        let children = self.child_ids(id);
        if children.is_empty() {
            self.size_empty_container(id, &style, &input);
            return;
        }
        if !input.perform_layout && self.size_fixed_container(id, &style, &input) {
            return;
        }
        self.node_mut(id).layout.had_overflow = false;
        self.layout_flex_container(id, style, direction, children, &input);
    }

    /// Record the resolved direction, margins, borders and padding.
    fn resolve_box_edges(&mut self, id: NodeId, style: &Style, direction: Direction, owner_width: f32) {
        let mut margin = Sides::uniform(0.0);
        let mut border = Sides::uniform(0.0);
        let mut padding = Sides::uniform(0.0);
        for axis in [FlexDirection::Row.resolve(direction), FlexDirection::Column] {
            let (leading, trailing) = (axis.leading_edge(), axis.trailing_edge());
            set_side(&mut margin, leading, style.leading_margin(axis, owner_width));
            set_side(&mut margin, trailing, style.trailing_margin(axis, owner_width));
            set_side(&mut border, leading, style.leading_border(axis));
            set_side(&mut border, trailing, style.trailing_border(axis));
            set_side(&mut padding, leading, style.leading_padding(axis, owner_width));
            set_side(&mut padding, trailing, style.trailing_padding(axis, owner_width));
        }
        let layout = &mut self.node_mut(id).layout;
        layout.direction = direction;
        layout.margin = margin;
        layout.border = border;
        layout.padding = padding;
    }

    /// Initial offsets of a node inside its parent: leading margin plus the
    /// relative offset on the leading edge of each axis, and trailing margin
    /// minus it on the trailing edge.
    pub(crate) fn set_position(&mut self, id: NodeId, direction: Direction, owner: Size, owner_width: f32) {
        let direction = if id.parent(&self.arena).is_some() {
            direction
        } else {
            Direction::Ltr
        };
        let node = self.node_mut(id);
        let style = &node.style;
        let mut position = node.layout.position;
        for (axis, axis_size) in [
            (FlexDirection::Row.resolve(direction), owner.width),
            (FlexDirection::Column, owner.height),
        ] {
            let relative = style.relative_position(axis, axis_size);
            set_side(
                &mut position,
                axis.leading_edge(),
                style.leading_margin(axis, owner_width) + relative,
            );
            set_side(
                &mut position,
                axis.trailing_edge(),
                style.trailing_margin(axis, owner_width) - relative,
            );
        }
        node.layout.position = position;
    }

    /// The node's laid-out size along `axis` plus its margins on that axis.
    pub(crate) fn dimension_with_margin(&self, id: NodeId, axis: FlexDirection, width_size: f32) -> f32 {
        let node = self.node(id);
        node.layout.measured.get(axis.dimension()) + node.style.margin_for_axis(axis, width_size)
    }

    pub(crate) fn position_on(&self, id: NodeId, edge: Edge) -> f32 {
        metrics::side(&self.node(id).layout.position, edge)
    }

    pub(crate) fn set_position_on(&mut self, id: NodeId, edge: Edge, value: f32) {
        set_side(&mut self.node_mut(id).layout.position, edge, value);
    }
}

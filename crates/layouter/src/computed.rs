//! Read-only view of layout results.

use css_box::{Edge, Sides};
use css_flexbox::Direction;
use indextree::NodeId;
use serde::Serialize;

use crate::LayoutError;
use crate::layout::metrics::side;
use crate::tree::LayoutTree;

/// Computed layout of one node.
///
/// Offsets are relative to the parent's border box; `right` and `bottom`
/// are distances from the parent's right and bottom edges. Sizes are border
/// box sizes. All values are snapped to the pixel grid unless rounding is
/// disabled.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
    pub margin: Sides<f32>,
    pub border: Sides<f32>,
    pub padding: Sides<f32>,
    pub direction: Direction,
    /// Items overflowed this node's main axis during the last layout.
    pub had_overflow: bool,
}

/// Physical edge a logical edge maps to under `direction`.
fn physical_edge(edge: Edge, direction: Direction) -> Result<Edge, LayoutError> {
    let rtl = direction == Direction::Rtl;
    match edge {
        Edge::Start if rtl => Ok(Edge::Right),
        Edge::Start => Ok(Edge::Left),
        Edge::End if rtl => Ok(Edge::Left),
        Edge::End => Ok(Edge::Right),
        Edge::Left | Edge::Top | Edge::Right | Edge::Bottom => Ok(edge),
        Edge::Horizontal | Edge::Vertical | Edge::All => Err(LayoutError::ShorthandEdge { edge }),
    }
}

impl LayoutTree {
    /// The computed layout of `node` from the last [`calculate_layout`]
    /// that reached it.
    ///
    /// [`calculate_layout`]: LayoutTree::calculate_layout
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn layout(&self, node: NodeId) -> Result<Layout, LayoutError> {
        let layout = &self.checked(node)?.layout;
        let left = layout.position.left;
        let top = layout.position.top;
        let width = layout.dimensions.width;
        let height = layout.dimensions.height;

        let parent_size = node.parent(&self.arena).map_or_else(
            || {
                let owner = layout.owner_size;
                let extent = |owner: f32, offset: f32, size: f32| {
                    if owner.is_nan() { offset + size } else { owner }
                };
                (extent(owner.width, left, width), extent(owner.height, top, height))
            },
            |parent| {
                let dimensions = self.node(parent).layout.dimensions;
                (dimensions.width, dimensions.height)
            },
        );

        Ok(Layout {
            left,
            top,
            right: parent_size.0 - left - width,
            bottom: parent_size.1 - top - height,
            width,
            height,
            margin: layout.margin,
            border: layout.border,
            padding: layout.padding,
            direction: layout.direction,
            had_overflow: layout.had_overflow,
        })
    }

    /// Computed margin of `node` on `edge`. `Start` and `End` follow the
    /// node's resolved direction.
    ///
    /// # Errors
    /// Fails for unknown nodes and for shorthand edges.
    pub fn layout_margin(&self, node: NodeId, edge: Edge) -> Result<f32, LayoutError> {
        let layout = &self.checked(node)?.layout;
        Ok(side(&layout.margin, physical_edge(edge, layout.direction)?))
    }

    /// Computed border width of `node` on `edge`.
    ///
    /// # Errors
    /// Fails for unknown nodes and for shorthand edges.
    pub fn layout_border(&self, node: NodeId, edge: Edge) -> Result<f32, LayoutError> {
        let layout = &self.checked(node)?.layout;
        Ok(side(&layout.border, physical_edge(edge, layout.direction)?))
    }

    /// Computed padding of `node` on `edge`.
    ///
    /// # Errors
    /// Fails for unknown nodes and for shorthand edges.
    pub fn layout_padding(&self, node: NodeId, edge: Edge) -> Result<f32, LayoutError> {
        let layout = &self.checked(node)?.layout;
        Ok(side(&layout.padding, physical_edge(edge, layout.direction)?))
    }
}

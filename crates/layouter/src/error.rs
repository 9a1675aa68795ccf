use css_box::Edge;
use indextree::{NodeError, NodeId};
use thiserror::Error;

/// Misuse of the layout tree API.
///
/// Every variant describes a caller error; layout itself never fails once the
/// tree is well formed.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("node {node:?} does not exist or has been freed")]
    UnknownNode { node: NodeId },

    #[error("node {child:?} already has a parent; remove it before inserting it elsewhere")]
    ChildAlreadyParented { child: NodeId },

    #[error("cannot add children to node {parent:?} because it has a measure function")]
    ChildrenOnMeasuredNode { parent: NodeId },

    #[error("cannot set a measure function on node {node:?} because it has children")]
    MeasureOnNodeWithChildren { node: NodeId },

    #[error("child index {index} is out of range for a node with {count} children")]
    ChildIndexOutOfRange { index: usize, count: usize },

    #[error("cannot free node {node:?} while it is attached to a parent")]
    FreeParentedNode { node: NodeId },

    #[error("cannot reset node {node:?} while it is attached to a parent")]
    ResetParentedNode { node: NodeId },

    #[error("cannot reset node {node:?} while it has children")]
    ResetWithChildren { node: NodeId },

    #[error("only nodes with a measure function can be marked dirty explicitly ({node:?})")]
    MarkDirtyWithoutMeasure { node: NodeId },

    #[error("computed layout is reported per physical or logical edge, not for `{}`", .edge.name())]
    ShorthandEdge { edge: Edge },

    #[error("point scale factor must not be negative (got {0})")]
    NegativeScaleFactor(f32),

    #[error("invalid layout configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Arena(#[from] NodeError),
}

//! Per-node data stored in the layout arena.

use std::fmt;

use css_box::Sides;
use css_flexbox::Direction;
use css_sizing::{MeasureMode, Size};
use indextree::NodeId;
use serde::{Deserialize, Serialize};

use crate::cache::LayoutCache;
use crate::style::Style;

/// Measures a leaf node's content.
///
/// Receives the available inner size and how binding it is in each dimension,
/// and returns the content size. Any `FnMut(f32, MeasureMode, f32, MeasureMode) -> Size`
/// closure is a `Measure`.
pub trait Measure: Send {
    fn measure(
        &mut self,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Size;
}

impl<F> Measure for F
where
    F: FnMut(f32, MeasureMode, f32, MeasureMode) -> Size + Send,
{
    fn measure(
        &mut self,
        width: f32,
        width_mode: MeasureMode,
        height: f32,
        height_mode: MeasureMode,
    ) -> Size {
        self(width, width_mode, height, height_mode)
    }
}

/// Reports the distance from a node's top edge to its first baseline, given
/// the node's laid-out width and height.
pub trait Baseline: Send {
    fn baseline(&mut self, width: f32, height: f32) -> f32;
}

impl<F> Baseline for F
where
    F: FnMut(f32, f32) -> f32 + Send,
{
    fn baseline(&mut self, width: f32, height: f32) -> f32 {
        self(width, height)
    }
}

/// Invoked with the node's id when a clean node becomes dirty.
pub type DirtiedCallback = Box<dyn FnMut(NodeId) + Send>;

/// Node classification. Nodes with a measure function are `Text`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    #[default]
    Default,
    Text,
}

/// Why a node needs layout. Multiple reasons can be combined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirtyKind(u8);

impl DirtyKind {
    /// Clean.
    pub const NONE: Self = Self(0);
    /// A style property of the node changed.
    pub const STYLE: Self = Self(1 << 0);
    /// Children were inserted or removed.
    pub const STRUCTURE: Self = Self(1 << 1);
    /// The host invalidated the node's measured content.
    pub const MEASURE: Self = Self(1 << 2);
    /// A descendant changed, or the whole subtree was invalidated.
    pub const LAYOUT: Self = Self(1 << 3);

    /// Combine two dirty kinds.
    #[must_use]
    pub const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if all flags in `other` are present.
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn is_dirty(self) -> bool {
        self.0 != 0
    }
}

/// Layout results and the bookkeeping behind them.
///
/// `position` is kept per physical edge: during layout an item's main and
/// cross offsets are written to the leading edge of each axis, and reversed
/// axes are converted to left/top once the container size is known.
#[derive(Clone, Debug)]
pub(crate) struct NodeLayout {
    pub position: Sides<f32>,
    pub dimensions: Size,
    pub measured: Size,
    pub margin: Sides<f32>,
    pub border: Sides<f32>,
    pub padding: Sides<f32>,
    pub direction: Direction,
    pub had_overflow: bool,
    pub computed_flex_basis: f32,
    pub computed_flex_basis_generation: u32,
    /// Parent inner size the flex basis was resolved against.
    pub computed_flex_basis_owner: Size,
    /// Layout pass that last visited this node.
    pub generation: u32,
    pub last_parent_direction: Option<Direction>,
    /// Line of the parent container this node was placed on.
    pub line_index: usize,
    /// Available size a root node was last laid out in.
    pub owner_size: Size,
    pub cache: LayoutCache,
}

impl Default for NodeLayout {
    fn default() -> Self {
        Self {
            position: Sides::uniform(0.0),
            dimensions: Size::UNDEFINED,
            measured: Size::UNDEFINED,
            margin: Sides::uniform(0.0),
            border: Sides::uniform(0.0),
            padding: Sides::uniform(0.0),
            direction: Direction::Inherit,
            had_overflow: false,
            computed_flex_basis: f32::NAN,
            computed_flex_basis_generation: 0,
            computed_flex_basis_owner: Size::UNDEFINED,
            generation: 0,
            last_parent_direction: None,
            line_index: 0,
            owner_size: Size::UNDEFINED,
            cache: LayoutCache::default(),
        }
    }
}

impl NodeLayout {
    /// Layout of a box that generates nothing: every size and offset zero.
    pub fn zeroed() -> Self {
        Self {
            dimensions: Size::ZERO,
            measured: Size::ZERO,
            ..Self::default()
        }
    }
}

/// Data of one node in the arena.
pub(crate) struct Node {
    pub style: Style,
    pub node_type: NodeType,
    pub measure: Option<Box<dyn Measure>>,
    pub baseline: Option<Box<dyn Baseline>>,
    pub dirtied: Option<DirtiedCallback>,
    pub is_reference_baseline: bool,
    pub dirty: DirtyKind,
    pub has_new_layout: bool,
    pub layout: NodeLayout,
}

impl Node {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            node_type: NodeType::Default,
            measure: None,
            baseline: None,
            dirtied: None,
            is_reference_baseline: false,
            dirty: DirtyKind::NONE,
            has_new_layout: true,
            layout: NodeLayout::default(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("node_type", &self.node_type)
            .field("has_measure", &self.measure.is_some())
            .field("has_baseline", &self.baseline.is_some())
            .field("dirty", &self.dirty)
            .field("has_new_layout", &self.has_new_layout)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

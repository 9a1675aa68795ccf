//! The node arena and its public API: node lifecycle, children, styles,
//! callbacks and dirty tracking.

use css_flexbox::{FlexFactors, resolve_flex_grow, resolve_flex_shrink};
use indextree::{Arena, NodeId};
use log::{debug, trace};

use crate::config::Config;
use crate::node::{Baseline, DirtyKind, Measure, Node, NodeLayout, NodeType};
use crate::rounding::{GridRounding, PixelRounding};
use crate::style::{PropertyId, Style, StyleProperty};
use crate::LayoutError;

/// A forest of layout nodes.
///
/// Nodes are created standalone, attached under at most one parent and freed
/// explicitly. Parents own their children: freeing a node frees its subtree.
pub struct LayoutTree {
    pub(crate) arena: Arena<Node>,
    pub(crate) config: Config,
    /// Incremented on every `calculate_layout`.
    pub(crate) generation: u32,
    pub(crate) rounding: Box<dyn PixelRounding>,
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            config: Config::default(),
            generation: 0,
            rounding: Box::new(GridRounding),
        }
    }

    /// Create a tree whose nodes share `config`.
    ///
    /// # Errors
    /// Returns [`LayoutError::NegativeScaleFactor`] for an invalid config.
    pub fn with_config(config: Config) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration. Existing node styles are left untouched.
    ///
    /// # Errors
    /// Returns [`LayoutError::NegativeScaleFactor`] for an invalid config.
    pub fn set_config(&mut self, config: Config) -> Result<(), LayoutError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Replace the strategy used to snap layouts to the pixel grid.
    pub fn set_pixel_rounding(&mut self, rounding: impl PixelRounding + 'static) {
        self.rounding = Box::new(rounding);
    }

    //=========================================================================
    // Internal access
    //=========================================================================

    /// Node data for an id the layout pass obtained from the arena.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.arena[id].get()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.arena[id].get_mut()
    }

    /// Validate an id handed in by the caller.
    pub(crate) fn checked(&self, id: NodeId) -> Result<&Node, LayoutError> {
        self.arena
            .get(id)
            .filter(|entry| !entry.is_removed())
            .map(|entry| entry.get())
            .ok_or(LayoutError::UnknownNode { node: id })
    }

    fn checked_mut(&mut self, id: NodeId) -> Result<&mut Node, LayoutError> {
        self.arena
            .get_mut(id)
            .filter(|entry| !entry.is_removed())
            .map(|entry| entry.get_mut())
            .ok_or(LayoutError::UnknownNode { node: id })
    }

    pub(crate) fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        id.children(&self.arena).collect()
    }

    /// Style new nodes start from.
    pub(crate) fn initial_style(&self) -> Style {
        if self.config.use_web_defaults {
            Style::web()
        } else {
            Style::default()
        }
    }

    /// Resolved flex-grow and flex-shrink of `id`. A root never flexes.
    pub(crate) fn flex_factors(&self, id: NodeId) -> FlexFactors {
        let style = &self.node(id).style;
        let is_root = id.parent(&self.arena).is_none();
        FlexFactors {
            grow: resolve_flex_grow(style.flex, style.flex_grow, is_root),
            shrink: resolve_flex_shrink(
                style.flex,
                style.flex_shrink,
                is_root,
                self.config.use_web_defaults,
            ),
        }
    }

    //=========================================================================
    // Node lifecycle
    //=========================================================================

    /// Create a detached node with the initial style for this tree's config.
    pub fn new_node(&mut self) -> NodeId {
        self.new_node_with_style(self.initial_style())
    }

    pub fn new_node_with_style(&mut self, style: Style) -> NodeId {
        let id = self.arena.new_node(Node::new(style));
        trace!(target: "layouter::tree", "[TREE] new node {id:?}");
        id
    }

    /// Free a detached node together with its subtree.
    ///
    /// # Errors
    /// Fails for unknown nodes and for nodes that are still attached.
    pub fn free_node(&mut self, node: NodeId) -> Result<(), LayoutError> {
        self.checked(node)?;
        if node.parent(&self.arena).is_some() {
            return Err(LayoutError::FreeParentedNode { node });
        }
        node.remove_subtree(&mut self.arena);
        debug!(target: "layouter::tree", "[TREE] freed subtree at {node:?}");
        Ok(())
    }

    /// Return a detached, childless node to its freshly created state.
    ///
    /// # Errors
    /// Fails for unknown nodes, attached nodes and nodes with children.
    pub fn reset(&mut self, node: NodeId) -> Result<(), LayoutError> {
        self.checked(node)?;
        if node.parent(&self.arena).is_some() {
            return Err(LayoutError::ResetParentedNode { node });
        }
        if node.children(&self.arena).next().is_some() {
            return Err(LayoutError::ResetWithChildren { node });
        }
        let style = self.initial_style();
        *self.node_mut(node) = Node::new(style);
        Ok(())
    }

    /// Number of live nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.arena.iter().filter(|entry| !entry.is_removed()).count()
    }

    //=========================================================================
    // Children
    //=========================================================================

    /// Insert `child` as the `index`-th child of `parent`.
    ///
    /// # Errors
    /// Fails when the child already has a parent, when the parent measures
    /// its own content, or when `index` is past the end of the child list.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        index: usize,
    ) -> Result<(), LayoutError> {
        if self.checked(parent)?.measure.is_some() {
            return Err(LayoutError::ChildrenOnMeasuredNode { parent });
        }
        self.checked(child)?;
        if child.parent(&self.arena).is_some() {
            return Err(LayoutError::ChildAlreadyParented { child });
        }
        let count = self.child_count(parent)?;
        if index > count {
            return Err(LayoutError::ChildIndexOutOfRange { index, count });
        }
        match parent.children(&self.arena).nth(index) {
            Some(sibling) => sibling.checked_insert_before(child, &mut self.arena)?,
            None => parent.checked_append(child, &mut self.arena)?,
        }
        trace!(target: "layouter::tree", "[TREE] inserted {child:?} under {parent:?} at {index}");
        self.mark_dirty_and_propagate(parent, DirtyKind::STRUCTURE);
        Ok(())
    }

    /// Append `child` to `parent`'s children.
    ///
    /// # Errors
    /// See [`LayoutTree::insert_child`].
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        let count = self.child_count(parent)?;
        self.insert_child(parent, child, count)
    }

    /// Detach `child` from `parent`. Does nothing when `child` is not one of
    /// `parent`'s children.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), LayoutError> {
        self.checked(parent)?;
        self.checked(child)?;
        if child.parent(&self.arena) != Some(parent) {
            return Ok(());
        }
        self.detach(child);
        self.mark_dirty_and_propagate(parent, DirtyKind::STRUCTURE);
        Ok(())
    }

    /// Detach every child of `parent`.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn remove_all_children(&mut self, parent: NodeId) -> Result<(), LayoutError> {
        self.checked(parent)?;
        let children = self.child_ids(parent);
        if children.is_empty() {
            return Ok(());
        }
        for child in children {
            self.detach(child);
        }
        self.mark_dirty_and_propagate(parent, DirtyKind::STRUCTURE);
        Ok(())
    }

    fn detach(&mut self, child: NodeId) {
        child.detach(&mut self.arena);
        self.node_mut(child).layout = NodeLayout::default();
        trace!(target: "layouter::tree", "[TREE] detached {child:?}");
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn child_count(&self, parent: NodeId) -> Result<usize, LayoutError> {
        self.checked(parent)?;
        Ok(parent.children(&self.arena).count())
    }

    /// The `index`-th child of `parent`, if there is one.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn child(&self, parent: NodeId, index: usize) -> Result<Option<NodeId>, LayoutError> {
        self.checked(parent)?;
        Ok(parent.children(&self.arena).nth(index))
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn children(&self, parent: NodeId) -> Result<Vec<NodeId>, LayoutError> {
        self.checked(parent)?;
        Ok(self.child_ids(parent))
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, LayoutError> {
        self.checked(node)?;
        Ok(node.parent(&self.arena))
    }

    //=========================================================================
    // Styles
    //=========================================================================

    /// # Errors
    /// Fails for unknown nodes.
    pub fn style(&self, node: NodeId) -> Result<&Style, LayoutError> {
        Ok(&self.checked(node)?.style)
    }

    /// Set one style property, marking the node dirty if it changed.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn set(&mut self, node: NodeId, property: StyleProperty) -> Result<(), LayoutError> {
        if self.checked_mut(node)?.style.apply(property) {
            self.mark_dirty_and_propagate(node, DirtyKind::STYLE);
        }
        Ok(())
    }

    /// Read one style property.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn property(&self, node: NodeId, id: PropertyId) -> Result<StyleProperty, LayoutError> {
        Ok(self.checked(node)?.style.get(id))
    }

    /// Replace the whole style, marking the node dirty if it changed.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn set_style(&mut self, node: NodeId, style: Style) -> Result<(), LayoutError> {
        let current = &mut self.checked_mut(node)?.style;
        if *current == style {
            return Ok(());
        }
        *current = style;
        self.mark_dirty_and_propagate(node, DirtyKind::STYLE);
        Ok(())
    }

    /// Edit the style in place, marking the node dirty if the edit changed it.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn update_style(
        &mut self,
        node: NodeId,
        edit: impl FnOnce(&mut Style),
    ) -> Result<(), LayoutError> {
        let mut style = self.checked(node)?.style.clone();
        edit(&mut style);
        self.set_style(node, style)
    }

    /// Copy `src`'s style onto `dst`.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn copy_style(&mut self, dst: NodeId, src: NodeId) -> Result<(), LayoutError> {
        let style = self.checked(src)?.style.clone();
        self.set_style(dst, style)
    }

    //=========================================================================
    // Callbacks and flags
    //=========================================================================

    /// Let `node` measure its own content. The node becomes a text node.
    ///
    /// # Errors
    /// Fails for unknown nodes and for nodes with children.
    pub fn set_measure_func(
        &mut self,
        node: NodeId,
        measure: impl Measure + 'static,
    ) -> Result<(), LayoutError> {
        self.checked(node)?;
        if node.children(&self.arena).next().is_some() {
            return Err(LayoutError::MeasureOnNodeWithChildren { node });
        }
        let entry = self.node_mut(node);
        entry.measure = Some(Box::new(measure));
        entry.node_type = NodeType::Text;
        Ok(())
    }

    /// Remove the measure function. The node becomes a default node.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn clear_measure_func(&mut self, node: NodeId) -> Result<(), LayoutError> {
        let entry = self.checked_mut(node)?;
        entry.measure = None;
        entry.node_type = NodeType::Default;
        Ok(())
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn has_measure_func(&self, node: NodeId) -> Result<bool, LayoutError> {
        Ok(self.checked(node)?.measure.is_some())
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn set_baseline_func(
        &mut self,
        node: NodeId,
        baseline: impl Baseline + 'static,
    ) -> Result<(), LayoutError> {
        self.checked_mut(node)?.baseline = Some(Box::new(baseline));
        Ok(())
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn clear_baseline_func(&mut self, node: NodeId) -> Result<(), LayoutError> {
        self.checked_mut(node)?.baseline = None;
        Ok(())
    }

    /// Call `dirtied` whenever `node` goes from clean to dirty.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn set_dirtied_func(
        &mut self,
        node: NodeId,
        dirtied: impl FnMut(NodeId) + Send + 'static,
    ) -> Result<(), LayoutError> {
        self.checked_mut(node)?.dirtied = Some(Box::new(dirtied));
        Ok(())
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn clear_dirtied_func(&mut self, node: NodeId) -> Result<(), LayoutError> {
        self.checked_mut(node)?.dirtied = None;
        Ok(())
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn node_type(&self, node: NodeId) -> Result<NodeType, LayoutError> {
        Ok(self.checked(node)?.node_type)
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn set_node_type(&mut self, node: NodeId, node_type: NodeType) -> Result<(), LayoutError> {
        self.checked_mut(node)?.node_type = node_type;
        Ok(())
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn is_reference_baseline(&self, node: NodeId) -> Result<bool, LayoutError> {
        Ok(self.checked(node)?.is_reference_baseline)
    }

    /// Make `node` the child its parent takes its baseline from.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn set_is_reference_baseline(
        &mut self,
        node: NodeId,
        is_reference_baseline: bool,
    ) -> Result<(), LayoutError> {
        let entry = self.checked_mut(node)?;
        if entry.is_reference_baseline == is_reference_baseline {
            return Ok(());
        }
        entry.is_reference_baseline = is_reference_baseline;
        self.mark_dirty_and_propagate(node, DirtyKind::STYLE);
        Ok(())
    }

    /// True when layout changed the node since the flag was last cleared.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn has_new_layout(&self, node: NodeId) -> Result<bool, LayoutError> {
        Ok(self.checked(node)?.has_new_layout)
    }

    /// # Errors
    /// Fails for unknown nodes.
    pub fn set_has_new_layout(
        &mut self,
        node: NodeId,
        has_new_layout: bool,
    ) -> Result<(), LayoutError> {
        self.checked_mut(node)?.has_new_layout = has_new_layout;
        Ok(())
    }

    //=========================================================================
    // Dirty tracking
    //=========================================================================

    /// # Errors
    /// Fails for unknown nodes.
    pub fn is_dirty(&self, node: NodeId) -> Result<bool, LayoutError> {
        Ok(self.checked(node)?.dirty.is_dirty())
    }

    /// Reasons the node needs layout.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn dirty_kind(&self, node: NodeId) -> Result<DirtyKind, LayoutError> {
        Ok(self.checked(node)?.dirty)
    }

    /// Invalidate a measured node's content so that it is measured again.
    ///
    /// # Errors
    /// Fails for unknown nodes and for nodes without a measure function.
    pub fn mark_dirty(&mut self, node: NodeId) -> Result<(), LayoutError> {
        if self.checked(node)?.measure.is_none() {
            return Err(LayoutError::MarkDirtyWithoutMeasure { node });
        }
        self.mark_dirty_and_propagate(node, DirtyKind::MEASURE);
        Ok(())
    }

    /// Mark `node` and every descendant dirty.
    ///
    /// # Errors
    /// Fails for unknown nodes.
    pub fn mark_dirty_and_propagate_to_descendants(
        &mut self,
        node: NodeId,
    ) -> Result<(), LayoutError> {
        self.checked(node)?;
        let subtree: Vec<NodeId> = node.descendants(&self.arena).collect();
        for id in subtree {
            let entry = self.node_mut(id);
            entry.dirty = entry.dirty.or(DirtyKind::LAYOUT);
        }
        if let Some(parent) = node.parent(&self.arena) {
            self.mark_dirty_and_propagate(parent, DirtyKind::LAYOUT);
        }
        Ok(())
    }

    /// Mark `node` dirty for `kind`. A clean node also resets its cached flex
    /// basis, notifies its dirtied callback and dirties its ancestors.
    pub(crate) fn mark_dirty_and_propagate(&mut self, node: NodeId, kind: DirtyKind) {
        let mut current = Some(node);
        let mut reason = kind;
        while let Some(id) = current {
            let entry = self.node_mut(id);
            let was_clean = !entry.dirty.is_dirty();
            entry.dirty = entry.dirty.or(reason);
            if !was_clean {
                break;
            }
            entry.layout.computed_flex_basis = f32::NAN;
            if let Some(dirtied) = entry.dirtied.as_mut() {
                dirtied(id);
            }
            trace!(target: "layouter::tree", "[DIRTY] {id:?} {reason:?}");
            reason = DirtyKind::LAYOUT;
            current = id.parent(&self.arena);
        }
    }
}

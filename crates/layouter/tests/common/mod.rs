#![allow(dead_code, reason = "Each test binary uses a different subset of the helpers")]

use layouter::{LayoutError, LayoutTree, NodeId, StyleProperty, points};

/// Install the test logger once per binary.
pub fn init_logging() {
    let _logger = env_logger::builder().is_test(true).try_init();
}

/// New node with the given properties applied in order.
///
/// # Errors
/// Fails if a property cannot be set.
pub fn node(tree: &mut LayoutTree, properties: &[StyleProperty]) -> Result<NodeId, LayoutError> {
    let id = tree.new_node();
    for property in properties {
        tree.set(id, *property)?;
    }
    Ok(id)
}

/// New node of a fixed size.
///
/// # Errors
/// Fails if a property cannot be set.
pub fn sized(tree: &mut LayoutTree, width: f32, height: f32) -> Result<NodeId, LayoutError> {
    node(
        tree,
        &[StyleProperty::Width(points(width)), StyleProperty::Height(points(height))],
    )
}

/// Append every child to `parent`.
///
/// # Errors
/// Fails if a child cannot be attached.
pub fn append(tree: &mut LayoutTree, parent: NodeId, children: &[NodeId]) -> Result<(), LayoutError> {
    for child in children {
        tree.add_child(parent, *child)?;
    }
    Ok(())
}

/// `(left, top, width, height)` of a node's computed layout.
///
/// # Errors
/// Fails for unknown nodes.
pub fn rect(tree: &LayoutTree, id: NodeId) -> Result<(f32, f32, f32, f32), LayoutError> {
    let layout = tree.layout(id)?;
    Ok((layout.left, layout.top, layout.width, layout.height))
}

#![allow(clippy::unwrap_used, clippy::float_cmp, reason = "Test code")]

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use common::{append, init_logging, node, rect};
use layouter::{
    Config, Direction, Edge, FlexDirection, LayoutTree, MeasureMode, NodeId, NodeType, Size,
    StyleProperty, points,
};

/// Text-like content 150 points wide that wraps to the available width,
/// counting how often it is measured.
fn text(tree: &mut LayoutTree, height: f32, calls: &Arc<AtomicUsize>) -> Result<NodeId> {
    let leaf = tree.new_node();
    let counter = Arc::clone(calls);
    tree.set_measure_func(leaf, move |width: f32, mode: MeasureMode, _: f32, _: MeasureMode| {
        counter.fetch_add(1, Ordering::Relaxed);
        let width = if mode == MeasureMode::Undefined { 150.0 } else { width.min(150.0) };
        Size::new(width, height)
    })?;
    Ok(leaf)
}

#[test]
fn measured_leaf_fills_a_column() -> Result<()> {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut tree = LayoutTree::new();
    let root = node(&mut tree, &[StyleProperty::Width(points(100.0))])?;
    let leaf = text(&mut tree, 20.0, &calls)?;
    append(&mut tree, root, &[leaf])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, leaf)?, (0.0, 0.0, 100.0, 20.0));
    assert_eq!(rect(&tree, root)?, (0.0, 0.0, 100.0, 20.0));
    assert_eq!(tree.node_type(leaf)?, NodeType::Text);
    assert!(calls.load(Ordering::Relaxed) > 0);
    Ok(())
}

/// A row sizes a measured leaf to its content.
#[test]
fn measured_leaf_sizes_to_content_in_a_row() -> Result<()> {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut tree = LayoutTree::new();
    let root = node(&mut tree, &[StyleProperty::FlexDirection(FlexDirection::Row)])?;
    let leaf = text(&mut tree, 20.0, &calls)?;
    append(&mut tree, root, &[leaf])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, leaf)?, (0.0, 0.0, 150.0, 20.0));
    Ok(())
}

/// Padding wraps the measured content.
#[test]
fn padding_wraps_measured_content() -> Result<()> {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut tree = LayoutTree::new();
    let root = node(&mut tree, &[StyleProperty::FlexDirection(FlexDirection::Row)])?;
    let leaf = text(&mut tree, 20.0, &calls)?;
    tree.set(leaf, StyleProperty::Padding(Edge::All, points(5.0)))?;
    append(&mut tree, root, &[leaf])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, leaf)?, (0.0, 0.0, 160.0, 30.0));
    Ok(())
}

/// Laying out an unchanged tree again answers from the caches.
#[test]
fn relayout_without_changes_does_not_measure() -> Result<()> {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut tree = LayoutTree::new();
    let root = node(&mut tree, &[StyleProperty::Width(points(100.0))])?;
    let leaf = text(&mut tree, 20.0, &calls)?;
    append(&mut tree, root, &[leaf])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;
    let first = tree.layout(leaf)?;
    let measured = calls.load(Ordering::Relaxed);

    tree.calculate_layout(root, None, None, Direction::Ltr)?;
    assert_eq!(calls.load(Ordering::Relaxed), measured);
    assert_eq!(tree.layout(leaf)?, first);

    tree.mark_dirty(leaf)?;
    assert!(tree.is_dirty(root)?);
    tree.calculate_layout(root, None, None, Direction::Ltr)?;
    assert!(calls.load(Ordering::Relaxed) > measured);
    assert!(!tree.is_dirty(leaf)?);
    Ok(())
}

/// Fractional text sizes round up so that text never gets clipped.
#[test]
fn text_rounds_up_to_the_pixel_grid() -> Result<()> {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut tree = LayoutTree::new();
    let root = node(&mut tree, &[StyleProperty::Width(points(100.0))])?;
    let leaf = text(&mut tree, 15.3, &calls)?;
    append(&mut tree, root, &[leaf])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(tree.layout(leaf)?.height, 16.0);
    assert_eq!(tree.layout(root)?.height, 15.0);
    Ok(())
}

#[test]
fn disabled_rounding_keeps_fractions() -> Result<()> {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let mut config = Config::default();
    config.set_point_scale_factor(0.0)?;
    let mut tree = LayoutTree::with_config(config)?;
    let root = node(&mut tree, &[StyleProperty::Width(points(100.0))])?;
    let leaf = text(&mut tree, 15.3, &calls)?;
    append(&mut tree, root, &[leaf])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert!((tree.layout(leaf)?.height - 15.3).abs() < 1e-4);
    Ok(())
}

/// NaN from a measure function counts as zero.
#[test]
fn nan_measurements_are_zero() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = node(&mut tree, &[StyleProperty::FlexDirection(FlexDirection::Row)])?;
    let leaf = tree.new_node();
    tree.set_measure_func(leaf, |_: f32, _: MeasureMode, _: f32, _: MeasureMode| {
        Size::new(f32::NAN, 12.0)
    })?;
    append(&mut tree, root, &[leaf])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, leaf)?, (0.0, 0.0, 0.0, 12.0));
    Ok(())
}

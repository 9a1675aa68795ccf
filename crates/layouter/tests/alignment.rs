#![allow(clippy::unwrap_used, clippy::float_cmp, reason = "Test code")]

mod common;

use anyhow::Result;
use common::{append, init_logging, node, rect, sized};
use layouter::{
    Align, Direction, Edge, FlexDirection, LayoutTree, NodeId, StyleProperty, auto, points,
};

fn row(tree: &mut LayoutTree, align: Align) -> Result<NodeId> {
    Ok(node(
        tree,
        &[
            StyleProperty::FlexDirection(FlexDirection::Row),
            StyleProperty::AlignItems(align),
            StyleProperty::Width(points(200.0)),
            StyleProperty::Height(points(100.0)),
        ],
    )?)
}

#[test]
fn align_items_positions_on_the_cross_axis() -> Result<()> {
    init_logging();
    for (align, top) in [(Align::FlexStart, 0.0), (Align::Center, 40.0), (Align::FlexEnd, 80.0)] {
        let mut tree = LayoutTree::new();
        let root = row(&mut tree, align)?;
        let child = sized(&mut tree, 50.0, 20.0)?;
        append(&mut tree, root, &[child])?;

        tree.calculate_layout(root, None, None, Direction::Ltr)?;

        assert_eq!(tree.layout(child)?.top, top, "{}", align.label());
    }
    Ok(())
}

#[test]
fn align_self_overrides_the_container() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, Align::FlexStart)?;
    let plain = sized(&mut tree, 50.0, 20.0)?;
    let ending = sized(&mut tree, 50.0, 20.0)?;
    tree.set(ending, StyleProperty::AlignSelf(Align::FlexEnd))?;
    append(&mut tree, root, &[plain, ending])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(tree.layout(plain)?.top, 0.0);
    assert_eq!(tree.layout(ending)?.top, 80.0);
    Ok(())
}

/// Items without a cross size stretch to the line; items with one keep it.
#[test]
fn stretch_fills_only_auto_cross_sizes() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, Align::Stretch)?;
    let stretched = node(&mut tree, &[StyleProperty::Width(points(50.0))])?;
    let fixed = sized(&mut tree, 50.0, 20.0)?;
    append(&mut tree, root, &[stretched, fixed])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, stretched)?, (0.0, 0.0, 50.0, 100.0));
    assert_eq!(rect(&tree, fixed)?, (50.0, 0.0, 50.0, 20.0));
    Ok(())
}

/// An auto cross margin takes the free cross space before alignment does.
#[test]
fn auto_cross_margin_pushes_the_item() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, Align::Stretch)?;
    let child = sized(&mut tree, 50.0, 20.0)?;
    tree.set(child, StyleProperty::Margin(Edge::Top, auto()))?;
    append(&mut tree, root, &[child])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(tree.layout(child)?.top, 80.0);
    Ok(())
}

/// Boxes without a baseline of their own align their bottom edges.
#[test]
fn baseline_alignment_defaults_to_the_bottom_edge() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, Align::Baseline)?;
    let short = sized(&mut tree, 50.0, 20.0)?;
    let tall = sized(&mut tree, 50.0, 40.0)?;
    append(&mut tree, root, &[short, tall])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(tree.layout(short)?.top, 20.0);
    assert_eq!(tree.layout(tall)?.top, 0.0);
    Ok(())
}

#[test]
fn baseline_functions_align_text() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, Align::Baseline)?;
    let short = sized(&mut tree, 50.0, 20.0)?;
    let tall = sized(&mut tree, 50.0, 40.0)?;
    tree.set_baseline_func(short, |_: f32, height: f32| height - 5.0)?;
    tree.set_baseline_func(tall, |_: f32, height: f32| height / 2.0)?;
    append(&mut tree, root, &[short, tall])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(tree.layout(short)?.top, 5.0);
    assert_eq!(tree.layout(tall)?.top, 0.0);
    Ok(())
}

/// A container's baseline is taken from its first child.
#[test]
fn nested_containers_expose_their_first_childs_baseline() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, Align::Baseline)?;
    let wrapper = node(
        &mut tree,
        &[StyleProperty::Width(points(50.0)), StyleProperty::Padding(Edge::Top, points(10.0))],
    )?;
    let inner = sized(&mut tree, 50.0, 20.0)?;
    tree.set_baseline_func(inner, |_: f32, _: f32| 15.0)?;
    tree.add_child(wrapper, inner)?;
    let tall = sized(&mut tree, 50.0, 40.0)?;
    append(&mut tree, root, &[wrapper, tall])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    // The wrapper's baseline sits 10 + 15 below its top, the tall box's 40.
    assert_eq!(tree.layout(wrapper)?.top, 15.0);
    assert_eq!(tree.layout(tall)?.top, 0.0);
    Ok(())
}

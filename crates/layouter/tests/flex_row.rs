#![allow(clippy::unwrap_used, clippy::float_cmp, reason = "Test code")]

mod common;

use anyhow::Result;
use common::{append, init_logging, node, rect, sized};
use layouter::{
    Direction, Edge, FlexDirection, JustifyContent, LayoutTree, NodeId, StyleProperty, auto,
    percent, points,
};

/// Row container of a fixed size.
fn row(tree: &mut LayoutTree, width: f32, height: f32) -> Result<NodeId> {
    let root = sized(tree, width, height)?;
    tree.set(root, StyleProperty::FlexDirection(FlexDirection::Row))?;
    Ok(root)
}

/// Two fixed-size children sit side by side in order.
#[test]
fn fixed_children_are_placed_in_order() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 300.0, 50.0)?;
    let first = sized(&mut tree, 100.0, 20.0)?;
    let second = sized(&mut tree, 150.0, 20.0)?;
    append(&mut tree, root, &[first, second])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, root)?, (0.0, 0.0, 300.0, 50.0));
    assert_eq!(rect(&tree, first)?, (0.0, 0.0, 100.0, 20.0));
    assert_eq!(rect(&tree, second)?, (100.0, 0.0, 150.0, 20.0));
    let layout = tree.layout(second)?;
    assert_eq!(layout.right, 50.0);
    assert_eq!(layout.bottom, 30.0);
    Ok(())
}

/// A max-width clamps one growing item and the rest of the free space goes
/// to its sibling. Both are stretched to the container's height.
#[test]
fn grow_respects_max_width() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 200.0, 100.0)?;
    let free = node(&mut tree, &[StyleProperty::FlexGrow(Some(1.0))])?;
    let clamped = node(
        &mut tree,
        &[StyleProperty::FlexGrow(Some(1.0)), StyleProperty::MaxWidth(points(50.0))],
    )?;
    append(&mut tree, root, &[free, clamped])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, free)?, (0.0, 0.0, 150.0, 100.0));
    assert_eq!(rect(&tree, clamped)?, (150.0, 0.0, 50.0, 100.0));
    Ok(())
}

#[test]
fn shrinking_items_fit_the_container() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 100.0, 20.0)?;
    let first = sized(&mut tree, 80.0, 20.0)?;
    let second = sized(&mut tree, 80.0, 20.0)?;
    for child in [first, second] {
        tree.set(child, StyleProperty::FlexShrink(Some(1.0)))?;
    }
    append(&mut tree, root, &[first, second])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, first)?, (0.0, 0.0, 50.0, 20.0));
    assert_eq!(rect(&tree, second)?, (50.0, 0.0, 50.0, 20.0));
    assert!(!tree.layout(root)?.had_overflow);
    Ok(())
}

/// Items that cannot shrink spill past the container and flag the overflow.
#[test]
fn rigid_items_overflow() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 100.0, 20.0)?;
    let first = sized(&mut tree, 80.0, 20.0)?;
    let second = sized(&mut tree, 80.0, 20.0)?;
    append(&mut tree, root, &[first, second])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, second)?, (80.0, 0.0, 80.0, 20.0));
    assert!(tree.layout(root)?.had_overflow);
    Ok(())
}

#[test]
fn justify_center_splits_free_space() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 200.0, 50.0)?;
    tree.set(root, StyleProperty::JustifyContent(JustifyContent::Center))?;
    let first = sized(&mut tree, 40.0, 10.0)?;
    let second = sized(&mut tree, 40.0, 10.0)?;
    append(&mut tree, root, &[first, second])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(tree.layout(first)?.left, 60.0);
    assert_eq!(tree.layout(second)?.left, 100.0);
    Ok(())
}

#[test]
fn justify_space_between_pins_the_ends() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 200.0, 50.0)?;
    tree.set(root, StyleProperty::JustifyContent(JustifyContent::SpaceBetween))?;
    let children = [
        sized(&mut tree, 20.0, 10.0)?,
        sized(&mut tree, 20.0, 10.0)?,
        sized(&mut tree, 20.0, 10.0)?,
    ];
    append(&mut tree, root, &children)?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    let lefts: Vec<f32> = children
        .iter()
        .map(|child| tree.layout(*child).map(|layout| layout.left))
        .collect::<Result<_, _>>()?;
    assert_eq!(lefts, vec![0.0, 90.0, 180.0]);
    Ok(())
}

/// Where the first and last item of a line end up for every justify mode,
/// as `(space before the first, space after the last)`.
#[test]
fn justify_modes_place_the_ends() -> Result<()> {
    init_logging();
    for (justify, expected) in [
        (JustifyContent::FlexStart, (0.0, 180.0)),
        (JustifyContent::Center, (90.0, 90.0)),
        (JustifyContent::FlexEnd, (180.0, 0.0)),
        (JustifyContent::SpaceBetween, (0.0, 0.0)),
        (JustifyContent::SpaceAround, (30.0, 30.0)),
        (JustifyContent::SpaceEvenly, (45.0, 45.0)),
    ] {
        let mut tree = LayoutTree::new();
        let root = row(&mut tree, 300.0, 20.0)?;
        tree.set(root, StyleProperty::JustifyContent(justify))?;
        let first = sized(&mut tree, 30.0, 10.0)?;
        let middle = sized(&mut tree, 40.0, 10.0)?;
        let last = sized(&mut tree, 50.0, 10.0)?;
        append(&mut tree, root, &[first, middle, last])?;

        tree.calculate_layout(root, None, None, Direction::Ltr)?;

        let ends = (tree.layout(first)?.left, tree.layout(last)?.right);
        assert_eq!(ends, expected, "{}", justify.label());
        assert!(tree.layout(middle)?.left >= tree.layout(first)?.left + 30.0);
    }
    Ok(())
}

#[test]
fn percentages_resolve_against_the_container() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 200.0, 100.0)?;
    let child = node(
        &mut tree,
        &[StyleProperty::Width(percent(50.0)), StyleProperty::Height(percent(25.0))],
    )?;
    append(&mut tree, root, &[child])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, child)?, (0.0, 0.0, 100.0, 25.0));
    Ok(())
}

/// A percentage basis follows the container when only the container changes.
#[test]
fn percentage_basis_follows_a_resized_container() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = node(
        &mut tree,
        &[StyleProperty::FlexDirection(FlexDirection::Row), StyleProperty::Height(points(10.0))],
    )?;
    let child = node(&mut tree, &[StyleProperty::FlexBasis(percent(50.0))])?;
    append(&mut tree, root, &[child])?;

    tree.calculate_layout(root, Some(200.0), None, Direction::Ltr)?;
    assert_eq!(rect(&tree, child)?, (0.0, 0.0, 100.0, 10.0));

    tree.calculate_layout(root, Some(400.0), None, Direction::Ltr)?;
    assert_eq!(rect(&tree, child)?, (0.0, 0.0, 200.0, 10.0));
    assert!(!tree.is_dirty(child)?);

    tree.set(root, StyleProperty::Width(points(300.0)))?;
    tree.calculate_layout(root, Some(400.0), None, Direction::Ltr)?;
    assert_eq!(rect(&tree, child)?, (0.0, 0.0, 150.0, 10.0));

    tree.calculate_layout(root, Some(200.0), None, Direction::Ltr)?;
    assert_eq!(rect(&tree, child)?, (0.0, 0.0, 150.0, 10.0));
    Ok(())
}

/// Percentages of an unsized container are ignored and the child sizes to
/// its content.
#[test]
fn percentage_of_an_unsized_container_acts_as_auto() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = node(&mut tree, &[StyleProperty::FlexDirection(FlexDirection::Row)])?;
    let child = node(&mut tree, &[StyleProperty::Width(percent(50.0))])?;
    let grandchild = sized(&mut tree, 30.0, 10.0)?;
    append(&mut tree, root, &[child])?;
    append(&mut tree, child, &[grandchild])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, child)?, (0.0, 0.0, 30.0, 10.0));
    assert_eq!(rect(&tree, root)?, (0.0, 0.0, 30.0, 10.0));
    Ok(())
}

/// The same tree laid out under a different available size resizes with it.
#[test]
fn growing_items_follow_the_available_width() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = node(
        &mut tree,
        &[StyleProperty::FlexDirection(FlexDirection::Row), StyleProperty::Height(points(10.0))],
    )?;
    let fixed = sized(&mut tree, 40.0, 10.0)?;
    let grower = node(&mut tree, &[StyleProperty::FlexGrow(Some(1.0))])?;
    append(&mut tree, root, &[fixed, grower])?;

    tree.calculate_layout(root, Some(100.0), None, Direction::Ltr)?;
    assert_eq!(rect(&tree, grower)?, (40.0, 0.0, 60.0, 10.0));

    tree.calculate_layout(root, Some(250.0), None, Direction::Ltr)?;
    assert_eq!(rect(&tree, grower)?, (40.0, 0.0, 210.0, 10.0));
    assert_eq!(tree.layout(root)?.width, 250.0);
    Ok(())
}

#[test]
fn column_gap_separates_items() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 200.0, 20.0)?;
    tree.set(root, StyleProperty::ColumnGap(points(10.0)))?;
    let children = [
        sized(&mut tree, 20.0, 10.0)?,
        sized(&mut tree, 20.0, 10.0)?,
        sized(&mut tree, 20.0, 10.0)?,
    ];
    append(&mut tree, root, &children)?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(tree.layout(children[1])?.left, 30.0);
    assert_eq!(tree.layout(children[2])?.left, 60.0);
    Ok(())
}

/// Auto margins absorb the free space before justify-content sees it.
#[test]
fn auto_margins_take_free_space() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 200.0, 50.0)?;
    tree.set(root, StyleProperty::JustifyContent(JustifyContent::FlexEnd))?;
    let pushed = sized(&mut tree, 50.0, 10.0)?;
    tree.set(pushed, StyleProperty::Margin(Edge::Left, auto()))?;
    append(&mut tree, root, &[pushed])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;
    assert_eq!(tree.layout(pushed)?.left, 150.0);

    tree.set(pushed, StyleProperty::Margin(Edge::Right, auto()))?;
    tree.calculate_layout(root, None, None, Direction::Ltr)?;
    assert_eq!(tree.layout(pushed)?.left, 75.0);
    Ok(())
}

#[test]
fn padding_and_border_offset_children() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row(&mut tree, 100.0, 100.0)?;
    tree.set(root, StyleProperty::Padding(Edge::All, points(10.0)))?;
    tree.set(root, StyleProperty::Border(Edge::Left, points(5.0)))?;
    let child = node(&mut tree, &[StyleProperty::FlexGrow(Some(1.0))])?;
    append(&mut tree, root, &[child])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, child)?, (15.0, 10.0, 75.0, 80.0));
    assert_eq!(tree.layout_padding(root, Edge::Top)?, 10.0);
    assert_eq!(tree.layout_border(root, Edge::Left)?, 5.0);
    assert_eq!(tree.layout_border(root, Edge::Right)?, 0.0);
    Ok(())
}

#[test]
fn content_sized_root_wraps_its_children() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = node(&mut tree, &[StyleProperty::FlexDirection(FlexDirection::Row)])?;
    let first = sized(&mut tree, 30.0, 10.0)?;
    let second = sized(&mut tree, 20.0, 40.0)?;
    append(&mut tree, root, &[first, second])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, root)?, (0.0, 0.0, 50.0, 40.0));
    Ok(())
}

/// A root's own flex factors are ignored: under a max-width it still sizes
/// to its content instead of letting a growing child fill the maximum.
#[test]
fn root_flex_grow_is_ignored() -> Result<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = node(
        &mut tree,
        &[
            StyleProperty::FlexDirection(FlexDirection::Row),
            StyleProperty::MaxWidth(points(200.0)),
            StyleProperty::FlexGrow(Some(1.0)),
        ],
    )?;
    let child = sized(&mut tree, 50.0, 10.0)?;
    tree.set(child, StyleProperty::FlexGrow(Some(1.0)))?;
    append(&mut tree, root, &[child])?;

    tree.calculate_layout(root, None, None, Direction::Ltr)?;

    assert_eq!(rect(&tree, child)?, (0.0, 0.0, 50.0, 10.0));
    assert_eq!(tree.layout(root)?.width, 50.0);
    Ok(())
}

#![allow(clippy::unwrap_used, clippy::float_cmp, reason = "Test code")]

mod common;

use anyhow::Result;
use common::{init_logging, node, sized};
use layouter::{Direction, FlexDirection, Layout, LayoutError, LayoutTree, StyleProperty, points};
use rayon::prelude::*;

/// Lay out a row of `count` growing items and return the last item's layout.
fn last_item(count: usize) -> Result<Layout, LayoutError> {
    let mut tree = LayoutTree::new();
    let root = node(
        &mut tree,
        &[
            StyleProperty::FlexDirection(FlexDirection::Row),
            StyleProperty::Width(points(600.0)),
            StyleProperty::Height(points(50.0)),
        ],
    )?;
    let mut last = root;
    for _ in 0..count {
        last = sized(&mut tree, 10.0, 10.0)?;
        tree.set(last, StyleProperty::FlexGrow(Some(1.0)))?;
        tree.add_child(root, last)?;
    }
    tree.calculate_layout(root, None, None, Direction::Ltr)?;
    tree.layout(last)
}

/// Independent trees can be laid out on different threads.
#[test]
fn disjoint_trees_lay_out_in_parallel() -> Result<()> {
    init_logging();
    let parallel: Vec<Layout> = (1..=12_usize)
        .into_par_iter()
        .map(last_item)
        .collect::<Result<_, _>>()?;
    let sequential: Vec<Layout> = (1..=12_usize)
        .map(last_item)
        .collect::<Result<_, _>>()?;

    assert_eq!(parallel, sequential);
    let widest = parallel.first().unwrap();
    assert_eq!((widest.left, widest.width), (0.0, 600.0));
    let narrowest = parallel.last().unwrap();
    assert_eq!((narrowest.left, narrowest.width), (550.0, 50.0));
    Ok(())
}

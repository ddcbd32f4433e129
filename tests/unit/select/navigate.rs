use super::*;
use crate::expr::dsl::{blank, call, list, num};
use crate::layout::engine::{LayoutProps, layout_expr};
use crate::layout::text::MonoMeasure;
use crate::layout::theme::Theme;

fn areas(tree: &Expr) -> AreaMap {
    layout_expr(
        &Theme::default(),
        &mut MonoMeasure::default(),
        tree,
        &LayoutProps::default(),
    )
    .area_map()
}

#[test]
fn parent_and_siblings_follow_structure() {
    let tree = call("Add", [num(1), num(2)]);
    let map = AreaMap::default();
    let [one, two] = [tree.children()[0].id(), tree.children()[1].id()];

    assert_eq!(parent(&tree, one, &map), Some(tree.id()));
    assert_eq!(parent(&tree, tree.id(), &map), None);
    assert_eq!(right_sibling_smart(&tree, one, &map), Some(two));
    assert_eq!(left_sibling_smart(&tree, two, &map), Some(one));
    assert_eq!(left_sibling_smart(&tree, one, &map), None);
    assert_eq!(right_sibling_smart(&tree, two, &map), None);
    assert_eq!(right_sibling_smart(&tree, tree.id(), &map), None);
}

#[test]
fn arrows_move_across_an_inline_call() {
    let tree = call("Add", [num(1), num(2)]);
    let map = areas(&tree);
    let [one, two] = [tree.children()[0].id(), tree.children()[1].id()];

    assert_eq!(right_smart(&tree, one, &map), Some(two));
    assert_eq!(left_smart(&tree, two, &map), Some(one));
    assert_eq!(right_smart(&tree, two, &map), None);
}

#[test]
fn arrows_move_between_list_lines() {
    let tree = list([num(1), num(2)]);
    let map = areas(&tree);
    let [one, two] = [tree.children()[0].id(), tree.children()[1].id()];

    assert_eq!(down_smart(&tree, one, &map), Some(two));
    assert_eq!(up_smart(&tree, two, &map), Some(one));
    assert_eq!(down_smart(&tree, two, &map), None);
    assert_eq!(up_smart(&tree, one, &map), None);
}

#[test]
fn next_blank_wraps_in_preorder() {
    // Preorder positions of the blanks: 2, 5 and 9.
    let tree = list([
        num(1),
        blank(),
        call("F", [num(2), blank()]),
        num(3),
        num(4),
        num(5),
        blank(),
    ]);
    let map = AreaMap::default();
    let blanks = tree.blanks();
    assert_eq!(blanks.len(), 3);
    let call_id = tree.children()[2].id();

    assert_eq!(next_blank(&tree, blanks[2], &map), Some(blanks[0]));
    assert_eq!(next_blank(&tree, blanks[0], &map), Some(blanks[1]));
    assert_eq!(next_blank(&tree, call_id, &map), Some(blanks[1]));
    assert_eq!(next_blank(&tree, ExprId::fresh(), &map), Some(blanks[0]));
}

#[test]
fn next_blank_without_blanks_is_none() {
    let tree = call("Add", [num(1), num(2)]);
    assert_eq!(next_blank(&tree, tree.id(), &AreaMap::default()), None);
}

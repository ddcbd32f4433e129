use super::*;
use crate::expr::dsl::{call, list, num};

#[test]
fn present_selection_is_kept() {
    let tree = call("F", [num(1)]);
    let one = tree.children()[0].id();
    assert_eq!(repair_selection(&tree, &tree, one), one);
}

#[test]
fn prefers_the_next_sibling_then_the_previous() {
    let tree = call("F", [num(1), num(2), num(3)]);
    let ids: Vec<ExprId> = tree.children().iter().map(Expr::id).collect();

    let next = tree.remove(ids[1]).unwrap();
    assert_eq!(repair_selection(&tree, &next, ids[1]), ids[2]);

    let next = tree.remove(ids[2]).unwrap();
    assert_eq!(repair_selection(&tree, &next, ids[2]), ids[0]);
}

#[test]
fn falls_back_to_ancestors_then_root() {
    let tree = list([call("F", [num(1)])]);
    let f = tree.children()[0].id();
    let one = tree.children()[0].children()[0].id();

    let next = tree.remove(one).unwrap();
    assert_eq!(repair_selection(&tree, &next, one), f);

    let unrelated = call("G", []);
    assert_eq!(repair_selection(&tree, &unrelated, one), unrelated.id());
}

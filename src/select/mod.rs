//! Pure selection movement over a tree and its laid-out geometry.
//!
//! Every function maps the current selection to a new one; `None` means "stay put".

pub(crate) mod spatial;

use crate::expr::model::Expr;
use crate::foundation::ids::ExprId;
use crate::layout::area::AreaMap;
use spatial::{Direction, nearest};

/// Shape shared by every navigation function.
pub type SelectFn = fn(&Expr, ExprId, &AreaMap) -> Option<ExprId>;

/// The structural parent.
pub fn parent(tree: &Expr, selection: ExprId, _areas: &AreaMap) -> Option<ExprId> {
    tree.parent_of(selection).map(Expr::id)
}

/// The previous sibling; nothing before the first.
pub fn left_sibling_smart(tree: &Expr, selection: ExprId, _areas: &AreaMap) -> Option<ExprId> {
    let (siblings, ix) = tree.siblings(selection);
    let ix = ix?.checked_sub(1)?;
    siblings.get(ix).map(Expr::id)
}

/// The next sibling; nothing after the last.
pub fn right_sibling_smart(tree: &Expr, selection: ExprId, _areas: &AreaMap) -> Option<ExprId> {
    let (siblings, ix) = tree.siblings(selection);
    siblings.get(ix? + 1).map(Expr::id)
}

/// Nearest node to the left.
pub fn left_smart(_tree: &Expr, selection: ExprId, areas: &AreaMap) -> Option<ExprId> {
    nearest(areas, selection, Direction::Left)
}

/// Nearest node to the right.
pub fn right_smart(_tree: &Expr, selection: ExprId, areas: &AreaMap) -> Option<ExprId> {
    nearest(areas, selection, Direction::Right)
}

/// Nearest node above.
pub fn up_smart(_tree: &Expr, selection: ExprId, areas: &AreaMap) -> Option<ExprId> {
    nearest(areas, selection, Direction::Up)
}

/// Nearest node below.
pub fn down_smart(_tree: &Expr, selection: ExprId, areas: &AreaMap) -> Option<ExprId> {
    nearest(areas, selection, Direction::Down)
}

/// The next blank in preorder after the selection, wrapping around to the first.
pub fn next_blank(tree: &Expr, selection: ExprId, _areas: &AreaMap) -> Option<ExprId> {
    let order: Vec<&Expr> = tree.preorder().collect();
    let start = order
        .iter()
        .position(|e| e.id() == selection)
        .map_or(0, |ix| ix + 1);
    order[start..]
        .iter()
        .chain(&order[..start])
        .find(|e| e.is_blank())
        .map(|e| e.id())
}

#[cfg(test)]
#[path = "../../tests/unit/select/navigate.rs"]
mod tests;

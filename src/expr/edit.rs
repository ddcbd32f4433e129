//! Insertion/removal helpers built on [`Expr::update`].

use crate::expr::dsl;
use crate::expr::model::Expr;
use crate::foundation::ids::ExprId;

/// Where a new child goes inside its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildPosition {
    /// Before every existing child.
    First,
    /// After every existing child.
    Last,
}

/// Which side of an existing node a new sibling goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Immediately before.
    Left,
    /// Immediately after.
    Right,
}

impl Expr {
    /// Remove `id` from its container. `None` when `id` is the root or missing.
    pub fn remove(&self, id: ExprId) -> Option<Expr> {
        self.update(id, |_| None)
    }

    /// Replace `id` with a fresh-id copy of `next` whose root keeps `id`.
    pub fn replace(&self, id: ExprId, next: &Expr) -> Option<Expr> {
        self.update(id, |_| Some(next.reset_ids().replace_id(id)))
    }

    /// Splice `node` into the children of container `parent`.
    ///
    /// A leaf `parent` is left unchanged. `None` when `parent` is missing.
    pub fn insert_child(&self, parent: ExprId, node: Expr, at: ChildPosition) -> Option<Expr> {
        self.update(parent, |p| {
            if !p.is_container() {
                return Some(p.clone());
            }
            let mut children = p.children().to_vec();
            match at {
                ChildPosition::First => children.insert(0, node),
                ChildPosition::Last => children.push(node),
            }
            Some(p.with_children(children))
        })
    }

    /// Splice `node` next to `sibling` inside their parent.
    ///
    /// When `sibling` is the root there is no parent to splice into, so the root is wrapped in a
    /// new list holding both.
    pub fn insert_sibling(&self, sibling: ExprId, node: Expr, side: Side) -> Option<Expr> {
        if sibling == self.id() {
            return Some(match side {
                Side::Left => dsl::list([node, self.clone()]),
                Side::Right => dsl::list([self.clone(), node]),
            });
        }
        let parent = self.parent_of(sibling)?.id();
        self.update(parent, |p| {
            let mut children = p.children().to_vec();
            let ix = children.iter().position(|c| c.id() == sibling)?;
            let at = match side {
                Side::Left => ix,
                Side::Right => ix + 1,
            };
            children.insert(at, node);
            Some(p.with_children(children))
        })
    }

    /// Move blank `id` out of its parent to become the parent's right sibling, keeping its id.
    ///
    /// `None` (no change) when `id` is not a blank, is the root, or its parent is a root list:
    /// a root list is never wrapped in another list.
    pub fn hoist_blank(&self, id: ExprId) -> Option<Expr> {
        let target = self.find_id(id).filter(|e| e.is_blank())?.clone();
        let parent = self.parent_of(id)?;
        if parent.id() == self.id() && self.is_list() {
            return None;
        }
        let parent = parent.id();
        self.remove(id)?
            .insert_sibling(parent, target, Side::Right)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expr/edit.rs"]
mod tests;

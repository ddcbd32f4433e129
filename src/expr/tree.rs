//! Structural queries and the path-copying `update` primitive.
//!
//! Every operation is pure. `update` rebuilds only the nodes on the path from the root to the
//! target; every other subtree of the result is the same `Arc` as in the input.

use crate::expr::model::{Expr, ExprKind};
use crate::foundation::ids::ExprId;

impl Expr {
    /// Depth-first lookup by id.
    pub fn find_id(&self, id: ExprId) -> Option<&Expr> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_id(id))
    }

    /// Whether a node with `id` exists in this tree.
    pub fn contains(&self, id: ExprId) -> bool {
        self.find_id(id).is_some()
    }

    /// Child indices leading from this node to `id`; empty when `id` is this node.
    pub fn path_to(&self, id: ExprId) -> Option<Vec<usize>> {
        fn walk(node: &Expr, id: ExprId, path: &mut Vec<usize>) -> bool {
            if node.id() == id {
                return true;
            }
            for (ix, child) in node.children().iter().enumerate() {
                path.push(ix);
                if walk(child, id, path) {
                    return true;
                }
                path.pop();
            }
            false
        }

        let mut path = Vec::new();
        walk(self, id, &mut path).then_some(path)
    }

    /// Direct structural parent; `None` for the root or a missing id.
    pub fn parent_of(&self, id: ExprId) -> Option<&Expr> {
        self.parents(id).into_iter().next()
    }

    /// Ancestors of `id`, nearest first, ending with the root.
    pub fn parents(&self, id: ExprId) -> Vec<&Expr> {
        let Some(path) = self.path_to(id) else {
            return Vec::new();
        };
        let mut chain = Vec::with_capacity(path.len());
        let mut node = self;
        for &ix in &path {
            chain.push(node);
            node = &node.children()[ix];
        }
        chain.reverse();
        chain
    }

    /// Children of `id`'s parent and `id`'s position among them.
    ///
    /// The root (and a missing id) has no siblings and no index.
    pub fn siblings(&self, id: ExprId) -> (&[Expr], Option<usize>) {
        match self.parent_of(id) {
            Some(parent) => {
                let siblings = parent.children();
                let ix = siblings.iter().position(|s| s.id() == id);
                (siblings, ix)
            }
            None => (&[], None),
        }
    }

    /// Replace the node `id` with `updater(node)`.
    ///
    /// When the updater returns `None` the node is removed from its parent container; if the node
    /// is the root the whole result is `None`. Also `None` when `id` is not in the tree.
    pub fn update(
        &self,
        id: ExprId,
        updater: impl FnOnce(&Expr) -> Option<Expr>,
    ) -> Option<Expr> {
        fn rebuild(
            node: &Expr,
            path: &[usize],
            updater: impl FnOnce(&Expr) -> Option<Expr>,
        ) -> Option<Expr> {
            let Some((&ix, rest)) = path.split_first() else {
                return updater(node);
            };
            let children = node.children();
            let mut next = children.to_vec();
            match rebuild(&children[ix], rest, updater) {
                Some(child) => next[ix] = child,
                None => {
                    next.remove(ix);
                }
            }
            Some(node.with_children(next))
        }

        let path = self.path_to(id)?;
        rebuild(self, &path, updater)
    }

    /// Copy of this subtree where every node has a fresh id.
    pub fn reset_ids(&self) -> Expr {
        let kind = match self.kind() {
            ExprKind::Call { function, args } => ExprKind::Call {
                function: function.clone(),
                args: args.iter().map(Expr::reset_ids).collect(),
            },
            ExprKind::List { items } => ExprKind::List {
                items: items.iter().map(Expr::reset_ids).collect(),
            },
            leaf => leaf.clone(),
        };
        Expr::new(kind, self.data().clone())
    }

    /// Same subtree with its root id forced to `id`.
    pub fn replace_id(&self, id: ExprId) -> Expr {
        Expr::with_parts(id, self.data().clone(), self.kind().clone())
    }

    /// Nodes in depth-first preorder, starting with `self`.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }

    /// Number of nodes in this subtree.
    pub fn len(&self) -> usize {
        self.preorder().count()
    }

    /// A tree always has at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Ids of all blanks in preorder.
    pub fn blanks(&self) -> Vec<ExprId> {
        self.preorder()
            .filter(|e| e.is_blank())
            .map(Expr::id)
            .collect()
    }
}

/// Depth-first preorder iterator returned by [`Expr::preorder`].
pub struct Preorder<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expr/tree.rs"]
mod tests;

use std::collections::HashMap;

use crate::foundation::core::{Colour, Point, Rect, Vec2};
use crate::foundation::ids::ExprId;

/// Where and how the main text of a node is drawn, for overlaying an inline editor on it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextProps {
    /// Offset of the text's top-left corner within the node's area.
    pub offset: Vec2,
    /// Text colour (already resolved for disabled subtrees).
    pub colour: Colour,
    /// Italic face.
    pub italic: bool,
    /// Bold weight.
    pub bold: bool,
}

/// Geometry of one expression node.
///
/// `rect` is relative to the parent area's origin. The geometry tree mirrors the expression tree:
/// one area per node, children in the same order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Area {
    /// Node this area belongs to.
    pub id: ExprId,
    /// Position and size relative to the parent area.
    pub rect: Rect,
    /// Whether the node was laid out on a single line.
    pub inline: bool,
    /// Main text placement, if the node has one.
    pub text: Option<TextProps>,
    /// Areas of the node's children.
    pub children: Vec<Area>,
}

impl Area {
    /// Number of areas in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Area::count).sum::<usize>()
    }

    pub(crate) fn shift(&mut self, by: Vec2) {
        self.rect = self.rect + by;
    }
}

/// One entry of an [`AreaMap`]: an area in absolute view coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FlatArea {
    /// Node this area belongs to.
    pub id: ExprId,
    /// Absolute rectangle.
    pub rect: Rect,
    /// Whether the node was laid out on a single line.
    pub inline: bool,
    /// Main text placement relative to `rect`.
    pub text: Option<TextProps>,
    /// Distance from the root area.
    pub depth: usize,
}

/// Flattened id → absolute rectangle map, in preorder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaMap {
    order: Vec<FlatArea>,
    index: HashMap<ExprId, usize>,
}

impl AreaMap {
    /// Flatten `root`, with its rect shifted by `origin`.
    pub fn flatten(root: &Area, origin: Vec2) -> Self {
        fn walk(map: &mut AreaMap, area: &Area, origin: Vec2, depth: usize) {
            let rect = area.rect + origin;
            map.index.insert(area.id, map.order.len());
            map.order.push(FlatArea {
                id: area.id,
                rect,
                inline: area.inline,
                text: area.text,
                depth,
            });
            let origin = rect.origin().to_vec2();
            for child in &area.children {
                walk(map, child, origin, depth + 1);
            }
        }

        let mut map = Self::default();
        walk(&mut map, root, origin, 0);
        map
    }

    /// Area of `id`, if it was laid out.
    pub fn get(&self, id: ExprId) -> Option<&FlatArea> {
        self.index.get(&id).map(|&ix| &self.order[ix])
    }

    /// Absolute rectangle of `id`.
    pub fn rect(&self, id: ExprId) -> Option<Rect> {
        self.get(id).map(|a| a.rect)
    }

    /// All areas in preorder.
    pub fn iter(&self) -> impl Iterator<Item = &FlatArea> {
        self.order.iter()
    }

    /// Number of areas.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was laid out.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Deepest area containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<ExprId> {
        self.order
            .iter()
            .filter(|a| a.rect.contains(point))
            .max_by_key(|a| a.depth)
            .map(|a| a.id)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/area.rs"]
mod tests;

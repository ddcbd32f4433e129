use std::cmp::Ordering;

use crate::foundation::core::{Rect, rect_area, span_overlap};
use crate::foundation::ids::ExprId;
use crate::layout::area::{AreaMap, FlatArea};

/// Slack when comparing edges, so touching rectangles still count as adjacent.
const EPSILON: f64 = 0.5;

/// A direction of geometric movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards smaller y.
    Up,
    /// Towards larger y.
    Down,
    /// Towards smaller x.
    Left,
    /// Towards larger x.
    Right,
}

impl Direction {
    fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    fn accepts(self, from: Rect, to: Rect) -> bool {
        match self {
            Direction::Down => to.y0 >= from.y1 - EPSILON,
            Direction::Up => to.y1 <= from.y0 + EPSILON,
            Direction::Right => {
                to.x0 >= from.x1 - EPSILON && span_overlap(from.y0, from.y1, to.y0, to.y1) > 0.0
            }
            Direction::Left => {
                to.x1 <= from.x0 + EPSILON && span_overlap(from.y0, from.y1, to.y0, to.y1) > 0.0
            }
        }
    }

    fn gap(self, from: Rect, to: Rect) -> f64 {
        let gap = match self {
            Direction::Down => to.y0 - from.y1,
            Direction::Up => from.y0 - to.y1,
            Direction::Right => to.x0 - from.x1,
            Direction::Left => from.x0 - to.x1,
        };
        gap.max(0.0)
    }
}

/// Ranking key of a candidate; smaller is better.
struct Rank {
    gap: f64,
    disjoint: bool,
    lead: f64,
    area: f64,
    id: ExprId,
}

impl Rank {
    fn new(dir: Direction, from: Rect, to: &FlatArea) -> Self {
        let r = to.rect;
        let (overlap, lead) = if dir.is_vertical() {
            (span_overlap(from.x0, from.x1, r.x0, r.x1), (r.x0 - from.x0).abs())
        } else {
            (span_overlap(from.y0, from.y1, r.y0, r.y1), (r.y0 - from.y0).abs())
        };
        Self {
            gap: dir.gap(from, r),
            disjoint: overlap <= 0.0,
            lead,
            area: rect_area(r),
            id: to.id,
        }
    }

    fn cmp(&self, other: &Self) -> Ordering {
        self.gap
            .total_cmp(&other.gap)
            .then(self.disjoint.cmp(&other.disjoint))
            .then(self.lead.total_cmp(&other.lead))
            .then(self.area.total_cmp(&other.area))
            .then(self.id.cmp(&other.id))
    }
}

/// Nearest area in `dir` from `from`'s area.
///
/// Candidates rank by gap, then cross-axis overlap, then distance between leading edges on the
/// cross axis, then size, then id, so the result is total and deterministic. `None` when `from`
/// has no area or nothing lies in that direction.
pub fn nearest(areas: &AreaMap, from: ExprId, dir: Direction) -> Option<ExprId> {
    let origin = areas.rect(from)?;
    areas
        .iter()
        .filter(|a| a.id != from && dir.accepts(origin, a.rect))
        .map(|a| Rank::new(dir, origin, a))
        .min_by(Rank::cmp)
        .map(|rank| rank.id)
}

#[cfg(test)]
#[path = "../../tests/unit/select/spatial.rs"]
mod tests;

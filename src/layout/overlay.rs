//! Selection and hover-highlight rectangles drawn beneath the tree.

use crate::expr::model::Expr;
use crate::foundation::core::{Colour, Rect};
use crate::foundation::ids::ExprId;
use crate::layout::area::AreaMap;
use crate::layout::theme::Theme;

/// Which overlay a rectangle is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    /// The editor's selection.
    Selection,
    /// The node under the pointer.
    Highlight,
}

/// One overlay rectangle in absolute view coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayRect {
    /// Node it surrounds.
    pub id: ExprId,
    /// Selection or highlight.
    pub kind: OverlayKind,
    /// The node's area padded outward.
    pub rect: Rect,
    /// Corner radius.
    pub radius: f64,
    /// Fill, `None` for an outline only.
    pub fill: Option<Colour>,
    /// Stroke colour.
    pub stroke: Colour,
    /// Zero over blanks, which paint their own pill.
    pub opacity: f64,
}

/// Overlay rectangles, bottom first.
///
/// Ids without an area are skipped, as is the highlight while unfocused. The highlight is drawn
/// under the selection when it contains it, above otherwise.
pub fn overlay_rects(
    tree: &Expr,
    areas: &AreaMap,
    selection: Option<ExprId>,
    highlight: Option<ExprId>,
    focused: bool,
    theme: &Theme,
) -> Vec<OverlayRect> {
    let draw = |id: Option<ExprId>, kind: OverlayKind| -> Option<OverlayRect> {
        let id = id?;
        let area = areas.get(id)?;
        if kind == OverlayKind::Highlight && !focused {
            return None;
        }
        let style = &theme.selection;
        let pad = style.padding;
        let is_hole = tree.find_id(id).is_some_and(Expr::is_blank);
        let (fill, stroke) = match (kind, focused) {
            (OverlayKind::Selection, true) => (Some(style.fill), style.stroke),
            (OverlayKind::Selection, false) => (Some(style.blurred_fill), style.blurred_stroke),
            (OverlayKind::Highlight, _) => (None, theme.highlight_stroke),
        };
        Some(OverlayRect {
            id,
            kind,
            rect: area.rect.inflate(pad, pad),
            radius: style.radius,
            fill,
            stroke,
            opacity: if is_hole { 0.0 } else { 1.0 },
        })
    };

    let selection_rect = draw(selection, OverlayKind::Selection);
    let highlight_rect = draw(highlight, OverlayKind::Highlight);
    let highlight_contains_selection = match (highlight, selection) {
        (Some(h), Some(s)) => tree.find_id(h).is_some_and(|e| e.contains(s)),
        _ => false,
    };
    let layers = if highlight_contains_selection {
        [highlight_rect, selection_rect]
    } else {
        [selection_rect, highlight_rect]
    };
    layers.into_iter().flatten().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/overlay.rs"]
mod tests;

//! Intermediate layout values and the stacking/underline primitives the engine composes them with.

use smallvec::SmallVec;

use crate::foundation::core::{Colour, Point, Rect, Size, Vec2};
use crate::foundation::ids::ExprId;
use crate::layout::area::{Area, TextProps};
use crate::layout::text::TextStyle;
use crate::layout::theme::Theme;

/// One drawing primitive, positioned in the unpadded layout frame.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A run of text; `origin` is its top-left corner.
    Text {
        /// Owning node.
        id: ExprId,
        /// Top-left corner.
        origin: Point,
        /// The characters.
        text: String,
        /// Font variant.
        style: TextStyle,
        /// Fill colour.
        colour: Colour,
        /// Hover title (a leaf's comment).
        title: Option<String>,
        /// Draw a superscript `?` after the text.
        comment_indicator: bool,
    },
    /// Rounded pill of a blank.
    Pill {
        /// Owning node.
        id: ExprId,
        /// Outline; the corner radius is half its height.
        rect: Rect,
        /// Fill colour.
        fill: Colour,
        /// Stroke colour.
        stroke: Colour,
        /// Marks a drop target.
        droppable: bool,
    },
    /// Vertical line marking the extent of a list.
    Ruler {
        /// Owning node.
        id: ExprId,
        /// Top end.
        from: Point,
        /// Bottom end.
        to: Point,
        /// Pointer hit box around the line.
        hit: Rect,
        /// Stroke colour.
        colour: Colour,
    },
    /// Horizontal line scoping an inline call nested in another inline call.
    Underline {
        /// Left end.
        from: Point,
        /// Right end.
        to: Point,
    },
}

impl DrawOp {
    /// Node the primitive belongs to; underlines belong to none.
    pub fn id(&self) -> Option<ExprId> {
        match self {
            DrawOp::Text { id, .. } | DrawOp::Pill { id, .. } | DrawOp::Ruler { id, .. } => {
                Some(*id)
            }
            DrawOp::Underline { .. } => None,
        }
    }

    fn translate(&mut self, by: Vec2) {
        match self {
            DrawOp::Text { origin, .. } => *origin += by,
            DrawOp::Pill { rect, .. } => *rect = *rect + by,
            DrawOp::Ruler { from, to, hit, .. } => {
                *from += by;
                *to += by;
                *hit = *hit + by;
            }
            DrawOp::Underline { from, to } => {
                *from += by;
                *to += by;
            }
        }
    }
}

/// An underline not yet drawn: its vertical position depends on the final height of whoever
/// materialises it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PendingUnderline {
    pub(crate) offset: f64,
    pub(crate) length: f64,
    pub(crate) level: usize,
}

/// A laid-out piece of the view, positioned at its own origin.
#[derive(Clone, Debug, Default)]
pub(crate) struct Fragment {
    pub(crate) ops: Vec<DrawOp>,
    pub(crate) size: Size,
    pub(crate) inline: bool,
    /// Gets an underline when placed in a stack.
    pub(crate) is_underlined: bool,
    pub(crate) underlines: SmallVec<[PendingUnderline; 4]>,
    pub(crate) areas: Vec<Area>,
    pub(crate) text: Option<TextProps>,
    /// Set once the fragment is the complete layout of a node; placing it then yields an area.
    pub(crate) expr: Option<ExprId>,
}

impl Fragment {
    pub(crate) fn new(ops: Vec<DrawOp>, size: Size) -> Self {
        Self {
            ops,
            size,
            ..Self::default()
        }
    }

    fn max_level(&self) -> usize {
        self.underlines.iter().map(|u| u.level).max().unwrap_or(0)
    }

    /// How many underline levels this fragment occupies, counting its own.
    pub(crate) fn underline_depth(&self) -> usize {
        self.max_level() + usize::from(self.is_underlined)
    }

    fn place(&mut self, at: Vec2, child: Fragment) {
        let child_level = child.max_level() + 1;
        let Fragment {
            ops,
            size,
            inline,
            is_underlined,
            underlines,
            areas,
            text,
            expr,
        } = child;

        self.ops.extend(ops.into_iter().map(|mut op| {
            op.translate(at);
            op
        }));

        match expr {
            Some(id) => self.areas.push(Area {
                id,
                rect: Rect::from_origin_size(at.to_point(), size),
                inline,
                text,
                children: areas,
            }),
            None => {
                self.areas.extend(areas.into_iter().map(|mut a| {
                    a.shift(at);
                    a
                }));
                if self.text.is_none() {
                    self.text = text.map(|t| TextProps {
                        offset: t.offset + at,
                        ..t
                    });
                }
            }
        }

        if is_underlined {
            self.underlines.push(PendingUnderline {
                offset: at.x,
                length: size.width,
                level: child_level,
            });
        }
        self.underlines
            .extend(underlines.into_iter().map(|u| PendingUnderline {
                offset: u.offset + at.x,
                ..u
            }));

        self.size = Size::new(
            self.size.width.max(at.x + size.width),
            self.size.height.max(at.y + size.height),
        );
    }
}

/// Children side by side, top-aligned, `gap` apart.
pub(crate) fn hstack(gap: f64, children: impl IntoIterator<Item = Fragment>) -> Fragment {
    let mut out = Fragment::default();
    let mut x = 0.0;
    for child in children {
        let width = child.size.width;
        out.place(Vec2::new(x, 0.0), child);
        x += width + gap;
    }
    out
}

/// Children top to bottom, `gap` apart. A single child is returned as is.
pub(crate) fn vstack(gap: f64, children: impl IntoIterator<Item = Fragment>) -> Fragment {
    let mut children: Vec<Fragment> = children.into_iter().collect();
    if children.len() == 1 {
        if let Some(only) = children.pop() {
            return only;
        }
    }
    let mut out = Fragment::default();
    let mut y = 0.0;
    for child in children {
        let height = child.size.height;
        out.place(Vec2::new(0.0, y), child);
        y += height + gap;
    }
    out
}

/// Draw every pending underline beneath `frag` and grow it to fit them.
///
/// The result carries no pending underlines and is not itself underlined.
pub(crate) fn materialise_underlines(theme: &Theme, mut frag: Fragment) -> Fragment {
    let gap = theme.layout.underline_spacing;
    let max_level = frag.max_level();
    for u in std::mem::take(&mut frag.underlines) {
        let y = frag.size.height + u.level as f64 * gap;
        frag.ops.push(DrawOp::Underline {
            from: Point::new(u.offset, y),
            to: Point::new(u.offset + u.length, y),
        });
    }
    frag.is_underlined = false;
    frag.size.height += max_level as f64 * gap;

    // Only a single row is equalised; a comment sitting above its main text is not part of it.
    if frag.inline || max_level > 0 {
        let row = frag.size.height - frag.text.map_or(0.0, |t| t.offset.y);
        set_inline_heights(&mut frag.areas, row);
    }
    frag
}

fn set_inline_heights(areas: &mut [Area], height: f64) {
    for area in areas.iter_mut().filter(|a| a.inline) {
        area.rect = Rect::from_origin_size(area.rect.origin(), Size::new(area.rect.width(), height));
        set_inline_heights(&mut area.children, height);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fragment.rs"]
mod tests;

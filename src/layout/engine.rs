//! Recursive inline-vs-block layout of an expression tree.

use std::sync::Arc;

use crate::expr::model::{Expr, ExprKind, LiteralType};
use crate::foundation::core::{Colour, Point, Rect, Size, Vec2};
use crate::foundation::ids::ExprId;
use crate::layout::area::{Area, AreaMap, TextProps};
use crate::layout::cache::LayoutCache;
use crate::layout::fingerprint::fingerprint_layout;
use crate::layout::fragment::{DrawOp, Fragment, hstack, materialise_underlines, vstack};
use crate::layout::text::{TextMeasure, TextStyle};
use crate::layout::theme::{Highlight, Theme};

/// Per-pass inputs supplied by the host view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutProps {
    /// Whether the owning editor has keyboard focus.
    pub focused: bool,
    /// Hide comments (calls and leaves show a `?` indicator instead).
    pub fold_comments: bool,
    /// Colour overrides for blanks; the last entry for an id wins.
    pub highlights: Vec<(ExprId, Highlight)>,
}

/// Geometry and display list of one tree.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    /// Drawing primitives in the unpadded frame, back to front.
    pub ops: Vec<DrawOp>,
    /// Size of the tree without view padding.
    pub size: Size,
    /// Area of the root node at the origin.
    pub root: Area,
    /// Main text placement of the root.
    pub text: Option<TextProps>,
    /// View padding the absolute map is shifted by.
    pub padding: f64,
}

impl LayoutResult {
    /// Areas of the root's children.
    pub fn areas(&self) -> &[Area] {
        &self.root.children
    }

    /// Absolute rectangles of every node, including the view padding.
    pub fn area_map(&self) -> AreaMap {
        AreaMap::flatten(&self.root, Vec2::new(self.padding, self.padding))
    }

    /// Size including the view padding on every edge.
    pub fn padded_size(&self) -> Size {
        Size::new(
            self.size.width + 2.0 * self.padding,
            self.size.height + 2.0 * self.padding,
        )
    }

    /// Scale that fits the padded view into `max_width`; never enlarges.
    pub fn scale_for(&self, max_width: f64) -> f64 {
        let width = self.padded_size().width;
        if width <= 0.0 {
            return 1.0;
        }
        max_width.min(width) / width
    }
}

/// Whether a call with these argument layouts fits on one line.
pub(crate) fn is_call_inline(theme: &Theme, args: &[Fragment]) -> bool {
    if args.is_empty() {
        return true;
    }
    if !args.iter().all(|a| a.inline) {
        return false;
    }
    // A single inline argument never breaks the line.
    if args.len() == 1 {
        return true;
    }
    let width: f64 = args.iter().map(|a| a.size.width).sum();
    if width > theme.layout.line_break_point {
        return false;
    }
    let depth = args
        .iter()
        .map(Fragment::underline_depth)
        .max()
        .unwrap_or(0);
    depth < theme.layout.max_nesting
}

/// Lay out `expr` without caching.
pub fn layout_expr(
    theme: &Theme,
    measure: &mut dyn TextMeasure,
    expr: &Expr,
    props: &LayoutProps,
) -> LayoutResult {
    let mut visitor = ExprLayout {
        theme,
        measure,
        props,
    };
    let frag = materialise_underlines(theme, visitor.layout(expr, Scope::default()));
    LayoutResult {
        root: Area {
            id: expr.id(),
            rect: Rect::from_origin_size(Point::ZERO, frag.size),
            inline: false,
            text: frag.text,
            children: frag.areas,
        },
        ops: frag.ops,
        size: frag.size,
        text: frag.text,
        padding: theme.view_padding,
    }
}

/// Inherited context of the node being laid out.
#[derive(Clone, Copy, Debug, Default)]
struct Scope {
    disabled_ancestor: bool,
    list_parent: bool,
}

#[derive(Clone, Debug)]
struct TextOpts {
    colour: Colour,
    italic: bool,
    bold: bool,
    title: Option<String>,
    offset: Vec2,
    comment_indicator: bool,
    main_text: bool,
}

impl TextOpts {
    fn new(colour: Colour) -> Self {
        Self {
            colour,
            italic: false,
            bold: false,
            title: None,
            offset: Vec2::ZERO,
            comment_indicator: false,
            main_text: false,
        }
    }
}

struct ExprLayout<'a> {
    theme: &'a Theme,
    measure: &'a mut dyn TextMeasure,
    props: &'a LayoutProps,
}

impl ExprLayout<'_> {
    fn layout(&mut self, expr: &Expr, scope: Scope) -> Fragment {
        let mut frag = match expr.kind() {
            ExprKind::Blank => self.blank(expr, scope),
            ExprKind::Literal { content, ty } => self.literal(expr, content, *ty, scope),
            ExprKind::Variable { name } => self.variable(expr, name, scope),
            ExprKind::Call { function, args } => self.call(expr, function, args, scope),
            ExprKind::List { items } => self.list(expr, items, scope),
        };
        frag.expr = Some(expr.id());
        frag
    }

    fn inner(&mut self, parent: &Expr, scope: Scope, child: &Expr) -> Fragment {
        let scope = Scope {
            disabled_ancestor: scope.disabled_ancestor || parent.is_disabled(),
            list_parent: parent.is_list(),
        };
        self.layout(child, scope)
    }

    fn disabled(expr: &Expr, scope: Scope) -> bool {
        expr.is_disabled() || scope.disabled_ancestor
    }

    fn text(&mut self, expr: &Expr, scope: Scope, text: &str, opts: TextOpts) -> Fragment {
        let colour = if Self::disabled(expr, scope) {
            self.theme.syntax.disabled
        } else {
            opts.colour
        };
        let style = TextStyle {
            size: self.theme.font_size,
            italic: opts.italic,
            bold: opts.bold,
        };
        let size = self.measure.measure(text, &style);
        let op = DrawOp::Text {
            id: expr.id(),
            origin: opts.offset.to_point(),
            text: text.to_owned(),
            style,
            colour,
            title: opts.title,
            comment_indicator: opts.comment_indicator,
        };
        let mut frag = Fragment::new(vec![op], size);
        frag.inline = true;
        if opts.main_text {
            frag.text = Some(TextProps {
                offset: opts.offset,
                colour,
                italic: opts.italic,
                bold: opts.bold,
            });
        }
        frag
    }

    fn comment(&mut self, expr: &Expr, scope: Scope) -> Option<Fragment> {
        if self.props.fold_comments {
            return None;
        }
        let comment = expr.comment()?;
        let opts = TextOpts {
            italic: true,
            ..TextOpts::new(self.theme.syntax.comment)
        };
        Some(self.text(expr, scope, comment, opts))
    }

    fn list(&mut self, expr: &Expr, items: &[Expr], scope: Scope) -> Fragment {
        let theme = self.theme;
        let spacing = theme.layout.line_spacing;
        let lines: Vec<Fragment> = items
            .iter()
            .map(|item| {
                let line = self.inner(expr, scope, item);
                materialise_underlines(theme, line)
            })
            .collect();
        let body = vstack(spacing, lines);

        let top = Point::new(3.0, 5.0);
        let length = (body.size.height - 8.0).max(0.0);
        let line = Rect::from_origin_size(top, Size::new(0.0, length));
        let colour = if Self::disabled(expr, scope) {
            theme.syntax.disabled
        } else {
            theme.syntax.list_ruler
        };
        let ruler = Fragment::new(
            vec![DrawOp::Ruler {
                id: expr.id(),
                from: top,
                to: Point::new(top.x, top.y + length),
                hit: line.inflate(5.0, 5.0),
                colour,
            }],
            Size::new(10.0, 0.0),
        );

        let comment = self.comment(expr, scope);
        vstack(spacing, comment.into_iter().chain([hstack(0.0, [ruler, body])]))
    }

    fn literal(&mut self, expr: &Expr, content: &str, ty: LiteralType, scope: Scope) -> Fragment {
        let base = TextOpts {
            title: expr.comment().map(str::to_owned),
            italic: ty == LiteralType::Num,
            ..TextOpts::new(self.theme.syntax.literal)
        };
        let main = TextOpts {
            comment_indicator: expr.comment().is_some(),
            main_text: true,
            ..base.clone()
        };
        let content = self.text(expr, scope, content, main);
        if ty != LiteralType::Text {
            return content;
        }
        let quote = self.text(expr, scope, "\"", base);
        let mut frag = hstack(0.0, [quote.clone(), content, quote]);
        frag.inline = true;
        frag
    }

    fn variable(&mut self, expr: &Expr, name: &str, scope: Scope) -> Fragment {
        let opts = TextOpts {
            title: expr.comment().map(str::to_owned),
            comment_indicator: expr.comment().is_some(),
            main_text: true,
            ..TextOpts::new(self.theme.syntax.variable)
        };
        self.text(expr, scope, name, opts)
    }

    fn blank(&mut self, expr: &Expr, scope: Scope) -> Fragment {
        let theme = self.theme;
        let padding = theme.blank.padding;
        let opts = TextOpts {
            offset: padding.top_left(),
            ..TextOpts::new(theme.blank.text_colour)
        };
        let text = self.text(expr, scope, expr.comment().unwrap_or("?"), opts);

        let highlight = self
            .props
            .highlights
            .iter()
            .rev()
            .find(|(id, _)| *id == expr.id())
            .map_or(&theme.blank.resting, |(_, hl)| hl);

        let mut size = padding.pad_size(text.size);
        if size.width < size.height {
            size.width = size.height;
        }
        let focused = self.props.focused;
        let mut ops = vec![DrawOp::Pill {
            id: expr.id(),
            rect: Rect::from_origin_size(Point::ZERO, size),
            fill: highlight.blank_fill(focused),
            stroke: highlight.blank_stroke(focused),
            droppable: highlight.droppable,
        }];
        ops.extend(text.ops);

        let mut frag = Fragment::new(ops, size);
        frag.inline = true;
        frag
    }

    fn call(&mut self, expr: &Expr, function: &str, args: &[Expr], scope: Scope) -> Fragment {
        let theme = self.theme;
        let folded = self.props.fold_comments;
        let args: Vec<Fragment> = args.iter().map(|a| self.inner(expr, scope, a)).collect();
        let name_opts = TextOpts {
            bold: true,
            comment_indicator: expr.comment().is_some() && folded,
            main_text: true,
            ..TextOpts::new(theme.syntax.call)
        };
        let name = self.text(expr, scope, function, name_opts);
        let space = self.measure.space_width(&TextStyle::regular(theme.font_size));

        // A comment forces block layout, except where it can sit above the line.
        let comment_is_inline = expr.comment().is_none() || folded || scope.list_parent;
        let mut body = if comment_is_inline && is_call_inline(theme, &args) {
            let mut row = hstack(space, std::iter::once(name).chain(args));
            row.is_underlined = true;
            row.inline = true;
            row
        } else {
            let column = vstack(
                theme.layout.line_spacing,
                args.into_iter().map(|a| materialise_underlines(theme, a)),
            );
            hstack(space, [name, column])
        };

        let comment = self.comment(expr, scope);
        if comment.is_some() {
            // The row stands on its own line under the comment.
            body.is_underlined = false;
        }
        vstack(
            theme.layout.line_spacing,
            comment.into_iter().chain([body]),
        )
    }
}

/// Layout entry point owned by an editor: theme, text measurement and a memo cache.
pub struct LayoutEngine {
    theme: Theme,
    generation: u64,
    measure: Box<dyn TextMeasure>,
    cache: LayoutCache,
}

impl std::fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("generation", &self.generation)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl LayoutEngine {
    /// Engine measuring text with `measure`.
    pub fn new(theme: Theme, measure: Box<dyn TextMeasure>) -> Self {
        Self {
            theme,
            generation: 0,
            measure,
            cache: LayoutCache::default(),
        }
    }

    /// Current theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Swap the theme; the next layout is recomputed.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.generation += 1;
    }

    /// `(hits, misses)` of the memo cache.
    pub fn cache_stats(&self) -> (u64, u64) {
        (self.cache.hits, self.cache.misses)
    }

    /// Lay out `expr`, reusing the previous result when nothing it depends on changed.
    #[tracing::instrument(skip_all, fields(root = %expr.id()))]
    pub fn layout(&mut self, expr: &Expr, props: &LayoutProps) -> Arc<LayoutResult> {
        let key = fingerprint_layout(expr, self.generation, props);
        let Self {
            theme,
            measure,
            cache,
            ..
        } = self;
        cache.get_or_insert_with(key, || {
            layout_expr(theme, measure.as_mut(), expr, props)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;

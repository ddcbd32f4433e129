use super::*;

fn leaf(w: f64, h: f64) -> Fragment {
    let mut f = Fragment::new(Vec::new(), Size::new(w, h));
    f.inline = true;
    f
}

fn node(w: f64, h: f64) -> (ExprId, Fragment) {
    let id = ExprId::fresh();
    let mut f = leaf(w, h);
    f.expr = Some(id);
    (id, f)
}

fn text_props() -> TextProps {
    TextProps {
        offset: Vec2::ZERO,
        colour: Colour::rgb(0, 0, 0),
        italic: false,
        bold: true,
    }
}

#[test]
fn hstack_places_side_by_side() {
    let (a, fa) = node(10.0, 5.0);
    let (b, fb) = node(20.0, 8.0);
    let s = hstack(2.0, [fa, fb]);
    assert_eq!(s.size, Size::new(32.0, 8.0));
    assert_eq!(s.areas.len(), 2);
    assert_eq!(s.areas[0].id, a);
    assert_eq!(s.areas[1].id, b);
    assert_eq!(s.areas[1].rect, Rect::new(12.0, 0.0, 32.0, 8.0));
    assert!(!s.inline);
}

#[test]
fn vstack_of_one_is_the_child() {
    let (a, mut fa) = node(10.0, 5.0);
    fa.is_underlined = true;
    let s = vstack(4.0, [fa]);
    assert_eq!(s.expr, Some(a));
    assert!(s.inline && s.is_underlined);

    let empty = vstack(4.0, []);
    assert_eq!(empty.size, Size::ZERO);
}

#[test]
fn anonymous_children_hoist_their_areas() {
    let (a, fa) = node(10.0, 5.0);
    let inner = hstack(0.0, [leaf(3.0, 5.0), fa]);
    let outer = vstack(2.0, [leaf(1.0, 4.0), inner]);
    assert_eq!(outer.areas.len(), 1);
    assert_eq!(outer.areas[0].id, a);
    assert_eq!(outer.areas[0].rect.origin(), Point::new(3.0, 6.0));
    assert_eq!(outer.size, Size::new(13.0, 11.0));
}

#[test]
fn text_props_follow_the_first_anonymous_child() {
    let mut name = leaf(10.0, 5.0);
    name.text = Some(text_props());
    let row = hstack(1.0, [name, leaf(4.0, 5.0)]);
    let stacked = vstack(3.0, [leaf(20.0, 7.0), row]);
    assert_eq!(stacked.text.map(|t| t.offset), Some(Vec2::new(0.0, 10.0)));

    let (_, mut owned) = node(10.0, 5.0);
    owned.text = Some(text_props());
    assert!(hstack(0.0, [owned]).text.is_none());
}

#[test]
fn underlined_child_gets_a_pending_underline() {
    let (_, mut call) = node(30.0, 10.0);
    call.is_underlined = true;
    assert_eq!(call.underline_depth(), 1);

    let row = hstack(0.0, [leaf(5.0, 10.0), call]);
    assert_eq!(
        row.underlines.as_slice(),
        &[PendingUnderline {
            offset: 5.0,
            length: 30.0,
            level: 1
        }]
    );
    assert_eq!(row.underline_depth(), 1);
}

#[test]
fn nested_underlines_stack_levels() {
    let (_, mut inner) = node(10.0, 10.0);
    inner.is_underlined = true;
    let mut middle = hstack(1.0, [leaf(4.0, 10.0), inner]);
    middle.expr = Some(ExprId::fresh());
    middle.is_underlined = true;
    assert_eq!(middle.underline_depth(), 2);

    let outer = hstack(1.0, [leaf(2.0, 10.0), middle]);
    let mut levels: Vec<usize> = outer.underlines.iter().map(|u| u.level).collect();
    levels.sort();
    assert_eq!(levels, vec![1, 2]);
}

#[test]
fn materialise_draws_and_pads() {
    let theme = Theme::default();
    let gap = theme.layout.underline_spacing;
    let (_, mut call) = node(30.0, 10.0);
    call.is_underlined = true;
    let row = hstack(0.0, [leaf(5.0, 10.0), call]);

    let done = materialise_underlines(&theme, row);
    assert!(done.underlines.is_empty());
    assert!(!done.is_underlined);
    assert_eq!(done.size.height, 10.0 + gap);
    assert_eq!(
        done.ops,
        vec![DrawOp::Underline {
            from: Point::new(5.0, 10.0 + gap),
            to: Point::new(35.0, 10.0 + gap),
        }]
    );
    assert_eq!(done.areas[0].rect.height(), 10.0 + gap);
}

#[test]
fn materialise_leaves_block_areas_alone() {
    let theme = Theme::default();
    let (_, mut block) = node(10.0, 4.0);
    block.inline = false;
    let s = vstack(0.0, [block, leaf(1.0, 6.0)]);
    let done = materialise_underlines(&theme, s);
    assert_eq!(done.areas[0].rect.height(), 4.0);
}

use super::*;
use crate::expr::dsl::{blank, call, num, var};
use crate::layout::theme::Highlight;

fn props() -> LayoutProps {
    LayoutProps {
        focused: true,
        ..LayoutProps::default()
    }
}

#[test]
fn same_inputs_same_key() {
    let t = call("Add", [num(1), blank()]);
    assert_eq!(
        fingerprint_layout(&t, 0, &props()),
        fingerprint_layout(&t, 0, &props())
    );
}

#[test]
fn content_ids_and_flags_change_the_key() {
    let t = call("Add", [num(1), var("x")]);
    let base = fingerprint_layout(&t, 0, &props());

    let renamed = t.update(t.children()[1].id(), |e| Some(e.with_value("y"))).unwrap();
    assert_ne!(fingerprint_layout(&renamed, 0, &props()), base);
    assert_ne!(fingerprint_layout(&t.reset_ids(), 0, &props()), base);
    assert_ne!(fingerprint_layout(&t, 1, &props()), base);

    let folded = LayoutProps {
        fold_comments: true,
        ..props()
    };
    assert_ne!(fingerprint_layout(&t, 0, &folded), base);

    let commented = t.with_comment(Some("c".into()));
    assert_ne!(fingerprint_layout(&commented, 0, &props()), base);
}

#[test]
fn only_blank_highlights_matter() {
    let b = blank();
    let x = var("x");
    let t = call("Add", [x.clone(), b.clone()]);
    let base = fingerprint_layout(&t, 0, &props());
    let hl = Highlight::new(Colour::rgb(1, 2, 3), Colour::rgb(4, 5, 6));

    let on_var = LayoutProps {
        highlights: vec![(x.id(), hl.clone())],
        ..props()
    };
    assert_eq!(fingerprint_layout(&t, 0, &on_var), base);

    let stale = LayoutProps {
        highlights: vec![(num(9).id(), hl.clone())],
        ..props()
    };
    assert_eq!(fingerprint_layout(&t, 0, &stale), base);

    let on_blank = LayoutProps {
        highlights: vec![(b.id(), hl)],
        ..props()
    };
    assert_ne!(fingerprint_layout(&t, 0, &on_blank), base);
}

use super::*;
use crate::expr::dsl::{blank, boolean, call, hint, list, num, text, var};
use crate::expr::model::ExprKind;

#[test]
fn value_of_each_case() {
    assert_eq!(hint("Value").value(), Some(""));
    assert_eq!(num("1.5").value(), Some("1.5"));
    assert_eq!(text("a b").value(), Some("a b"));
    assert_eq!(boolean(true).value(), Some("true"));
    assert_eq!(var("x").value(), Some("x"));
    assert_eq!(call("Add", []).value(), None);
    assert_eq!(list([]).value(), None);
}

#[test]
fn empty_text_on_blank_stays_blank() {
    let b = blank();
    let next = b.with_value("");
    assert!(next.is_blank());
    assert_eq!(next.id(), b.id());
    assert!(b.with_value("   ").is_blank());
}

#[test]
fn classifies_numbers_keeping_spelling() {
    for s in ["1", "-2", "3.25", ".5", "1e9", "-1.5E-3", "007"] {
        let e = blank().with_value(s);
        assert_eq!(
            e.kind(),
            &ExprKind::Literal {
                content: s.to_owned(),
                ty: LiteralType::Num
            },
            "{s}"
        );
    }
}

#[test]
fn rejects_malformed_numbers_as_variables() {
    for s in ["1.", "-", "1e", "1e+", "--1", "1.2.3", "x1", "1x"] {
        assert!(!is_number(s), "{s}");
        assert!(matches!(blank().with_value(s).kind(), ExprKind::Variable { .. }), "{s}");
    }
}

#[test]
fn quotes_make_text() {
    let e = var("x").with_value(r#""hello""#);
    assert_eq!(e.to_string(), r#""hello""#);
    let open = blank().with_value(r#""open"#);
    assert_eq!(open.value(), Some("open"));
}

#[test]
fn booleans_and_variables() {
    assert!(matches!(
        blank().with_value("false").kind(),
        ExprKind::Literal {
            ty: LiteralType::Bool,
            ..
        }
    ));
    assert_eq!(num(1).with_value("  count ").to_string(), "count");
}

#[test]
fn text_literals_keep_raw_text() {
    let t = text("a");
    let next = t.with_value("  12 ");
    assert_eq!(next.value(), Some("  12 "));
    assert_eq!(next.id(), t.id());
}

#[test]
fn containers_are_unchanged_and_data_is_kept() {
    let c = call("Add", []);
    assert!(c.with_value("x").ptr_eq(&c));

    let v = var("x").with_comment(Some("note".into())).with_disabled(true);
    let next = v.with_value("2");
    assert_eq!(next.comment(), Some("note"));
    assert!(next.is_disabled());
}

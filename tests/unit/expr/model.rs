use super::*;
use crate::expr::dsl::{blank, call, hint, list, num, text, var};

#[test]
fn display_is_compact_sexpr() {
    let e = list([
        call("Add", [num(1), num("2.5")]),
        call("Print", [text("hi"), var("x"), blank()]),
        call("Now", []),
    ]);
    assert_eq!(e.to_string(), r#"[(Add 1 2.5) (Print "hi" x _) (Now)]"#);
}

#[test]
fn children_only_for_containers() {
    let c = call("Add", [num(1), num(2)]);
    assert_eq!(c.children().len(), 2);
    assert!(c.is_container());
    assert!(num(1).children().is_empty());
    assert!(!var("x").is_container());
}

#[test]
fn with_children_keeps_identity_and_data() {
    let c = call("Add", [num(1)]).with_comment(Some("sum".into()));
    let next = c.with_children(vec![num(3), num(4)]);
    assert_eq!(next.id(), c.id());
    assert_eq!(next.comment(), Some("sum"));
    assert_eq!(next.to_string(), "(Add 3 4)");

    let leaf = var("y");
    assert!(leaf.with_children(vec![num(1)]).ptr_eq(&leaf));
}

#[test]
fn empty_comment_clears() {
    let b = hint("Value");
    assert_eq!(b.comment(), Some("Value"));
    assert_eq!(b.with_comment(Some(String::new())).comment(), None);
    assert!(b.with_disabled(true).is_disabled());
}

#[test]
fn serde_roundtrip_drops_ids_but_keeps_shape() {
    let e = call(
        "If",
        [hint("cond"), list([num(1), text("a b")]).with_disabled(true)],
    );
    let json = serde_json::to_string(&e).unwrap();
    assert!(!json.contains("\"id\""));
    assert!(json.contains(r#""type":"call""#));
    assert!(json.contains(r#""disabled":true"#));

    let back: Expr = serde_json::from_str(&json).unwrap();
    assert_eq!(back.to_string(), e.to_string());
    assert_ne!(back.id(), e.id());
    assert_eq!(back.children()[0].comment(), Some("cond"));
    assert!(back.children()[1].is_disabled());
}

#[test]
fn deserializes_hand_written_json() {
    let json = r#"{
        "type": "call",
        "function": "Add",
        "args": [
            { "type": "literal", "content": "1", "literal_type": "num" },
            { "type": "variable", "name": "x", "comment": "input" },
            { "type": "blank" }
        ]
    }"#;
    let e: Expr = serde_json::from_str(json).unwrap();
    assert_eq!(e.to_string(), "(Add 1 x _)");
    assert_eq!(e.children()[1].comment(), Some("input"));
}

use super::*;
use crate::expr::model::ExprKind;

#[test]
fn special_forms_are_recognised() {
    for name in SPECIAL_FUNCTIONS {
        assert!(is_special(name));
    }
    assert!(!is_special("Add"));
    assert!(!is_special("if"));
}

#[test]
fn builtin_template_has_one_hinted_blank_per_parameter() {
    let b = Builtins::default();
    let t = b.template("Add").unwrap();
    assert_eq!(t.to_string(), "(Add _ _)");
    let hints: Vec<Option<&str>> = t.children().iter().map(Expr::comment).collect();
    assert_eq!(hints, vec![Some("a"), Some("b")]);
    assert!(b.template("Nope").is_none());
}

#[test]
fn call_template_covers_special_forms() {
    let b = Builtins::default();
    let t = call_template(&b, "Let").unwrap();
    assert_eq!(t.to_string(), "(Let Variable _)");
    assert!(call_template(&b, "Print").is_some());
    assert!(call_template(&Builtins::empty(), "Print").is_none());
}

#[test]
fn toy_box_groups_templates_by_category() {
    let tabs = toy_box(&Builtins::default());
    let general = &tabs[&Category::General];
    assert_eq!(general.len(), 5);
    assert!(matches!(general[0].kind(), ExprKind::List { .. }));
    assert_eq!(general[1].to_string(), "(If _ _)");

    let maths: Vec<String> = tabs[&Category::Maths].iter().map(|e| e.to_string()).collect();
    assert!(maths.contains(&"(Add _ _)".to_owned()));
    // Uncategorised builtins stay out of the toy box.
    assert!(tabs.values().flatten().all(|e| !e.to_string().starts_with("(Sleep")));
}

#[test]
fn define_replaces_entries() {
    let mut b = Builtins::empty();
    b.define("Twice", &["x"], Some(Category::Maths), "Double x.");
    b.define("Twice", &["value"], None, "Double a value.");
    assert!(b.contains("Twice"));
    let f = b.get("Twice").unwrap();
    assert_eq!(f.args, vec!["value".to_owned()]);
    assert_eq!(f.category, None);
    assert_eq!(b.iter().count(), 1);
}

use crate::expr::dsl::{blank, call, list, num, var};
use crate::expr::model::Expr;

fn sample() -> Expr {
    // [(Add 1 (Mul x 2)) _ y]
    list([call("Add", [num(1), call("Mul", [var("x"), num(2)])]), blank(), var("y")])
}

#[test]
fn find_and_contains() {
    let t = sample();
    let mul = t.children()[0].children()[1].clone();
    assert!(t.find_id(mul.id()).unwrap().ptr_eq(&mul));
    assert!(t.contains(t.id()));
    assert!(!t.contains(num(1).id()));
}

#[test]
fn parent_and_parents_chain() {
    let t = sample();
    let add = &t.children()[0];
    let x = &add.children()[1].children()[0];
    assert_eq!(t.parent_of(x.id()).unwrap().to_string(), "(Mul x 2)");
    let chain: Vec<String> = t.parents(x.id()).iter().map(|e| e.to_string()).collect();
    assert_eq!(
        chain,
        vec!["(Mul x 2)", "(Add 1 (Mul x 2))", "[(Add 1 (Mul x 2)) _ y]"]
    );
    assert!(t.parent_of(t.id()).is_none());
    assert!(t.parents(t.id()).is_empty());
}

#[test]
fn siblings_of_root_and_child() {
    let t = sample();
    let blank_id = t.children()[1].id();
    let (sibs, ix) = t.siblings(blank_id);
    assert_eq!(sibs.len(), 3);
    assert_eq!(ix, Some(1));

    let (sibs, ix) = t.siblings(t.id());
    assert!(sibs.is_empty());
    assert_eq!(ix, None);
}

#[test]
fn update_removes_second_argument() {
    let t = call("Add", [num(1), num(2)]);
    let second = t.children()[1].id();
    let next = t.update(second, |_| None).unwrap();
    assert_eq!(next.to_string(), "(Add 1)");
    assert_eq!(next.id(), t.id());
    assert!(next.children()[0].ptr_eq(&t.children()[0]));
}

#[test]
fn update_shares_untouched_subtrees() {
    let t = sample();
    let x = t.children()[0].children()[1].children()[0].id();
    let next = t.update(x, |_| Some(var("z"))).unwrap();
    assert_eq!(next.to_string(), "[(Add 1 (Mul z 2)) _ y]");
    assert!(next.children()[1].ptr_eq(&t.children()[1]));
    assert!(next.children()[2].ptr_eq(&t.children()[2]));
    assert!(next.children()[0].children()[0].ptr_eq(&t.children()[0].children()[0]));
    assert!(!next.children()[0].ptr_eq(&t.children()[0]));
    // The input is untouched.
    assert_eq!(t.to_string(), "[(Add 1 (Mul x 2)) _ y]");
}

#[test]
fn update_root_to_none_and_missing_id() {
    let t = sample();
    assert!(t.update(t.id(), |_| None).is_none());
    assert!(t.update(num(3).id(), |e| Some(e.clone())).is_none());
}

#[test]
fn reset_ids_is_disjoint_and_same_shape() {
    let t = sample();
    let fresh = t.reset_ids();
    assert_eq!(fresh.to_string(), t.to_string());
    let old: std::collections::HashSet<_> = t.preorder().map(Expr::id).collect();
    assert!(fresh.preorder().all(|e| !old.contains(&e.id())));
}

#[test]
fn replace_id_forces_root_only() {
    let t = sample();
    let other = call("Neg", [num(1)]);
    let forced = other.replace_id(t.id());
    assert_eq!(forced.id(), t.id());
    assert_eq!(forced.children()[0].id(), other.children()[0].id());
}

#[test]
fn preorder_and_blanks() {
    let t = sample();
    let order: Vec<String> = t.preorder().map(|e| e.to_string()).collect();
    assert_eq!(order[1], "(Add 1 (Mul x 2))");
    assert_eq!(order[2], "1");
    assert_eq!(order[3], "(Mul x 2)");
    assert_eq!(order[6], "_");
    assert_eq!(t.len(), 8);
    assert_eq!(t.blanks(), vec![t.children()[1].id()]);
}

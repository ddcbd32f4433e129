use super::*;
use crate::expr::dsl::{blank, call, num};

fn workspace() -> MemoryWorkspace {
    let mut ws = MemoryWorkspace::new();
    ws.insert("main", call("Add", [num(1), num(2)])).unwrap();
    ws
}

#[test]
fn get_reports_unknown_and_special_names() {
    let ws = workspace();
    assert!(ws.get("main").is_ok());
    assert!(matches!(ws.get("nope"), Err(EditorError::UnknownFunction(n)) if n == "nope"));
    assert!(matches!(ws.get("If"), Err(EditorError::NotAFunction(_))));
}

#[test]
fn special_names_cannot_be_stored() {
    let mut ws = MemoryWorkspace::new();
    assert!(ws.insert("While", blank()).is_err());
    assert!(!ws.contains("While"));
}

#[test]
fn update_records_history_and_undo_restores() {
    let mut ws = workspace();
    let before = ws.get("main").unwrap();
    ws.update("main", &mut |t: &Expr| t.remove(t.children()[1].id()).unwrap())
        .unwrap();
    assert_eq!(ws.get("main").unwrap().to_string(), "(Add 1)");
    assert_eq!(ws.history_len("main"), 1);

    assert!(ws.undo("main").unwrap());
    assert!(ws.get("main").unwrap().ptr_eq(&before));
    assert_eq!(ws.history_len("main"), 0);
    assert!(!ws.undo("main").unwrap());
}

#[test]
fn unchanged_update_records_nothing() {
    let mut ws = workspace();
    ws.update("main", &mut |t: &Expr| t.clone()).unwrap();
    assert_eq!(ws.history_len("main"), 0);
}

#[test]
fn json_round_trip_assigns_fresh_ids() {
    let ws = workspace();
    let mut buf = Vec::new();
    ws.to_writer(&mut buf).unwrap();
    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.contains("\"functions\""));
    assert!(!text.contains("\"id\""));

    let loaded = MemoryWorkspace::from_reader(buf.as_slice()).unwrap();
    let a = ws.get("main").unwrap();
    let b = loaded.get("main").unwrap();
    assert_eq!(a.to_string(), b.to_string());
    assert_ne!(a.id(), b.id());
    assert_eq!(loaded.function_names(), vec!["main".to_owned()]);
}

#[test]
fn malformed_json_is_a_validation_error() {
    let err = MemoryWorkspace::from_reader("{\"functions\": 3}".as_bytes()).unwrap_err();
    assert!(matches!(err, EditorError::Validation(_)));
    let err = MemoryWorkspace::from_reader(r#"{"functions": {"If": {"type": "blank"}}}"#.as_bytes())
        .unwrap_err();
    assert!(matches!(err, EditorError::NotAFunction(_)));
}

#[test]
fn save_and_load_from_disk() {
    let dir = std::path::PathBuf::from("target").join("workspace_unit");
    let path = dir.join("ws.json");
    let ws = workspace();
    ws.save(&path).unwrap();
    let loaded = MemoryWorkspace::from_path(&path).unwrap();
    assert_eq!(loaded.get("main").unwrap().to_string(), "(Add 1 2)");
    assert!(MemoryWorkspace::from_path(dir.join("missing.json")).is_err());
}

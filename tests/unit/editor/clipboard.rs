use super::*;
use crate::expr::dsl::num;

fn entry(n: i32, pinned: bool) -> ClipboardEntry {
    ClipboardEntry {
        expr: num(n),
        pinned,
    }
}

fn contents(c: &MemoryClipboard) -> Vec<String> {
    c.entries().iter().map(|e| e.expr.to_string()).collect()
}

#[test]
fn newest_entry_takes_slot_zero() {
    let mut c = MemoryClipboard::new();
    c.add(entry(1, false));
    c.add(entry(2, false));
    assert_eq!(contents(&c), vec!["2", "1"]);
}

#[test]
fn history_keeps_ten_unpinned_entries_and_all_pinned_ones() {
    let mut c = MemoryClipboard::new();
    c.add(entry(0, true));
    for n in 1..=12 {
        c.add(entry(n, false));
    }
    assert_eq!(c.entries().len(), CLIPBOARD_HISTORY + 1);
    assert_eq!(contents(&c)[0], "12");
    assert!(c.entries().iter().any(|e| e.pinned));
    assert!(!contents(&c).contains(&"1".to_owned()));
}

#[test]
fn using_an_entry_moves_it_to_the_front() {
    let mut c = MemoryClipboard::new();
    let first = entry(1, false);
    let id = first.expr.id();
    c.add(first);
    c.add(entry(2, false));
    c.use_entry(id);
    assert_eq!(contents(&c), vec!["1", "2"]);

    c.use_entry(ExprId::fresh());
    assert_eq!(contents(&c), vec!["1", "2"]);
}

#[test]
fn pinned_entries_keep_their_slot() {
    let mut c = MemoryClipboard::new();
    let pinned = entry(1, true);
    let id = pinned.expr.id();
    c.add(pinned);
    c.add(entry(2, false));
    c.use_entry(id);
    assert_eq!(contents(&c), vec!["2", "1"]);
}

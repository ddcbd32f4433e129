use super::*;

struct Fixed(Vec<&'static str>);

impl SuggestionSearch for Fixed {
    fn search(&self, query: &str) -> Vec<Suggestion> {
        if query.is_empty() {
            return Vec::new();
        }
        self.0
            .iter()
            .map(|name| Suggestion {
                name: (*name).to_owned(),
                special: false,
            })
            .collect()
    }
}

#[test]
fn typing_resets_the_highlight_to_the_top() {
    let search = Fixed(vec!["Add", "And", "Abs"]);
    let mut edit = InlineEdit::new(ExprId::fresh(), "", true, &search);
    assert_eq!(edit.selected_index(), None);
    edit.set_text("a", &search);
    assert_eq!(edit.selected_index(), Some(0));
    assert_eq!(edit.choice(), None);
    assert_eq!(edit.submission(), "a");
}

#[test]
fn moving_the_highlight_makes_it_the_choice() {
    let search = Fixed(vec!["Add", "And", "Abs"]);
    let mut edit = InlineEdit::new(ExprId::fresh(), "a", true, &search);
    assert!(edit.move_selection(1));
    assert_eq!(edit.submission(), "And");
    edit.set_text("ab", &search);
    assert_eq!(edit.selected_index(), Some(0));
    assert_eq!(edit.submission(), "ab");
}

#[test]
fn exact_name_is_chosen_without_moving() {
    let search = Fixed(vec!["Add", "And", "Abs"]);
    let mut edit = InlineEdit::new(ExprId::fresh(), "And", true, &search);
    assert_eq!(edit.choice().map(|s| s.name.as_str()), Some("And"));
    edit.set_text("and", &search);
    assert_eq!(edit.choice(), None);
}

#[test]
fn highlight_wraps_both_ways() {
    let search = Fixed(vec!["Add", "And", "Abs"]);
    let mut edit = InlineEdit::new(ExprId::fresh(), "a", true, &search);
    assert!(edit.move_selection(-1));
    assert_eq!(edit.selected_index(), Some(2));
    assert!(edit.move_selection(1));
    assert_eq!(edit.selected_index(), Some(0));
    assert_eq!(edit.selected().map(|s| s.name.as_str()), Some("Add"));
}

#[test]
fn without_suggestions_the_text_is_submitted() {
    let search = Fixed(vec!["Add"]);
    let mut edit = InlineEdit::new(ExprId::fresh(), "12", false, &search);
    assert!(edit.suggestions().is_empty());
    assert!(!edit.move_selection(1));
    assert_eq!(edit.submission(), "12");
    edit.set_text("13", &search);
    assert_eq!(edit.text(), "13");
    assert_eq!(edit.submission(), "13");
}

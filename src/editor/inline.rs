use crate::editor::suggest::{Suggestion, SuggestionSearch};
use crate::foundation::ids::ExprId;

/// An in-progress inline text edit of one leaf.
///
/// Suggestions are re-queried on every change and the highlighted row resets to the top; with no
/// suggestions nothing is highlighted. A highlight only counts as a choice once the user moves it,
/// or when the text names the suggestion exactly.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineEdit {
    target: ExprId,
    text: String,
    suggest: bool,
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
    moved: bool,
}

impl InlineEdit {
    /// Start editing `target` with its current `text`. `suggest` enables completion.
    pub fn new(
        target: ExprId,
        text: impl Into<String>,
        suggest: bool,
        search: &dyn SuggestionSearch,
    ) -> Self {
        let mut edit = Self {
            target,
            text: String::new(),
            suggest,
            suggestions: Vec::new(),
            selected: None,
            moved: false,
        };
        edit.set_text(text, search);
        edit
    }

    /// Node being edited.
    pub fn target(&self) -> ExprId {
        self.target
    }

    /// Pending text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the pending text and refresh suggestions.
    pub fn set_text(&mut self, text: impl Into<String>, search: &dyn SuggestionSearch) {
        self.text = text.into();
        self.suggestions = if self.suggest {
            search.search(&self.text)
        } else {
            Vec::new()
        };
        self.selected = (!self.suggestions.is_empty()).then_some(0);
        self.moved = false;
    }

    /// Current completion candidates.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Index of the highlighted suggestion.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Highlighted suggestion.
    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected.and_then(|ix| self.suggestions.get(ix))
    }

    /// Move the highlight by `delta` rows, wrapping at both ends.
    ///
    /// From no highlight, down lands on the first row and up on the last. `false` when there are
    /// no suggestions.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        let len = self.suggestions.len();
        if len == 0 {
            return false;
        }
        let from = match self.selected {
            Some(ix) => ix as isize + delta,
            None if delta > 0 => 0,
            None => -1,
        };
        self.selected = Some(from.rem_euclid(len as isize) as usize);
        self.moved = true;
        true
    }

    /// Suggestion the user picked: the highlighted row after moving through the list, else the
    /// one whose name is exactly the pending text.
    pub fn choice(&self) -> Option<&Suggestion> {
        if self.moved {
            return self.selected();
        }
        self.suggestions.iter().find(|s| s.name == self.text)
    }

    /// Text to commit: the chosen suggestion's name, else the pending text.
    pub fn submission(&self) -> &str {
        self.choice().map_or(self.text.as_str(), |s| s.name.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/inline.rs"]
mod tests;

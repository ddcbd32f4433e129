use std::cmp::Ordering;

use crate::editor::builtins::{Builtins, SPECIAL_FUNCTIONS};
use crate::editor::workspace::Workspace;

/// Results returned per query.
pub const MAX_SUGGESTIONS: usize = 5;

/// Fuzzy matches below this Jaro-Winkler similarity are dropped.
const FUZZY_THRESHOLD: f64 = 0.8;

/// One completion candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// Function name to insert.
    pub name: String,
    /// Reserved form rather than an ordinary function.
    pub special: bool,
}

/// Ranked completion of a partially typed name.
pub trait SuggestionSearch {
    /// Best candidates for `query`, best first.
    fn search(&self, query: &str) -> Vec<Suggestion>;
}

/// Name index over workspace functions, builtins and special forms.
///
/// Exact matches rank first, then prefixes, then substrings, then fuzzy matches; ties break on
/// similarity and then name. Matching ignores case. The empty query matches nothing.
#[derive(Clone, Debug, Default)]
pub struct FunctionIndex {
    entries: Vec<Suggestion>,
}

impl FunctionIndex {
    /// Index `functions`, plus the special forms when `with_specials` is set.
    pub fn new<S: Into<String>>(functions: impl IntoIterator<Item = S>, with_specials: bool) -> Self {
        let mut entries: Vec<Suggestion> = functions
            .into_iter()
            .map(|name| Suggestion {
                name: name.into(),
                special: false,
            })
            .collect();
        if with_specials {
            entries.extend(SPECIAL_FUNCTIONS.iter().map(|name| Suggestion {
                name: (*name).to_owned(),
                special: true,
            }));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries.dedup_by(|a, b| a.name == b.name);
        tracing::debug!(entries = entries.len(), "indexed functions");
        Self { entries }
    }

    /// Index every workspace function, every builtin and the special forms.
    pub fn from_sources(workspace: &dyn Workspace, builtins: &Builtins) -> Self {
        let names = workspace
            .function_names()
            .into_iter()
            .chain(builtins.iter().map(|(name, _)| name.to_owned()));
        Self::new(names, true)
    }

    /// Number of indexed names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn tier(query: &str, name: &str) -> Option<u8> {
    if name == query {
        Some(0)
    } else if name.starts_with(query) {
        Some(1)
    } else if name.contains(query) {
        Some(2)
    } else if strsim::jaro_winkler(query, name) >= FUZZY_THRESHOLD {
        Some(3)
    } else {
        None
    }
}

impl SuggestionSearch for FunctionIndex {
    fn search(&self, query: &str) -> Vec<Suggestion> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let mut ranked: Vec<(u8, f64, &Suggestion)> = self
            .entries
            .iter()
            .filter_map(|s| {
                let name = s.name.to_lowercase();
                let tier = tier(&query, &name)?;
                Some((tier, strsim::jaro_winkler(&query, &name), s))
            })
            .collect();
        ranked.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then(b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
                .then_with(|| a.2.name.cmp(&b.2.name))
        });
        ranked
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, _, s)| s.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/suggest.rs"]
mod tests;

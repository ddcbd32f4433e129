use std::collections::BTreeMap;
use std::fmt;

use crate::editor::actions::Action;
use crate::foundation::error::{EditorError, EditorResult};
use crate::select::{self, SelectFn};

/// A key press as the host reports it, using DOM-style key names (`"a"`, `"Enter"`, `" "`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// Key name.
    pub key: String,
    /// Control held.
    pub ctrl: bool,
    /// Alt/option held.
    pub alt: bool,
    /// Meta/command held.
    pub meta: bool,
}

impl KeyPress {
    /// A key without modifiers.
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Whether a chord modifier is held. Shift is part of the key name.
    pub fn has_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }

    /// Parse a token such as `d`, `Space`, `ArrowDown` or `ctrl+c`.
    pub fn parse(token: &str) -> EditorResult<Self> {
        let mut press = KeyPress::default();
        let mut parts: Vec<&str> = token.split('+').collect();
        // A lone "+" or a chord ending in "+" names the plus key itself.
        let key = if token.ends_with('+') {
            parts.retain(|p| !p.is_empty());
            "+"
        } else {
            parts.pop().unwrap_or_default()
        };
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => press.ctrl = true,
                "alt" | "option" => press.alt = true,
                "meta" | "cmd" | "super" => press.meta = true,
                other => {
                    return Err(EditorError::validation(format!(
                        "unknown modifier '{other}' in key '{token}'"
                    )));
                }
            }
        }
        press.key = match key {
            "" => return Err(EditorError::validation("empty key")),
            "Space" | "space" => " ".to_owned(),
            "Esc" => "Escape".to_owned(),
            "Return" => "Enter".to_owned(),
            "Up" => "ArrowUp".to_owned(),
            "Down" => "ArrowDown".to_owned(),
            "Left" => "ArrowLeft".to_owned(),
            "Right" => "ArrowRight".to_owned(),
            other => other.to_owned(),
        };
        Ok(press)
    }
}

/// Selection movements bound to keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Motion {
    /// Structural parent.
    Parent,
    /// Previous sibling.
    LeftSibling,
    /// Next sibling.
    RightSibling,
    /// Nearest node to the left.
    Left,
    /// Nearest node to the right.
    Right,
    /// Nearest node above.
    Up,
    /// Nearest node below.
    Down,
    /// Next blank, wrapping.
    NextBlank,
}

impl Motion {
    /// Navigation function implementing this motion.
    pub fn select_fn(self) -> SelectFn {
        match self {
            Motion::Parent => select::parent,
            Motion::LeftSibling => select::left_sibling_smart,
            Motion::RightSibling => select::right_sibling_smart,
            Motion::Left => select::left_smart,
            Motion::Right => select::right_smart,
            Motion::Up => select::up_smart,
            Motion::Down => select::down_smart,
            Motion::NextBlank => select::next_blank,
        }
    }
}

/// What a bound key does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run a node action on the selection.
    Action(Action),
    /// Context-dependent blank insertion.
    SmartSpace,
    /// Replace the selection with clipboard slot `n`.
    Paste(usize),
    /// Move the selection.
    Select(Motion),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Action(a) => write!(f, "action {a}"),
            Command::SmartSpace => f.write_str("smart space"),
            Command::Paste(n) => write!(f, "paste slot {n}"),
            Command::Select(m) => write!(f, "select {m:?}"),
        }
    }
}

/// Key bindings of an editor: every action's menu key plus the editor-only shortcuts.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyMap {
    bindings: BTreeMap<String, Command>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::standard()
    }
}

impl KeyMap {
    /// The standard bindings.
    ///
    /// # Panics
    ///
    /// If two commands share a key.
    pub fn standard() -> Self {
        let mut map = Self {
            bindings: BTreeMap::new(),
        };
        for action in Action::ALL {
            map.bind(action.key(), Command::Action(action));
        }
        map.bind(" ", Command::SmartSpace);
        for slot in 0..10 {
            let key = (slot + 1) % 10;
            map.bind(&key.to_string(), Command::Paste(slot));
        }
        let motions = [
            ("ArrowDown", Motion::Down),
            ("j", Motion::Down),
            ("ArrowUp", Motion::Up),
            ("k", Motion::Up),
            ("ArrowLeft", Motion::Left),
            ("h", Motion::Left),
            ("ArrowRight", Motion::Right),
            ("l", Motion::Right),
            ("H", Motion::LeftSibling),
            ("L", Motion::RightSibling),
            ("p", Motion::Parent),
            ("Tab", Motion::NextBlank),
        ];
        for (key, motion) in motions {
            map.bind(key, Command::Select(motion));
        }
        map
    }

    /// Bind `key` to `command`.
    ///
    /// # Panics
    ///
    /// If `key` is already bound.
    pub fn bind(&mut self, key: &str, command: Command) {
        if let Some(existing) = self.bindings.insert(key.to_owned(), command) {
            panic!("key {key:?} bound to both {existing} and {command}");
        }
    }

    /// Command for `press`. Chords with ctrl/alt/meta are never bound.
    pub fn lookup(&self, press: &KeyPress) -> Option<Command> {
        if press.has_modifier() {
            return None;
        }
        self.bindings.get(&press.key).copied()
    }

    /// Key bound to `action`.
    pub fn key_for(&self, action: Action) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, c)| **c == Command::Action(action))
            .map(|(k, _)| k.as_str())
    }

    /// Every binding, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Command)> {
        self.bindings.iter().map(|(k, c)| (k.as_str(), *c))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/keys.rs"]
mod tests;

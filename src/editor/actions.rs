use std::fmt;

/// Node actions shared by the context menu and keyboard dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    /// Start inline editing.
    Edit,
    /// Put the node on the clipboard.
    Copy,
    /// Remove the node.
    Delete,
    /// Copy, then remove.
    Move,
    /// Replace the node with a blank.
    Replace,
    /// Copy, then replace with a blank.
    Shuffle,
    /// Add a blank as the last child.
    Append,
    /// Add a blank sibling after the node.
    Insert,
    /// Add a blank sibling before the node.
    InsertBefore,
    /// Ask the host for a comment.
    Comment,
    /// Toggle the disabled flag.
    Disable,
    /// Toggle comment folding for the whole editor.
    FoldComments,
}

impl Action {
    /// Every action, in menu order.
    pub const ALL: [Action; 12] = [
        Action::Edit,
        Action::Copy,
        Action::Delete,
        Action::Move,
        Action::Replace,
        Action::Shuffle,
        Action::Append,
        Action::Insert,
        Action::InsertBefore,
        Action::Comment,
        Action::Disable,
        Action::FoldComments,
    ];

    /// Stable name used by hosts and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            Action::Edit => "edit",
            Action::Copy => "copy",
            Action::Delete => "delete",
            Action::Move => "move",
            Action::Replace => "replace",
            Action::Shuffle => "shuffle",
            Action::Append => "append",
            Action::Insert => "insert",
            Action::InsertBefore => "insertBefore",
            Action::Comment => "comment",
            Action::Disable => "disable",
            Action::FoldComments => "foldComments",
        }
    }

    /// Action called `name`.
    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Context menu label.
    pub fn label(self) -> &'static str {
        match self {
            Action::Edit => "Edit...",
            Action::Copy => "Copy",
            Action::Delete => "Delete",
            Action::Move => "Delete and Copy",
            Action::Replace => "Replace",
            Action::Shuffle => "Replace and Copy",
            Action::Append => "Add Argument",
            Action::Insert => "New Line",
            Action::InsertBefore => "New Line Before",
            Action::Comment => "Comment...",
            Action::Disable => "Disable",
            Action::FoldComments => "Fold Comments",
        }
    }

    /// Keyboard shortcut shown next to the label.
    pub fn key(self) -> &'static str {
        match self {
            Action::Edit => "Enter",
            Action::Copy => "c",
            Action::Delete => "d",
            Action::Move => "m",
            Action::Replace => "r",
            Action::Shuffle => "s",
            Action::Append => "a",
            Action::Insert => "i",
            Action::InsertBefore => "I",
            Action::Comment => "q",
            Action::Disable => "/",
            Action::FoldComments => "#",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the context menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    /// An action with its label and shortcut.
    Item {
        /// What the row does.
        action: Action,
        /// Row text.
        label: &'static str,
        /// Shortcut hint.
        key: &'static str,
    },
    /// Divider between groups.
    Separator,
}

/// The node context menu: view, delete, insert and annotate groups.
pub fn context_menu() -> Vec<MenuEntry> {
    const GROUPS: [&[Action]; 4] = [
        &[Action::Edit, Action::Copy],
        &[Action::Delete, Action::Move, Action::Replace, Action::Shuffle],
        &[Action::Append, Action::Insert, Action::InsertBefore],
        &[Action::Comment, Action::Disable, Action::FoldComments],
    ];
    let mut menu = Vec::new();
    for (i, group) in GROUPS.iter().enumerate() {
        if i > 0 {
            menu.push(MenuEntry::Separator);
        }
        menu.extend(group.iter().map(|&action| MenuEntry::Item {
            action,
            label: action.label(),
            key: action.key(),
        }));
    }
    menu
}

#[cfg(test)]
#[path = "../../tests/unit/editor/actions.rs"]
mod tests;

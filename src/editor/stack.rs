use crate::editor::controller::Editor;
use crate::editor::workspace::Workspace;
use crate::foundation::error::EditorResult;

/// Instance key of an opened editor, unique for the stack's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditorKey(u64);

impl std::fmt::Display for EditorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "editor-{}", self.0)
    }
}

/// Editors open side by side, newest first, at most one focused.
#[derive(Debug, Default)]
pub struct EditorStack {
    editors: Vec<(EditorKey, Editor)>,
    focused: Option<EditorKey>,
    next_key: u64,
}

impl EditorStack {
    /// No open editors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `editor` on top and focus it.
    ///
    /// # Panics
    ///
    /// If the stack would hand out a key already in use.
    pub fn open(&mut self, editor: Editor) -> EditorKey {
        let key = EditorKey(self.next_key);
        self.next_key += 1;
        assert!(
            self.editors.iter().all(|(k, _)| *k != key),
            "duplicate editor key {key}"
        );
        tracing::debug!(%key, function = editor.name(), "open editor");
        self.editors.insert(0, (key, editor));
        self.focus(Some(key));
        key
    }

    /// Focus the editor already showing `name`, or open the one `make` builds.
    pub fn open_or_focus(
        &mut self,
        name: &str,
        make: impl FnOnce() -> EditorResult<Editor>,
    ) -> EditorResult<EditorKey> {
        if let Some(key) = self.key_of(name) {
            self.focus(Some(key));
            return Ok(key);
        }
        Ok(self.open(make()?))
    }

    /// Close `key`. Focus passes to the top editor when the focused one closes.
    pub fn close(&mut self, key: EditorKey) -> Option<Editor> {
        let ix = self.editors.iter().position(|(k, _)| *k == key)?;
        let (_, editor) = self.editors.remove(ix);
        if self.focused == Some(key) {
            let top = self.editors.first().map(|(k, _)| *k);
            self.focus(top);
        }
        Some(editor)
    }

    /// Focus `key`, or nothing. Unknown keys clear focus.
    pub fn focus(&mut self, key: Option<EditorKey>) {
        let key = key.filter(|k| self.get(*k).is_some());
        self.focused = key;
        for (k, editor) in &mut self.editors {
            editor.set_focus_flag(Some(*k) == key);
        }
    }

    /// Focused editor's key.
    pub fn focused(&self) -> Option<EditorKey> {
        self.focused
    }

    /// Focused editor.
    pub fn focused_mut(&mut self) -> Option<&mut Editor> {
        let key = self.focused?;
        self.get_mut(key)
    }

    /// Key of the editor showing `name`.
    pub fn key_of(&self, name: &str) -> Option<EditorKey> {
        self.editors
            .iter()
            .find(|(_, e)| e.name() == name)
            .map(|(k, _)| *k)
    }

    /// Editor for `key`.
    pub fn get(&self, key: EditorKey) -> Option<&Editor> {
        self.editors.iter().find(|(k, _)| *k == key).map(|(_, e)| e)
    }

    /// Mutable editor for `key`.
    pub fn get_mut(&mut self, key: EditorKey) -> Option<&mut Editor> {
        self.editors
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, e)| e)
    }

    /// Open editors, top first.
    pub fn iter(&self) -> impl Iterator<Item = (EditorKey, &Editor)> {
        self.editors.iter().map(|(k, e)| (*k, e))
    }

    /// Number of open editors.
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    /// Whether no editor is open.
    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }

    /// Re-read every editor's tree after the workspace changed.
    ///
    /// Editors whose function no longer exists are closed and returned.
    pub fn refresh_all(&mut self, workspace: &dyn Workspace) -> Vec<Editor> {
        let mut closed = Vec::new();
        let mut keep = Vec::with_capacity(self.editors.len());
        for (key, mut editor) in self.editors.drain(..) {
            match editor.refresh(workspace) {
                Ok(()) => keep.push((key, editor)),
                Err(e) => {
                    tracing::warn!(%key, function = editor.name(), "closing editor: {e}");
                    closed.push(editor);
                }
            }
        }
        self.editors = keep;
        if self.focused.is_some_and(|k| self.get(k).is_none()) {
            let top = self.editors.first().map(|(k, _)| *k);
            self.focus(top);
        }
        closed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/stack.rs"]
mod tests;

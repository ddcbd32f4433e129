use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context as _;

use crate::editor::builtins::is_special;
use crate::expr::model::Expr;
use crate::foundation::error::{EditorError, EditorResult};

/// Store of named function bodies; the authority every editor reads back after an edit.
pub trait Workspace {
    /// Current body of `name`.
    fn get(&self, name: &str) -> EditorResult<Expr>;

    /// Replace the body of `name` with `updater(current)`.
    ///
    /// A result that is the same node as the current body records nothing.
    fn update(&mut self, name: &str, updater: &mut dyn FnMut(&Expr) -> Expr) -> EditorResult<()>;

    /// Number of edits to `name` that can be undone.
    fn history_len(&self, name: &str) -> usize;

    /// Restore the body of `name` from before its last edit. `false` when there is none.
    fn undo(&mut self, name: &str) -> EditorResult<bool>;

    /// Every stored function name, sorted.
    fn function_names(&self) -> Vec<String>;
}

#[derive(serde::Serialize, serde::Deserialize)]
struct WorkspaceFile {
    #[serde(default)]
    functions: BTreeMap<String, Expr>,
}

/// In-memory [`Workspace`] with a per-name history stack and JSON persistence.
///
/// The file format is `{"functions": {name: expr, ..}}`. Ids are not persisted; every load hands
/// out fresh ones.
#[derive(Clone, Debug, Default)]
pub struct MemoryWorkspace {
    functions: BTreeMap<String, Expr>,
    history: HashMap<String, Vec<Expr>>,
}

impl MemoryWorkspace {
    /// Empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `body` under `name` without recording history.
    ///
    /// Special forms are not user functions and cannot be stored.
    pub fn insert(&mut self, name: impl Into<String>, body: Expr) -> EditorResult<()> {
        let name = name.into();
        if is_special(&name) {
            return Err(EditorError::not_a_function(name));
        }
        self.history.remove(&name);
        self.functions.insert(name, body);
        Ok(())
    }

    /// Whether `name` is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Parse a workspace from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> EditorResult<Self> {
        let file: WorkspaceFile = serde_json::from_reader(r)
            .map_err(|e| EditorError::validation(format!("parse workspace JSON: {e}")))?;
        let mut ws = Self::new();
        for (name, body) in file.functions {
            ws.insert(name, body)?;
        }
        Ok(ws)
    }

    /// Load a workspace JSON file.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> EditorResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            EditorError::validation(format!("open workspace JSON '{}': {e}", path.display()))
        })?;
        let ws = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(functions = ws.functions.len(), "loaded workspace");
        Ok(ws)
    }

    /// Serialise every function as pretty JSON.
    pub fn to_writer<W: std::io::Write>(&self, w: W) -> EditorResult<()> {
        let file = WorkspaceFile {
            functions: self.functions.clone(),
        };
        serde_json::to_writer_pretty(w, &file)?;
        Ok(())
    }

    /// Write the workspace to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> EditorResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create workspace dir '{}'", parent.display()))
                .map_err(EditorError::from)?;
        }
        let f = File::create(path)
            .with_context(|| format!("create workspace file '{}'", path.display()))
            .map_err(EditorError::from)?;
        self.to_writer(BufWriter::new(f))
    }
}

impl Workspace for MemoryWorkspace {
    fn get(&self, name: &str) -> EditorResult<Expr> {
        if is_special(name) {
            return Err(EditorError::not_a_function(name));
        }
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| EditorError::unknown_function(name))
    }

    fn update(&mut self, name: &str, updater: &mut dyn FnMut(&Expr) -> Expr) -> EditorResult<()> {
        let current = self.get(name)?;
        let next = updater(&current);
        if next.ptr_eq(&current) {
            return Ok(());
        }
        self.history
            .entry(name.to_owned())
            .or_default()
            .push(current);
        self.functions.insert(name.to_owned(), next);
        Ok(())
    }

    fn history_len(&self, name: &str) -> usize {
        self.history.get(name).map_or(0, Vec::len)
    }

    fn undo(&mut self, name: &str) -> EditorResult<bool> {
        if !self.functions.contains_key(name) {
            return Err(EditorError::unknown_function(name));
        }
        let Some(previous) = self.history.get_mut(name).and_then(Vec::pop) else {
            return Ok(false);
        };
        self.functions.insert(name.to_owned(), previous);
        Ok(true)
    }

    fn function_names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/workspace.rs"]
mod tests;

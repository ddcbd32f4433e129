use crate::expr::model::Expr;
use crate::foundation::ids::ExprId;

/// Unpinned entries kept before the oldest is dropped.
pub const CLIPBOARD_HISTORY: usize = 10;

/// One copied subtree.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipboardEntry {
    /// The copied subtree, ids as they were at copy time.
    pub expr: Expr,
    /// Pinned entries keep their slot and never expire.
    pub pinned: bool,
}

/// Copied subtrees available to numbered paste slots, newest first.
pub trait Clipboard {
    /// Push `entry` to the front.
    fn add(&mut self, entry: ClipboardEntry);

    /// Mark the entry holding `id` as just used.
    fn use_entry(&mut self, id: ExprId);

    /// Entries in slot order.
    fn entries(&self) -> &[ClipboardEntry];
}

/// In-memory [`Clipboard`].
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    entries: Vec<ClipboardEntry>,
}

impl MemoryClipboard {
    /// Empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    fn trim(&mut self) {
        let mut unpinned = 0;
        self.entries.retain(|e| {
            if e.pinned {
                return true;
            }
            unpinned += 1;
            unpinned <= CLIPBOARD_HISTORY
        });
    }
}

impl Clipboard for MemoryClipboard {
    fn add(&mut self, entry: ClipboardEntry) {
        self.entries.insert(0, entry);
        self.trim();
    }

    fn use_entry(&mut self, id: ExprId) {
        let Some(ix) = self.entries.iter().position(|e| e.expr.id() == id) else {
            return;
        };
        if self.entries[ix].pinned {
            return;
        }
        let entry = self.entries.remove(ix);
        self.entries.insert(0, entry);
    }

    fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/clipboard.rs"]
mod tests;

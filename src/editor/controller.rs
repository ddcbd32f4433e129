//! One editor view over a named workspace function.
//!
//! The workspace owns the tree. The editor reads it back after every edit and keeps only what a
//! view needs across events: selection, hover, focus, comment folding and the inline edit.

use std::sync::Arc;

use crate::editor::actions::Action;
use crate::editor::builtins::{Builtins, call_template, is_special};
use crate::editor::clipboard::{Clipboard, ClipboardEntry};
use crate::editor::inline::InlineEdit;
use crate::editor::keys::{Command, KeyMap, KeyPress, Motion};
use crate::editor::repair::repair_selection;
use crate::editor::suggest::SuggestionSearch;
use crate::editor::workspace::Workspace;
use crate::expr::dsl;
use crate::expr::edit::{ChildPosition, Side};
use crate::expr::model::{Expr, ExprKind};
use crate::foundation::core::Point;
use crate::foundation::error::EditorResult;
use crate::foundation::ids::ExprId;
use crate::layout::engine::{LayoutEngine, LayoutProps, LayoutResult};
use crate::layout::overlay::{OverlayRect, overlay_rects};
use crate::layout::theme::Highlight;

/// Comment of the blank installed when an edit removes the whole tree.
pub const EMPTY_TREE_HINT: &str = "Double click me";

/// Collaborators borrowed from the host for one event.
pub struct EditorCtx<'a> {
    /// Function storage and history.
    pub workspace: &'a mut dyn Workspace,
    /// Copied subtrees.
    pub clipboard: &'a mut dyn Clipboard,
    /// Builtin catalogue, for expanding chosen suggestions.
    pub builtins: &'a Builtins,
    /// Completion index for inline edits.
    pub search: &'a dyn SuggestionSearch,
}

/// Result of handling a key or action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The event was handled.
    Done,
    /// Nothing applied: unbound key, stale target or an edit with no effect.
    Ignored,
    /// The host should ask for a comment and answer with [`Editor::set_comment`].
    PromptComment {
        /// Node to comment.
        target: ExprId,
        /// Its current comment.
        current: Option<String>,
    },
}

impl ActionOutcome {
    fn from_applied(applied: bool) -> Self {
        if applied {
            ActionOutcome::Done
        } else {
            ActionOutcome::Ignored
        }
    }
}

/// Editor state for one open function.
pub struct Editor {
    name: String,
    selection: ExprId,
    highlight: Option<ExprId>,
    focused: bool,
    fold_comments: bool,
    inline: Option<InlineEdit>,
    keys: KeyMap,
    engine: LayoutEngine,
    last_tree: Expr,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("name", &self.name)
            .field("selection", &self.selection)
            .field("focused", &self.focused)
            .field("inline", &self.inline)
            .finish_non_exhaustive()
    }
}

impl Editor {
    /// Open the function `name`, selecting its root.
    ///
    /// # Panics
    ///
    /// If `name` is a special form; those have no body to edit.
    pub fn open(
        name: impl Into<String>,
        workspace: &dyn Workspace,
        engine: LayoutEngine,
    ) -> EditorResult<Self> {
        let name = name.into();
        assert!(
            !is_special(&name),
            "special function {name} cannot be opened in an editor"
        );
        let tree = workspace.get(&name)?;
        tracing::debug!(function = %name, nodes = tree.len(), "opened editor");
        Ok(Self {
            name,
            selection: tree.id(),
            highlight: None,
            focused: false,
            fold_comments: false,
            inline: None,
            keys: KeyMap::standard(),
            engine,
            last_tree: tree,
        })
    }

    /// Function being edited.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selected node; always present in the last tree observed.
    pub fn selection(&self) -> ExprId {
        self.selection
    }

    /// Hovered node.
    pub fn highlight(&self) -> Option<ExprId> {
        self.highlight
    }

    /// Whether the editor has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether comments are folded.
    pub fn folds_comments(&self) -> bool {
        self.fold_comments
    }

    /// The inline edit in progress.
    pub fn inline_edit(&self) -> Option<&InlineEdit> {
        self.inline.as_ref()
    }

    /// Key bindings.
    pub fn keys(&self) -> &KeyMap {
        &self.keys
    }

    /// Layout engine, for cache statistics and theme access.
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Current tree, read from the workspace.
    pub fn tree(&self, workspace: &dyn Workspace) -> EditorResult<Expr> {
        workspace.get(&self.name)
    }

    /// Gain or lose focus. Losing focus dismisses an inline edit.
    pub fn set_focused(&mut self, ctx: &mut EditorCtx<'_>, focused: bool) -> EditorResult<()> {
        self.focused = focused;
        if !focused && self.inline.is_some() {
            self.dismiss_edit(ctx)?;
        }
        Ok(())
    }

    pub(crate) fn set_focus_flag(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Select `id` if it is in the tree.
    pub fn select(&mut self, workspace: &dyn Workspace, id: ExprId) -> EditorResult<bool> {
        let tree = self.tree(workspace)?;
        if !tree.contains(id) {
            return Ok(false);
        }
        self.selection = id;
        Ok(true)
    }

    fn layout_props(&self, tree: &Expr) -> LayoutProps {
        let theme = self.engine.theme();
        let is_blank = |id: ExprId| tree.find_id(id).is_some_and(Expr::is_blank);
        let mut highlights = Vec::new();
        if let Some(hover) = self.highlight.filter(|&id| self.focused && is_blank(id)) {
            highlights.push((
                hover,
                Highlight::new(theme.blank.resting.fill, theme.highlight_stroke),
            ));
        }
        if is_blank(self.selection) {
            let s = &theme.selection;
            highlights.push((
                self.selection,
                Highlight {
                    fill: s.fill,
                    blurred_fill: s.blurred_fill,
                    stroke: s.stroke,
                    blurred_stroke: s.blurred_stroke,
                    droppable: false,
                },
            ));
        }
        LayoutProps {
            focused: self.focused,
            fold_comments: self.fold_comments,
            highlights,
        }
    }

    /// Lay out the current tree.
    pub fn layout(&mut self, workspace: &dyn Workspace) -> EditorResult<Arc<LayoutResult>> {
        let tree = self.tree(workspace)?;
        let props = self.layout_props(&tree);
        Ok(self.engine.layout(&tree, &props))
    }

    /// Selection and hover rectangles for the current layout, bottom first.
    pub fn overlays(&mut self, workspace: &dyn Workspace) -> EditorResult<Vec<OverlayRect>> {
        let tree = self.tree(workspace)?;
        let areas = self.layout(workspace)?.area_map();
        Ok(overlay_rects(
            &tree,
            &areas,
            Some(self.selection),
            self.highlight,
            self.focused,
            self.engine.theme(),
        ))
    }

    /// Select the deepest node under `point` (view coordinates).
    pub fn click(&mut self, workspace: &dyn Workspace, point: Point) -> EditorResult<Option<ExprId>> {
        let hit = self.layout(workspace)?.area_map().hit_test(point);
        if let Some(id) = hit {
            self.selection = id;
        }
        Ok(hit)
    }

    /// Select the node under `point` and start editing it.
    pub fn double_click(&mut self, ctx: &mut EditorCtx<'_>, point: Point) -> EditorResult<bool> {
        match self.click(&*ctx.workspace, point)? {
            Some(id) => self.start_editing(ctx, id),
            None => Ok(false),
        }
    }

    /// Track the node under the pointer; `None` when the pointer left the view.
    pub fn hover(&mut self, workspace: &dyn Workspace, point: Option<Point>) -> EditorResult<()> {
        self.highlight = match point {
            Some(point) => self.layout(workspace)?.area_map().hit_test(point),
            None => None,
        };
        Ok(())
    }

    /// Move the selection. `false` when there is nowhere to go.
    pub fn move_selection(&mut self, workspace: &dyn Workspace, motion: Motion) -> EditorResult<bool> {
        let tree = self.tree(workspace)?;
        if !tree.contains(self.selection) {
            self.refresh(workspace)?;
        }
        let areas = self.layout(workspace)?.area_map();
        let next = (motion.select_fn())(&tree, self.selection, &areas);
        tracing::trace!(?motion, from = %self.selection, to = ?next, "move selection");
        match next {
            Some(id) => {
                self.selection = id;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Dispatch a key press.
    ///
    /// While an inline edit is open only its keys apply: Escape dismisses, Enter and Tab submit,
    /// the vertical arrows move through suggestions.
    pub fn handle_key(
        &mut self,
        ctx: &mut EditorCtx<'_>,
        press: &KeyPress,
    ) -> EditorResult<ActionOutcome> {
        if press.has_modifier() {
            return Ok(ActionOutcome::Ignored);
        }
        if self.inline.is_some() {
            let handled = match press.key.as_str() {
                "Escape" => {
                    self.dismiss_edit(ctx)?;
                    true
                }
                "Enter" | "Tab" => {
                    self.submit_edit(ctx)?;
                    true
                }
                "ArrowDown" => self.inline.as_mut().is_some_and(|e| e.move_selection(1)),
                "ArrowUp" => self.inline.as_mut().is_some_and(|e| e.move_selection(-1)),
                _ => false,
            };
            return Ok(ActionOutcome::from_applied(handled));
        }
        let Some(command) = self.keys.lookup(press) else {
            tracing::warn!(key = %press.key, "unhandled key");
            return Ok(ActionOutcome::Ignored);
        };
        let target = self.selection;
        match command {
            Command::Action(action) => self.perform(ctx, action, target),
            Command::SmartSpace => self.smart_space(ctx, target).map(ActionOutcome::from_applied),
            Command::Paste(slot) => self.paste(ctx, slot).map(ActionOutcome::from_applied),
            Command::Select(motion) => self
                .move_selection(&*ctx.workspace, motion)
                .map(ActionOutcome::from_applied),
        }
    }

    /// Apply `edit` to the whole tree on behalf of `target`, then repair the selection.
    ///
    /// `select` becomes the selection when the edit changed something. A target missing from
    /// the tree is ignored; an edit that removes the whole tree installs a hinted blank.
    fn apply(
        &mut self,
        ctx: &mut EditorCtx<'_>,
        target: ExprId,
        select: Option<ExprId>,
        edit: impl Fn(&Expr) -> Option<Expr>,
    ) -> EditorResult<bool> {
        let tree = self.tree(&*ctx.workspace)?;
        if !tree.contains(target) {
            tracing::warn!(function = %self.name, %target, "ignored edit of a node not in the tree");
            return Ok(false);
        }
        let mut changed = false;
        ctx.workspace.update(&self.name, &mut |current: &Expr| {
            if !current.contains(target) {
                return current.clone();
            }
            let next = edit(current).unwrap_or_else(|| dsl::hint(EMPTY_TREE_HINT));
            if next == *current {
                return current.clone();
            }
            changed = true;
            next
        })?;
        if changed {
            tracing::debug!(function = %self.name, %target, "applied edit");
            if let Some(id) = select {
                self.selection = id;
            }
        }
        self.refresh(&*ctx.workspace)?;
        Ok(changed)
    }

    fn copy(&mut self, ctx: &mut EditorCtx<'_>, target: ExprId) -> EditorResult<bool> {
        let tree = self.tree(&*ctx.workspace)?;
        let Some(expr) = tree.find_id(target) else {
            return Ok(false);
        };
        ctx.clipboard.add(ClipboardEntry {
            expr: expr.clone(),
            pinned: false,
        });
        Ok(true)
    }

    fn replace_with(
        &mut self,
        ctx: &mut EditorCtx<'_>,
        target: ExprId,
        next: &Expr,
    ) -> EditorResult<bool> {
        self.apply(ctx, target, None, |t| t.replace(target, next))
    }

    fn insert_blank_sibling(
        &mut self,
        ctx: &mut EditorCtx<'_>,
        target: ExprId,
        side: Side,
    ) -> EditorResult<bool> {
        let hole = dsl::blank();
        let id = hole.id();
        self.apply(ctx, target, Some(id), |t| {
            t.insert_sibling(target, hole.clone(), side)
        })
    }

    fn insert_blank_child(
        &mut self,
        ctx: &mut EditorCtx<'_>,
        target: ExprId,
        at: ChildPosition,
    ) -> EditorResult<bool> {
        let hole = dsl::blank();
        let id = hole.id();
        self.apply(ctx, target, Some(id), |t| {
            t.insert_child(target, hole.clone(), at)
        })
    }

    /// Run `action` on `target`.
    pub fn perform(
        &mut self,
        ctx: &mut EditorCtx<'_>,
        action: Action,
        target: ExprId,
    ) -> EditorResult<ActionOutcome> {
        tracing::debug!(function = %self.name, %action, %target, "perform action");
        let applied = match action {
            Action::Edit => self.start_editing(ctx, target)?,
            Action::Copy => self.copy(ctx, target)?,
            Action::Delete => self.apply(ctx, target, None, |t| t.remove(target))?,
            Action::Move => self.copy(ctx, target)? && self.apply(ctx, target, None, |t| t.remove(target))?,
            Action::Replace => self.replace_with(ctx, target, &dsl::blank())?,
            Action::Shuffle => {
                self.copy(ctx, target)? && self.replace_with(ctx, target, &dsl::blank())?
            }
            Action::Append => self.insert_blank_child(ctx, target, ChildPosition::Last)?,
            Action::Insert => self.insert_blank_sibling(ctx, target, Side::Right)?,
            Action::InsertBefore => self.insert_blank_sibling(ctx, target, Side::Left)?,
            Action::Comment => {
                let tree = self.tree(&*ctx.workspace)?;
                let Some(expr) = tree.find_id(target) else {
                    return Ok(ActionOutcome::Ignored);
                };
                return Ok(ActionOutcome::PromptComment {
                    target,
                    current: expr.comment().map(str::to_owned),
                });
            }
            Action::Disable => self.apply(ctx, target, None, |t| {
                t.update(target, |e| {
                    if e.is_blank() {
                        return Some(e.clone());
                    }
                    Some(e.with_disabled(!e.is_disabled()))
                })
            })?,
            Action::FoldComments => {
                self.fold_comments = !self.fold_comments;
                true
            }
        };
        Ok(ActionOutcome::from_applied(applied))
    }

    /// Answer a [`ActionOutcome::PromptComment`]. `None` (cancelled) leaves the node alone;
    /// empty text clears the comment.
    pub fn set_comment(
        &mut self,
        ctx: &mut EditorCtx<'_>,
        target: ExprId,
        comment: Option<&str>,
    ) -> EditorResult<bool> {
        let Some(comment) = comment else {
            return Ok(false);
        };
        self.apply(ctx, target, None, |t| {
            t.update(target, |e| Some(e.with_comment(Some(comment.to_owned()))))
        })
    }

    /// Context-dependent blank insertion.
    ///
    /// Containers get a blank as their first child; literals and variables get a blank after
    /// them. A blank moves out to follow its parent, keeping its id, except out of a root list.
    pub fn smart_space(&mut self, ctx: &mut EditorCtx<'_>, target: ExprId) -> EditorResult<bool> {
        let tree = self.tree(&*ctx.workspace)?;
        let Some(expr) = tree.find_id(target) else {
            tracing::warn!(function = %self.name, %target, "smart space on a node not in the tree");
            return Ok(false);
        };
        match expr.kind() {
            ExprKind::Call { .. } | ExprKind::List { .. } => {
                self.insert_blank_child(ctx, target, ChildPosition::First)
            }
            ExprKind::Blank => self.apply(ctx, target, None, |t| {
                Some(t.hoist_blank(target).unwrap_or_else(|| t.clone()))
            }),
            ExprKind::Literal { .. } | ExprKind::Variable { .. } => {
                self.insert_blank_sibling(ctx, target, Side::Right)
            }
        }
    }

    /// Replace the selection with clipboard slot `slot` and mark that entry used.
    pub fn paste(&mut self, ctx: &mut EditorCtx<'_>, slot: usize) -> EditorResult<bool> {
        let Some(entry) = ctx.clipboard.entries().get(slot).cloned() else {
            return Ok(false);
        };
        let target = self.selection;
        let pasted = self.replace_with(ctx, target, &entry.expr)?;
        if pasted {
            ctx.clipboard.use_entry(entry.expr.id());
        }
        Ok(pasted)
    }

    /// Replace the selection with a fresh copy of `template`.
    pub fn insert_template(&mut self, ctx: &mut EditorCtx<'_>, template: &Expr) -> EditorResult<bool> {
        let target = self.selection;
        self.replace_with(ctx, target, template)
    }

    /// Start an inline edit of `target`. `false` for nodes without a text value.
    pub fn start_editing(&mut self, ctx: &mut EditorCtx<'_>, target: ExprId) -> EditorResult<bool> {
        let tree = self.tree(&*ctx.workspace)?;
        let Some(expr) = tree.find_id(target) else {
            return Ok(false);
        };
        let Some(value) = expr.value() else {
            return Ok(false);
        };
        let suggest = matches!(expr.kind(), ExprKind::Blank | ExprKind::Variable { .. });
        self.inline = Some(InlineEdit::new(target, value, suggest, ctx.search));
        self.selection = target;
        Ok(true)
    }

    /// Write `text` through to the node being edited.
    pub fn edit_text(&mut self, ctx: &mut EditorCtx<'_>, text: &str) -> EditorResult<bool> {
        let Some(edit) = self.inline.as_mut() else {
            return Ok(false);
        };
        edit.set_text(text, ctx.search);
        let target = edit.target();
        self.apply(ctx, target, None, |t| {
            t.update(target, |e| Some(e.with_value(text)))
        })
    }

    /// Commit the inline edit.
    ///
    /// A chosen suggestion (see [`InlineEdit::choice`]) becomes a call to that function, with the
    /// catalogue's hinted arguments when it has them, and the first argument is selected.
    /// Otherwise the pending text is committed; empty text leaves a fresh blank.
    pub fn submit_edit(&mut self, ctx: &mut EditorCtx<'_>) -> EditorResult<bool> {
        let Some(edit) = self.inline.take() else {
            return Ok(false);
        };
        let target = edit.target();
        if let Some(chosen) = edit.choice() {
            let template = call_template(ctx.builtins, &chosen.name)
                .unwrap_or_else(|| dsl::call(chosen.name.as_str(), []));
            let applied = self.replace_with(ctx, target, &template)?;
            let tree = self.tree(&*ctx.workspace)?;
            if let Some(first) = tree.find_id(target).and_then(|e| e.children().first()) {
                self.selection = first.id();
            }
            return Ok(applied);
        }
        if edit.text().trim().is_empty() {
            return self.replace_with(ctx, target, &dsl::blank());
        }
        let text = edit.text().to_owned();
        self.apply(ctx, target, None, |t| {
            t.update(target, |e| Some(e.with_value(&text)))
        })
    }

    /// Close the inline edit without choosing a suggestion; empty text leaves a fresh blank.
    pub fn dismiss_edit(&mut self, ctx: &mut EditorCtx<'_>) -> EditorResult<bool> {
        let Some(edit) = self.inline.take() else {
            return Ok(false);
        };
        if edit.text().trim().is_empty() {
            return self.replace_with(ctx, edit.target(), &dsl::blank());
        }
        Ok(false)
    }

    /// Re-read the tree and repair selection, hover and inline edit against it.
    ///
    /// Hosts call this after the workspace changed behind the editor's back.
    pub fn refresh(&mut self, workspace: &dyn Workspace) -> EditorResult<()> {
        let tree = self.tree(workspace)?;
        self.selection = repair_selection(&self.last_tree, &tree, self.selection);
        self.highlight = self.highlight.filter(|&id| tree.contains(id));
        if self
            .inline
            .as_ref()
            .is_some_and(|edit| !tree.contains(edit.target()))
        {
            tracing::debug!(function = %self.name, "dropped inline edit of a removed node");
            self.inline = None;
        }
        self.last_tree = tree;
        Ok(())
    }

    /// Undo the last edit of this function. `false` when there is nothing to undo.
    pub fn undo(&mut self, workspace: &mut dyn Workspace) -> EditorResult<bool> {
        let undone = workspace.undo(&self.name)?;
        if undone {
            self.refresh(workspace)?;
        }
        Ok(undone)
    }

    /// Whether [`Editor::undo`] would do anything.
    pub fn can_undo(&self, workspace: &dyn Workspace) -> bool {
        workspace.history_len(&self.name) > 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/controller.rs"]
mod tests;

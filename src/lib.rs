//! Blockform is the core of a structural ("block-based") code editor.
//!
//! Programs are trees of typed expression nodes that are edited directly and drawn as nested
//! shapes. Three tightly coupled pieces do the work:
//!
//! 1. **Expr tree**: an immutable, identity-addressed tree ([`Expr`]) whose edits share every
//!    untouched subtree with the previous version.
//! 2. **Layout**: [`layout_expr`] decides per node whether it renders inline or as a block and
//!    produces exact geometry ([`Area`], [`AreaMap`]) plus a display list ([`DrawOp`]).
//! 3. **Selection**: pure functions in [`select`] move a cursor between nodes by tree structure
//!    or by 2-D adjacency of their rectangles.
//!
//! An [`Editor`] ties them together: it turns keys and menu actions into tree edits, stores the
//! result in a [`Workspace`] and keeps its selection valid.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: layout and navigation are pure for a given tree, theme and measurer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod editor;
mod expr;
mod foundation;
mod layout;

pub mod select;

pub use editor::actions::{Action, MenuEntry, context_menu};
pub use editor::builtins::{
    BuiltinFn, Builtins, Category, SPECIAL_FUNCTIONS, call_template, is_special, toy_box,
};
pub use editor::clipboard::{CLIPBOARD_HISTORY, Clipboard, ClipboardEntry, MemoryClipboard};
pub use editor::controller::{ActionOutcome, EMPTY_TREE_HINT, Editor, EditorCtx};
pub use editor::inline::InlineEdit;
pub use editor::keys::{Command, KeyMap, KeyPress, Motion};
pub use editor::repair::repair_selection;
pub use editor::stack::{EditorKey, EditorStack};
pub use editor::suggest::{FunctionIndex, MAX_SUGGESTIONS, Suggestion, SuggestionSearch};
pub use editor::workspace::{MemoryWorkspace, Workspace};
pub use expr::dsl;
pub use expr::edit::{ChildPosition, Side};
pub use expr::model::{Expr, ExprData, ExprKind, ExprNode, LiteralType};
pub use expr::tree::Preorder;
pub use foundation::core::{Colour, Insets, Point, Rect, Size, Vec2, rect_area, span_overlap};
pub use foundation::error::{EditorError, EditorResult};
pub use foundation::ids::ExprId;
pub use layout::area::{Area, AreaMap, FlatArea, TextProps};
pub use layout::engine::{LayoutEngine, LayoutProps, LayoutResult, layout_expr};
pub use layout::fingerprint::{LayoutFingerprint, fingerprint_layout};
pub use layout::fragment::DrawOp;
pub use layout::overlay::{OverlayKind, OverlayRect, overlay_rects};
pub use layout::text::{MonoMeasure, ParleyMeasure, TextMeasure, TextStyle};
pub use layout::theme::{
    BlankStyle, Highlight, LayoutMetrics, SelectionStyle, SyntaxColours, Theme,
};
pub use select::spatial::{Direction, nearest};

use std::fmt;
use std::sync::Arc;

use crate::foundation::ids::ExprId;

/// Auxiliary metadata carried by every node.
///
/// `disabled` is inherited visually by descendants during layout but never copied into them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ExprData {
    /// Free-form comment attached to the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Whether the node (and visually its subtree) is disabled.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl ExprData {
    /// Data carrying only a comment.
    pub fn commented(comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
            disabled: false,
        }
    }
}

/// Scalar type of a [`ExprKind::Literal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralType {
    /// Numeric literal; content keeps the typed spelling.
    Num,
    /// Text literal; content excludes the quotes.
    Text,
    /// Boolean literal; content is `true` or `false`.
    Bool,
}

/// The closed set of expression cases.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExprKind {
    /// Placeholder hole.
    Blank,
    /// Typed scalar value plus its textual representation.
    Literal {
        /// Textual representation.
        content: String,
        /// Scalar type.
        #[serde(rename = "literal_type")]
        ty: LiteralType,
    },
    /// Name reference.
    Variable {
        /// Referenced name.
        name: String,
    },
    /// Function call with ordered arguments.
    Call {
        /// Called function name.
        function: String,
        /// Ordered arguments.
        #[serde(default)]
        args: Vec<Expr>,
    },
    /// Sequential statements.
    List {
        /// Ordered statements.
        #[serde(default)]
        items: Vec<Expr>,
    },
}

/// One node of the tree. Always reached through an [`Expr`] handle.
#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExprNode {
    /// Identity, regenerated on deserialization.
    #[serde(skip, default = "ExprId::fresh")]
    pub id: ExprId,
    /// Comment/disabled metadata.
    #[serde(flatten)]
    pub data: ExprData,
    /// Case-specific payload.
    #[serde(flatten)]
    pub kind: ExprKind,
}

/// Immutable, cheaply clonable handle to an expression subtree.
///
/// Edits never mutate a node: they build a new tree that shares every untouched subtree with the
/// old one by reference.
#[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Expr(Arc<ExprNode>);

impl Expr {
    /// Build a node with a fresh id.
    pub fn new(kind: ExprKind, data: ExprData) -> Self {
        Self::with_parts(ExprId::fresh(), data, kind)
    }

    pub(crate) fn with_parts(id: ExprId, data: ExprData, kind: ExprKind) -> Self {
        Self(Arc::new(ExprNode { id, data, kind }))
    }

    /// Node identity.
    pub fn id(&self) -> ExprId {
        self.0.id
    }

    /// Node metadata.
    pub fn data(&self) -> &ExprData {
        &self.0.data
    }

    /// Case-specific payload.
    pub fn kind(&self) -> &ExprKind {
        &self.0.kind
    }

    /// Comment, if any.
    pub fn comment(&self) -> Option<&str> {
        self.0.data.comment.as_deref()
    }

    /// Whether this node itself is disabled (ancestors are not consulted).
    pub fn is_disabled(&self) -> bool {
        self.0.data.disabled
    }

    /// Whether this node is a [`ExprKind::Blank`].
    pub fn is_blank(&self) -> bool {
        matches!(self.0.kind, ExprKind::Blank)
    }

    /// Whether this node is a [`ExprKind::List`].
    pub fn is_list(&self) -> bool {
        matches!(self.0.kind, ExprKind::List { .. })
    }

    /// Whether this node is a [`ExprKind::Call`].
    pub fn is_call(&self) -> bool {
        matches!(self.0.kind, ExprKind::Call { .. })
    }

    /// `Call` and `List` are the only containers.
    pub fn is_container(&self) -> bool {
        matches!(self.0.kind, ExprKind::Call { .. } | ExprKind::List { .. })
    }

    /// Ordered children; empty for leaves.
    pub fn children(&self) -> &[Expr] {
        match &self.0.kind {
            ExprKind::Call { args, .. } => args,
            ExprKind::List { items, .. } => items,
            ExprKind::Blank | ExprKind::Literal { .. } | ExprKind::Variable { .. } => &[],
        }
    }

    /// Reference identity: both handles point at the same shared node.
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Same node with `children` as its children. Leaves are returned unchanged.
    pub fn with_children(&self, children: Vec<Expr>) -> Expr {
        let kind = match &self.0.kind {
            ExprKind::Call { function, .. } => ExprKind::Call {
                function: function.clone(),
                args: children,
            },
            ExprKind::List { .. } => ExprKind::List { items: children },
            ExprKind::Blank | ExprKind::Literal { .. } | ExprKind::Variable { .. } => {
                return self.clone();
            }
        };
        Self::with_parts(self.id(), self.0.data.clone(), kind)
    }

    /// Same node with `data` replaced.
    pub fn with_data(&self, data: ExprData) -> Expr {
        Self::with_parts(self.id(), data, self.0.kind.clone())
    }

    /// Same node with its comment replaced; an empty comment clears it.
    pub fn with_comment(&self, comment: Option<String>) -> Expr {
        let comment = comment.filter(|c| !c.is_empty());
        self.with_data(ExprData {
            comment,
            ..self.0.data.clone()
        })
    }

    /// Same node with its disabled flag replaced.
    pub fn with_disabled(&self, disabled: bool) -> Expr {
        self.with_data(ExprData {
            disabled,
            ..self.0.data.clone()
        })
    }

    /// Same node with its payload replaced, keeping id and data.
    pub fn with_kind(&self, kind: ExprKind) -> Expr {
        Self::with_parts(self.id(), self.0.data.clone(), kind)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({} {})", self.id(), self)
    }
}

/// Compact s-expression form: `_`, `1`, `"a"`, `x`, `(Fn a b)`, `[a b]`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn seq(f: &mut fmt::Formatter<'_>, xs: &[Expr]) -> fmt::Result {
            for (i, x) in xs.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{x}")?;
            }
            Ok(())
        }

        match self.kind() {
            ExprKind::Blank => f.write_str("_"),
            ExprKind::Literal {
                content,
                ty: LiteralType::Text,
            } => write!(f, "{content:?}"),
            ExprKind::Literal { content, .. } => f.write_str(content),
            ExprKind::Variable { name } => f.write_str(name),
            ExprKind::Call { function, args } => {
                write!(f, "({function}")?;
                if !args.is_empty() {
                    f.write_str(" ")?;
                    seq(f, args)?;
                }
                f.write_str(")")
            }
            ExprKind::List { items } => {
                f.write_str("[")?;
                seq(f, items)?;
                f.write_str("]")
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expr/model.rs"]
mod tests;

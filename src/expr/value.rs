//! Editable text form of leaf nodes and the grammar that turns typed text back into a leaf.

use crate::expr::model::{Expr, ExprKind, LiteralType};

impl Expr {
    /// Text shown in the inline editor; `None` for containers.
    ///
    /// A blank's comment is a hint, not its value, so blanks edit as `""`.
    pub fn value(&self) -> Option<&str> {
        match self.kind() {
            ExprKind::Blank => Some(""),
            ExprKind::Literal { content, .. } => Some(content),
            ExprKind::Variable { name } => Some(name),
            ExprKind::Call { .. } | ExprKind::List { .. } => None,
        }
    }

    /// Re-read `text` as a leaf, keeping this node's id and data.
    ///
    /// Text literals stay text literals. Otherwise the trimmed text becomes a blank (empty), a
    /// text literal (leading `"`), a number, a boolean, or a variable, in that order. Containers
    /// are returned unchanged.
    pub fn with_value(&self, text: &str) -> Expr {
        let kind = match self.kind() {
            ExprKind::Call { .. } | ExprKind::List { .. } => return self.clone(),
            ExprKind::Literal {
                ty: LiteralType::Text,
                ..
            } => ExprKind::Literal {
                content: text.to_owned(),
                ty: LiteralType::Text,
            },
            ExprKind::Blank | ExprKind::Literal { .. } | ExprKind::Variable { .. } => {
                classify(text.trim())
            }
        };
        self.with_kind(kind)
    }
}

fn classify(text: &str) -> ExprKind {
    if text.is_empty() {
        return ExprKind::Blank;
    }
    if let Some(rest) = text.strip_prefix('"') {
        let content = rest.strip_suffix('"').unwrap_or(rest);
        return ExprKind::Literal {
            content: content.to_owned(),
            ty: LiteralType::Text,
        };
    }
    if is_number(text) {
        return ExprKind::Literal {
            content: text.to_owned(),
            ty: LiteralType::Num,
        };
    }
    if text == "true" || text == "false" {
        return ExprKind::Literal {
            content: text.to_owned(),
            ty: LiteralType::Bool,
        };
    }
    ExprKind::Variable {
        name: text.to_owned(),
    }
}

/// `-?([0-9]+(.[0-9]+)?|.[0-9]+)([eE][+-]?[0-9]+)?` over the whole input.
pub(crate) fn is_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0usize;

    let digits = |i: &mut usize| {
        let start = *i;
        while *i < bytes.len() && bytes[*i].is_ascii_digit() {
            *i += 1;
        }
        *i > start
    };

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    // mantissa
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !digits(&mut i) {
            return false;
        }
    } else {
        if !digits(&mut i) {
            return false;
        }
        if bytes.get(i) == Some(&b'.') {
            i += 1;
            if !digits(&mut i) {
                return false;
            }
        }
    }

    // exponent
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if !digits(&mut i) {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
#[path = "../../tests/unit/expr/value.rs"]
mod tests;

//! Terse constructors for building trees by hand (templates, fixtures, tests).

use crate::expr::model::{Expr, ExprData, ExprKind, LiteralType};

/// A fresh [`ExprKind::Blank`].
pub fn blank() -> Expr {
    Expr::new(ExprKind::Blank, ExprData::default())
}

/// A fresh blank whose comment is shown in place of the `?` placeholder.
pub fn hint(comment: impl Into<String>) -> Expr {
    Expr::new(ExprKind::Blank, ExprData::commented(comment))
}

/// A numeric literal spelled `content`.
pub fn num(content: impl ToString) -> Expr {
    literal(content.to_string(), LiteralType::Num)
}

/// A text literal.
pub fn text(content: impl Into<String>) -> Expr {
    literal(content.into(), LiteralType::Text)
}

/// A boolean literal.
pub fn boolean(value: bool) -> Expr {
    literal(value.to_string(), LiteralType::Bool)
}

/// A literal of any type.
pub fn literal(content: impl Into<String>, ty: LiteralType) -> Expr {
    Expr::new(
        ExprKind::Literal {
            content: content.into(),
            ty,
        },
        ExprData::default(),
    )
}

/// A variable reference.
pub fn var(name: impl Into<String>) -> Expr {
    Expr::new(ExprKind::Variable { name: name.into() }, ExprData::default())
}

/// A call of `function` with `args`.
pub fn call(function: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::new(
        ExprKind::Call {
            function: function.into(),
            args: args.into_iter().collect(),
        },
        ExprData::default(),
    )
}

/// A statement list.
pub fn list(items: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::new(
        ExprKind::List {
            items: items.into_iter().collect(),
        },
        ExprData::default(),
    )
}

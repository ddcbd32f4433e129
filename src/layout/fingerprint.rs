use xxhash_rust::xxh3::Xxh3;

use crate::expr::model::{Expr, ExprKind, LiteralType};
use crate::foundation::core::Colour;
use crate::layout::engine::LayoutProps;
use crate::layout::theme::Highlight;

const XXH3_SEED: u64 = 0x6b1f_0c3a_d42e_9157;

/// Stable key of one layout pass, used by the memo cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

/// Fingerprint everything a layout pass reads.
///
/// Highlights only affect how blanks are painted, so entries naming any other node (or no node in
/// this tree) are left out of the key.
pub fn fingerprint_layout(
    expr: &Expr,
    theme_generation: u64,
    props: &LayoutProps,
) -> LayoutFingerprint {
    let mut h = StableHasher::new();
    h.write_u64(theme_generation);
    h.write_bool(props.focused);
    h.write_bool(props.fold_comments);
    write_expr(&mut h, expr);

    let blank_highlights: Vec<_> = props
        .highlights
        .iter()
        .filter(|(id, _)| expr.find_id(*id).is_some_and(Expr::is_blank))
        .collect();
    h.write_u32(blank_highlights.len() as u32);
    for (id, hl) in blank_highlights {
        h.write_u64(id.as_u64());
        write_highlight(&mut h, hl);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> LayoutFingerprint {
        let v = self.inner.digest128();
        LayoutFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_expr(h: &mut StableHasher, expr: &Expr) {
    h.write_u64(expr.id().as_u64());
    match expr.comment() {
        Some(c) => {
            h.write_u8(1);
            h.write_str(c);
        }
        None => h.write_u8(0),
    }
    h.write_bool(expr.is_disabled());

    match expr.kind() {
        ExprKind::Blank => h.write_u8(0),
        ExprKind::Literal { content, ty } => {
            h.write_u8(1);
            h.write_u8(match ty {
                LiteralType::Num => 0,
                LiteralType::Text => 1,
                LiteralType::Bool => 2,
            });
            h.write_str(content);
        }
        ExprKind::Variable { name } => {
            h.write_u8(2);
            h.write_str(name);
        }
        ExprKind::Call { function, args } => {
            h.write_u8(3);
            h.write_str(function);
            h.write_u32(args.len() as u32);
            for a in args {
                write_expr(h, a);
            }
        }
        ExprKind::List { items } => {
            h.write_u8(4);
            h.write_u32(items.len() as u32);
            for i in items {
                write_expr(h, i);
            }
        }
    }
}

fn write_colour(h: &mut StableHasher, c: Colour) {
    h.write_u32(c.to_u32());
}

fn write_highlight(h: &mut StableHasher, hl: &Highlight) {
    write_colour(h, hl.fill);
    write_colour(h, hl.blurred_fill);
    write_colour(h, hl.stroke);
    write_colour(h, hl.blurred_stroke);
    h.write_bool(hl.droppable);
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fingerprint.rs"]
mod tests;

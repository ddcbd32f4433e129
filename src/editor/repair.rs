use crate::expr::model::Expr;
use crate::foundation::ids::ExprId;

/// Keep `selection` valid after the tree changed from `previous` to `next`.
///
/// A selection still present is kept. Otherwise the candidates, taken from `previous`, are the
/// siblings after it, then the siblings before it, then its ancestors nearest first; the first
/// one present in `next` wins, else the root of `next`.
pub fn repair_selection(previous: &Expr, next: &Expr, selection: ExprId) -> ExprId {
    if next.contains(selection) {
        return selection;
    }
    let (siblings, ix) = previous.siblings(selection);
    let (before, after) = match ix {
        Some(ix) => (&siblings[..ix], &siblings[ix + 1..]),
        None => (&[][..], &[][..]),
    };
    let ancestors = previous.parents(selection);
    let repaired = after
        .iter()
        .chain(before)
        .chain(ancestors)
        .map(Expr::id)
        .find(|&id| next.contains(id))
        .unwrap_or_else(|| next.id());
    tracing::debug!(%selection, %repaired, "repaired selection");
    repaired
}

#[cfg(test)]
#[path = "../../tests/unit/editor/repair.rs"]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of expression ids.
///
/// Both fresh node construction and [`crate::Expr::reset_ids`] draw from this counter, so two
/// nodes built anywhere in the process never share an id.
static NEXT_EXPR_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of an expression node across edits that keep it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ExprId(u64);

impl ExprId {
    /// Allocate an id no other node in this process has been given.
    pub fn fresh() -> Self {
        Self(NEXT_EXPR_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Access the raw 64-bit value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ExprId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

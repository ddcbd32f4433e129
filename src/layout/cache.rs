use std::sync::Arc;

use crate::layout::engine::LayoutResult;
use crate::layout::fingerprint::LayoutFingerprint;

/// Memoises the most recent layout pass only.
#[derive(Debug, Default)]
pub(crate) struct LayoutCache {
    last: Option<(LayoutFingerprint, Arc<LayoutResult>)>,
    pub(crate) hits: u64,
    pub(crate) misses: u64,
}

impl LayoutCache {
    pub(crate) fn get_or_insert_with(
        &mut self,
        key: LayoutFingerprint,
        compute: impl FnOnce() -> LayoutResult,
    ) -> Arc<LayoutResult> {
        if let Some((k, result)) = &self.last
            && *k == key
        {
            self.hits += 1;
            tracing::trace!(hits = self.hits, "layout cache hit");
            return Arc::clone(result);
        }

        self.misses += 1;
        tracing::debug!(misses = self.misses, "layout cache miss");
        let result = Arc::new(compute());
        self.last = Some((key, Arc::clone(&result)));
        result
    }
}

//! Per-item enrichment tracking.
//!
//! Each key moves `absent -> pending -> resolved`, or back to `absent` when
//! the fetch fails. A key that is pending or resolved never starts another
//! fetch; a resolved result is never replaced unless the key is evicted.

use std::collections::HashMap;

use crate::model::{EnrichmentKey, EnrichmentResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnrichmentStatus {
    Pending,
    Resolved(EnrichmentResult),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnrichmentCache {
    entries: HashMap<EnrichmentKey, EnrichmentStatus>,
}

impl EnrichmentCache {
    /// Mark `key` as in flight. Returns `false` (and changes nothing) when the
    /// key is already pending or resolved, so the caller must not fetch.
    pub fn begin(&mut self, key: EnrichmentKey) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, EnrichmentStatus::Pending);
        true
    }

    /// Store a result for a pending key. A key that is not pending (already
    /// resolved, or evicted meanwhile) keeps its state and `false` is returned.
    pub fn resolve(&mut self, key: EnrichmentKey, result: EnrichmentResult) -> bool {
        let Some(status) = self.entries.get_mut(&key) else {
            return false;
        };
        if *status != EnrichmentStatus::Pending {
            return false;
        }
        *status = EnrichmentStatus::Resolved(result);
        true
    }

    /// Clear the in-flight marker after a failed fetch so it can be retried.
    pub fn fail(&mut self, key: EnrichmentKey) -> bool {
        if matches!(self.entries.get(&key), Some(EnrichmentStatus::Pending)) {
            self.entries.remove(&key);
            return true;
        }
        false
    }

    /// Forget a key entirely, allowing a fresh fetch.
    pub fn evict(&mut self, key: EnrichmentKey) -> bool {
        self.entries.remove(&key).is_some()
    }

    #[must_use]
    pub fn status(&self, key: EnrichmentKey) -> Option<&EnrichmentStatus> {
        self.entries.get(&key)
    }

    #[must_use]
    pub fn is_pending(&self, key: EnrichmentKey) -> bool {
        matches!(self.status(key), Some(EnrichmentStatus::Pending))
    }

    #[must_use]
    pub fn result(&self, key: EnrichmentKey) -> Option<&EnrichmentResult> {
        match self.status(key) {
            Some(EnrichmentStatus::Resolved(result)) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.entries
            .values()
            .filter(|status| matches!(status, EnrichmentStatus::Pending))
            .count()
    }
}

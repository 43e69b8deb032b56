use chrono::Utc;

use crate::models::{ActionItem, RawActionItem};

/// Allocates session-unique integer ids for normalized items.
///
/// Ids are seeded from the current wall clock in milliseconds and combined
/// with the item's position in its batch. The floor advances past every issued
/// id, so two batches normalized within the same millisecond (or with a clock
/// that went backwards) still get disjoint id ranges.
#[derive(Debug)]
pub struct IdAllocator {
    next: i64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next: Utc::now().timestamp_millis(),
        }
    }

    /// Fixed starting id, for deterministic tests
    pub fn starting_at(next: i64) -> Self {
        Self { next }
    }

    /// Reserve `count` consecutive ids and return the first one
    fn reserve(&mut self, count: usize) -> i64 {
        let base = self.next.max(Utc::now().timestamp_millis());
        self.next = base + count as i64;
        base
    }
}

/// Normalize a batch of raw extraction results into session-ready items.
///
/// Items keep extraction order; each gets a fresh id and `completed = false`.
pub fn normalize(raw: Vec<RawActionItem>, ids: &mut IdAllocator) -> Vec<ActionItem> {
    let base = ids.reserve(raw.len());
    raw.into_iter()
        .enumerate()
        .map(|(index, item)| ActionItem::from_raw(item, base + index as i64))
        .collect()
}

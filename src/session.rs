use std::collections::HashSet;

use tracing::debug;

use crate::models::{ActionItem, RawActionItem};
use crate::pipeline::{IdAllocator, normalize};

/// In-memory session state: the normalized item collection and its id source.
///
/// The collection is insertion-ordered by extraction result. Each mutation
/// produces a full replacement collection rather than editing shared state, so
/// a single-threaded event-driven caller needs no locking. A new extraction
/// replaces the whole collection; if the caller allows overlapping
/// extractions, the last one to complete wins.
#[derive(Debug, Default)]
pub struct Session {
    items: Vec<ActionItem>,
    ids: IdAllocator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ActionItem] {
        &self.items
    }

    /// Normalize a fresh extraction batch and replace the collection with it.
    /// Prior items are discarded; there is no merge.
    pub fn replace(&mut self, raw: Vec<RawActionItem>) -> &[ActionItem] {
        let items = normalize(raw, &mut self.ids);

        // Id collisions would be a programming defect in the allocator, not a
        // runtime condition to handle.
        debug_assert!(
            items.iter().map(|i| i.id).collect::<HashSet<_>>().len() == items.len(),
            "duplicate ids in normalized batch"
        );

        debug!("Session replaced with {} items", items.len());
        self.items = items;
        &self.items
    }

    /// Flip `completed` for the item with this id; no-op if absent
    pub fn toggle_completed(&mut self, id: i64) {
        self.items = toggle_completed(&self.items, id);
    }

    /// Replace the task text verbatim (empty string allowed); no-op if absent
    pub fn edit_task(&mut self, id: i64, new_task: &str) {
        self.items = edit_task(&self.items, id, new_task);
    }

    /// Remove the item with this id; no-op if absent
    pub fn delete(&mut self, id: i64) {
        self.items = delete_item(&self.items, id);
    }
}

/// Copy the collection with `completed` flipped for the matching id
pub fn toggle_completed(items: &[ActionItem], id: i64) -> Vec<ActionItem> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id == id {
                item.completed = !item.completed;
            }
            item
        })
        .collect()
}

/// Copy the collection with the task text replaced for the matching id
pub fn edit_task(items: &[ActionItem], id: i64, new_task: &str) -> Vec<ActionItem> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id == id {
                item.task = new_task.to_string();
            }
            item
        })
        .collect()
}

/// Copy the collection without the matching id
pub fn delete_item(items: &[ActionItem], id: i64) -> Vec<ActionItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

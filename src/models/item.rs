use serde::{Deserialize, Serialize};

/// An action item as emitted by the model, before normalization.
///
/// Fields are free text. The prompt instructs the model to use "N/A" when it
/// cannot find a value; that sentinel is passed through untouched. Missing
/// fields decode as empty strings rather than failing the element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActionItem {
    /// What needs to be done
    #[serde(default)]
    pub task: String,
    /// Who it is assigned to; multiple assignees are listed together
    #[serde(default)]
    pub assigned_to: String,
    /// Due date as free text (e.g. "Friday", "2025-03-01", "N/A")
    #[serde(default)]
    pub deadline: String,
}

/// A normalized action item held in the session collection.
///
/// `id` is assigned once at normalization time and is the sole key for
/// toggle/edit/delete operations; it is unique within the session and never
/// reused. `completed` starts false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: i64,
    pub task: String,
    pub assigned_to: String,
    pub deadline: String,
    pub completed: bool,
}

impl ActionItem {
    /// Create a normalized item from a raw extraction result
    pub fn from_raw(raw: RawActionItem, id: i64) -> Self {
        Self {
            id,
            task: raw.task,
            assigned_to: raw.assigned_to,
            deadline: raw.deadline,
            completed: false,
        }
    }
}

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{ActionItem, FILTER_ALL, SortOrder, ViewOptions};

/// Key used for items whose assignee is empty
pub const UNASSIGNED: &str = "Unassigned";

/// One group of the projected view: an assignee and their items, in order
#[derive(Debug, Clone, Serialize)]
pub struct AssigneeGroup {
    pub assignee: String,
    pub items: Vec<ActionItem>,
}

/// Filtered, sorted, grouped view of the session collection.
/// Groups appear in first-occurrence order of their key.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectedView {
    pub groups: Vec<AssigneeGroup>,
}

impl ProjectedView {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Derive the display view from the collection. Filter, then sort, then group;
/// the collection itself is never mutated.
pub fn project(items: &[ActionItem], options: &ViewOptions) -> ProjectedView {
    let mut selected: Vec<ActionItem> = match &options.filter_assignee {
        Some(assignee) => items
            .iter()
            .filter(|item| item.assigned_to == *assignee)
            .cloned()
            .collect(),
        None => items.to_vec(),
    };

    match options.sort_order {
        SortOrder::Default => {}
        SortOrder::Deadline => {
            // Unparsable deadlines (including "N/A") sort after parsable ones,
            // keeping their relative order; the source did not validate
            // deadline formats and neither do we.
            selected.sort_by_key(|item| match parse_deadline(&item.deadline) {
                Some(date) => (0, Some(date)),
                None => (1, None),
            });
        }
        SortOrder::Assignee => {
            selected.sort_by(|a, b| compare_assignees(&a.assigned_to, &b.assigned_to));
        }
    }

    let mut groups: Vec<AssigneeGroup> = Vec::new();
    for item in selected {
        let key = if item.assigned_to.is_empty() {
            UNASSIGNED
        } else {
            item.assigned_to.as_str()
        };
        match groups.iter_mut().find(|g| g.assignee == key) {
            Some(group) => group.items.push(item),
            None => groups.push(AssigneeGroup {
                assignee: key.to_string(),
                items: vec![item],
            }),
        }
    }

    ProjectedView { groups }
}

/// Distinct assignees for filter-control population, computed from the
/// unfiltered collection so the option list never shrinks under a filter.
/// The "all" sentinel is prepended; order is first occurrence.
pub fn assignee_options(items: &[ActionItem]) -> Vec<String> {
    let mut options = vec![FILTER_ALL.to_string()];
    for item in items {
        if !options.iter().any(|o| o == &item.assigned_to) {
            options.push(item.assigned_to.clone());
        }
    }
    options
}

/// Best-effort calendar parse of a free-text deadline
fn parse_deadline(deadline: &str) -> Option<NaiveDate> {
    const FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%B %d %Y", "%d %B %Y"];
    let trimmed = deadline.trim();
    FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Case-insensitive lexicographic order with a case-sensitive tiebreak, a
/// reasonable stand-in for locale-aware collation
fn compare_assignees(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

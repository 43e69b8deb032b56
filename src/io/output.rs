use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::ActionItem;
use crate::view::ProjectedView;

/// JSON document written for machine consumption: `{ "actionItems": [...] }`.
/// The array may be empty but is never null.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionDocument<'a> {
    pub action_items: &'a [ActionItem],
}

impl<'a> ExtractionDocument<'a> {
    pub fn new(action_items: &'a [ActionItem]) -> Self {
        Self { action_items }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Render the grouped view as human-readable text
pub fn render_grouped(view: &ProjectedView) -> String {
    let mut out = String::new();

    for group in &view.groups {
        out.push_str(&group.assignee);
        out.push('\n');
        out.push_str(&"-".repeat(group.assignee.len()));
        out.push('\n');

        for item in &group.items {
            out.push_str(&format!("Task: {}\n", item.task));
            out.push_str(&format!("Assigned To: {}\n", item.assigned_to));
            out.push_str(&format!("Deadline: {}\n", item.deadline));
            out.push_str(&format!(
                "Status: {}\n",
                if item.completed { "Completed" } else { "Pending" }
            ));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViewOptions;
    use crate::view::project;

    fn item(id: i64, task: &str, assigned_to: &str) -> ActionItem {
        ActionItem {
            id,
            task: task.to_string(),
            assigned_to: assigned_to.to_string(),
            deadline: "Friday".to_string(),
            completed: false,
        }
    }

    #[test]
    fn test_render_includes_group_headers_and_fields() {
        let items = vec![item(1, "Finish the report", "John")];
        let view = project(&items, &ViewOptions::default());
        let text = render_grouped(&view);

        assert!(text.contains("John\n----\n"));
        assert!(text.contains("Task: Finish the report"));
        assert!(text.contains("Assigned To: John"));
        assert!(text.contains("Deadline: Friday"));
        assert!(text.contains("Status: Pending"));
    }

    #[test]
    fn test_document_uses_action_items_key() {
        let items = vec![item(7, "Ship it", "Amy")];
        let doc = ExtractionDocument::new(&items);
        let json = serde_json::to_value(&doc).unwrap();

        assert!(json["actionItems"].is_array());
        assert_eq!(json["actionItems"][0]["assignedTo"], "Amy");
        assert_eq!(json["actionItems"][0]["completed"], false);
    }

    #[test]
    fn test_document_writes_file() {
        let items = Vec::new();
        let doc = ExtractionDocument::new(&items);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");

        doc.write_json(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["actionItems"], serde_json::json!([]));
    }
}

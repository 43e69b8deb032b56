use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Sentinel accepted by the assignee filter meaning "no filter".
pub const FILTER_ALL: &str = "all";

/// Sort order applied by the view projector after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Preserve extraction order
    #[default]
    Default,
    /// Ascending by deadline, parsed as a calendar date where possible
    Deadline,
    /// Ascending by assignee name
    Assignee,
}

/// View parameters consumed by the projector; not persisted
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Exact assignee to keep, or `None` for the "all" sentinel
    pub filter_assignee: Option<String>,
    pub sort_order: SortOrder,
}

impl ViewOptions {
    /// Interpret a filter string from the caller, mapping "all" to no filter.
    /// The match is exact and case-sensitive, so only the literal sentinel is
    /// treated specially.
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter_assignee = if filter == FILTER_ALL {
            None
        } else {
            Some(filter.to_string())
        };
        self
    }
}

pub mod error;
pub mod io;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod session;
pub mod view;

pub use error::ExtractError;
pub use io::{ExtractionDocument, read_transcript_file, render_grouped};
pub use llm::{Generator, OllamaClient, OllamaConfig, build_extraction_prompt};
pub use models::{ActionItem, FILTER_ALL, RawActionItem, SortOrder, ViewOptions};
pub use pipeline::{IdAllocator, extract_action_items, normalize, parse_model_response};
pub use session::Session;
pub use view::{AssigneeGroup, ProjectedView, UNASSIGNED, assignee_options, project};

use tracing::{debug, info};

use crate::error::ExtractError;
use crate::llm::{Generator, build_extraction_prompt};
use crate::models::RawActionItem;
use crate::pipeline::parse_model_response;

/// Run one extraction: transcript in, raw action item candidates out.
///
/// Rejects empty or whitespace-only transcripts before building the prompt, so
/// the backend is never invoked for them. The generator call is the single
/// suspension point in the pipeline; while it is in flight no session state is
/// touched. Parse failures are absorbed into an empty result (see
/// [`parse_model_response`]); only input and generation failures are returned
/// as errors.
pub async fn extract_action_items(
    generator: &dyn Generator,
    model: &str,
    transcript: &str,
) -> Result<Vec<RawActionItem>, ExtractError> {
    if transcript.trim().is_empty() {
        return Err(ExtractError::EmptyTranscript);
    }

    info!(
        "Extracting action items from transcript ({} chars)",
        transcript.len()
    );

    let prompt = build_extraction_prompt(transcript);
    let raw = generator.generate(&prompt, model).await?;
    debug!("Model returned {} chars", raw.len());

    let items = parse_model_response(&raw);
    info!("Extracted {} action items", items.len());

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Stub backend returning a canned completion and counting invocations
    struct StubGenerator {
        response: String,
        calls: AtomicUsize,
    }

    impl StubGenerator {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Generator for StubGenerator {
        async fn generate(&self, _prompt: &str, _model: &str) -> Result<String, ExtractError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl Generator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _model: &str) -> Result<String, ExtractError> {
            Err(ExtractError::Generation("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_empty_transcript_rejected_without_backend_call() {
        let stub = StubGenerator::new("[]");

        let err = extract_action_items(&stub, "llama3", "").await.unwrap_err();
        assert!(matches!(err, ExtractError::EmptyTranscript));

        let err = extract_action_items(&stub, "llama3", "   \n\t ")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::EmptyTranscript));

        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_extraction_returns_parsed_items() {
        let stub = StubGenerator::new(
            r#"[{"task": "Finish the report", "assignedTo": "John", "deadline": "Friday"}]"#,
        );

        let items = extract_action_items(&stub, "llama3", "John will finish the report by Friday.")
            .await
            .unwrap();

        assert_eq!(stub.call_count(), 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].task, "Finish the report");
        assert_eq!(items[0].assigned_to, "John");
        assert_eq!(items[0].deadline, "Friday");
    }

    #[tokio::test]
    async fn test_garbled_output_is_empty_success() {
        let stub = StubGenerator::new("I could not find any action items, sorry!");
        let items = extract_action_items(&stub, "llama3", "Nothing was decided.")
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_end_to_end_normalizes_and_groups() {
        use crate::models::ViewOptions;
        use crate::session::Session;
        use crate::view::project;

        let stub = StubGenerator::new(
            r#"[{"task": "Finish the report", "assignedTo": "John", "deadline": "Friday"}]"#,
        );

        let raw = extract_action_items(&stub, "llama3", "John will finish the report by Friday.")
            .await
            .unwrap();

        let mut session = Session::new();
        session.replace(raw);

        assert_eq!(session.items().len(), 1);
        let item = &session.items()[0];
        assert!(!item.completed);
        assert_eq!(item.task, "Finish the report");

        let view = project(session.items(), &ViewOptions::default());
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].assignee, "John");
        assert_eq!(view.groups[0].items[0].id, item.id);
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let err = extract_action_items(&FailingGenerator, "llama3", "Some transcript.")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Generation(_)));
    }
}

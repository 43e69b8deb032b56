use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Seam between the pipeline and the generation backend.
///
/// Implementors must be `Send + Sync` so a client can be shared across tasks
/// (e.g. behind `Arc<dyn Generator>`). Tests substitute a stub implementation
/// to drive the pipeline without a live backend.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Send a prompt to the named model and return the raw textual completion.
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, ExtractError>;
}

/// Configuration for the Ollama client
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server (e.g. "http://localhost:11434")
    pub base_url: String,
    /// Model to use (must be pulled locally, e.g. "llama3")
    pub model: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
        }
    }
}

impl OllamaConfig {
    /// Create config from environment variables, falling back to defaults.
    /// `OLLAMA_HOST` overrides the base URL.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("OLLAMA_HOST") {
            if !host.is_empty() {
                config.base_url = host;
            }
        }
        config
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }
}

/// Client for a local/remote Ollama server.
///
/// Performs one chat request per extraction with `format: "json"` so the
/// backend constrains its completion to JSON. No internal retries; failures
/// surface as [`ExtractError::Generation`] and retry policy is left to the
/// caller.
pub struct OllamaClient {
    client: Client,
    config: OllamaConfig,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

#[async_trait]
impl Generator for OllamaClient {
    async fn generate(&self, prompt: &str, model: &str) -> Result<String, ExtractError> {
        let request = ChatRequest {
            model: model.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            format: "json".to_string(),
            stream: false,
        };

        let url = format!("{}/api/chat", self.config.base_url.trim_end_matches('/'));

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractError::Generation(format!(
                "Ollama API error: {} - {}",
                status, body
            )));
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| ExtractError::Generation(format!("malformed Ollama response: {}", e)))?;

        Ok(response.message.content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    format: String,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OllamaConfig::default();
        assert_eq!(config.base_url, "http://localhost:11434");
        assert_eq!(config.model, "llama3");
    }

    #[test]
    fn test_chat_request_wire_shape() {
        let request = ChatRequest {
            model: "llama3".to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: "extract".to_string(),
            }],
            format: "json".to_string(),
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama3");
        assert_eq!(json["format"], "json");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[test]
    fn test_chat_response_parses_content() {
        let json = r#"{"model": "llama3", "message": {"role": "assistant", "content": "[]"}, "done": true}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.message.content, "[]");
    }
}

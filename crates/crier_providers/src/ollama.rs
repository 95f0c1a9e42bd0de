//! Text generation via a local Ollama server.

use async_trait::async_trait;
use crier_core::{PromptLibrary, Topic};
use crier_error::{CrierResult, GenerationError};
use crier_interface::TextGenerator;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const SYSTEM_PROMPT: &str =
    "You are an AI designed to create engaging social posts. Respond with only the post text.";

/// Generates post copy with a locally-hosted Ollama model.
///
/// Issues a non-streaming `/api/chat` request with a fixed system prompt and
/// the topic's prompt from the [`PromptLibrary`].
pub struct OllamaGenerator {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    prompts: PromptLibrary,
}

impl OllamaGenerator {
    /// Create a generator for the given Ollama endpoint and model.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        prompts: PromptLibrary,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            prompts,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    #[instrument(skip(self), fields(model = %self.model, topic = %topic))]
    async fn generate(&self, topic: &Topic) -> CrierResult<Option<String>> {
        let prompt = self.prompts.prompt_for(topic);
        let url = format!("{}/api/chat", self.endpoint.trim_end_matches('/'));

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            stream: false,
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::new("ollama", format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(
                GenerationError::new("ollama", format!("status {}", response.status())).into(),
            );
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::new("ollama", format!("bad response body: {e}")))?;

        let content = body.message.content.trim().to_string();
        if content.is_empty() {
            debug!("model returned empty content");
            return Ok(None);
        }

        debug!(chars = content.chars().count(), "generated post copy");
        Ok(Some(content))
    }

    fn provider_name(&self) -> &'static str {
        "ollama"
    }
}

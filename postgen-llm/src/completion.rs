//! Generation request shape and backend trait

use async_trait::async_trait;
use postgen_core::PostgenResult;

/// A single free-text prompt plus sampling parameters
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    /// Upper bound on generated tokens
    pub max_tokens: u32,
    pub temperature: f32,
    /// Generation halts before emitting any of these
    pub stop: Vec<String>,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
            temperature,
            stop: Vec::new(),
            presence_penalty: None,
            frequency_penalty: None,
        }
    }

    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop.push(stop.into());
        self
    }

    /// Discourage repeating topics (presence) and exact tokens (frequency)
    pub fn with_penalties(mut self, presence: f32, frequency: f32) -> Self {
        self.presence_penalty = Some(presence);
        self.frequency_penalty = Some(frequency);
        self
    }
}

/// Text-completion backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Return the raw generated text for `request`
    async fn complete(&self, request: &CompletionRequest) -> PostgenResult<String>;
}

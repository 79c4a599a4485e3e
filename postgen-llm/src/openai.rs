use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use postgen_core::{AppConfig, PostgenError, PostgenResult};
use tracing::{debug, instrument};

use crate::completion::{CompletionRequest, TextGenerator};

const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAIClient {
    pub fn new(api_key: &str) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Client::with_config(config),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Client for an OpenAI-compatible server at `api_base`
    pub fn with_api_base(api_key: &str, api_base: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base.trim_end_matches('/'));
        Self {
            client: Client::with_config(config),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Build a client from process configuration (key, model and optional base URL)
    pub fn from_config(config: &AppConfig) -> Self {
        let client = match &config.openai_base_url {
            Some(base_url) => Self::with_api_base(&config.openai_api_key, base_url),
            None => Self::new(&config.openai_api_key),
        };
        client.with_model(&config.openai_model)
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for OpenAIClient {
    #[instrument(skip(self, request), fields(model = %self.model, max_tokens = request.max_tokens))]
    async fn complete(&self, request: &CompletionRequest) -> PostgenResult<String> {
        let message: ChatCompletionRequestMessage = ChatCompletionRequestUserMessageArgs::default()
            .content(request.prompt.as_str())
            .build()
            .map_err(|e| PostgenError::internal(e.to_string()))?
            .into();

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.model)
            .messages(vec![message])
            .temperature(request.temperature)
            .max_tokens(request.max_tokens);

        if !request.stop.is_empty() {
            args.stop(request.stop.clone());
        }
        if let Some(presence) = request.presence_penalty {
            args.presence_penalty(presence);
        }
        if let Some(frequency) = request.frequency_penalty {
            args.frequency_penalty(frequency);
        }

        let chat_request = args
            .build()
            .map_err(|e| PostgenError::internal(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(chat_request)
            .await
            .map_err(|e| PostgenError::api(format!("OpenAI API error: {}", e)))?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| PostgenError::parse("No response from OpenAI"))?;

        debug!("OpenAI returned {} chars", content.len());
        Ok(content)
    }
}

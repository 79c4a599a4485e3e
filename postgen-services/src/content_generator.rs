//! Topic to article pipeline
//!
//! One news lookup, then three sequential generation calls:
//! title (topic + digest), meta-description (title only) and body
//! (topic + digest). Any failed call aborts the request and the output of
//! earlier steps is dropped.

use std::sync::Arc;

use postgen_core::{GeneratedArticle, GenerationError, GenerationStep};
use postgen_llm::TextGenerator;
use postgen_news::NewsLookup;
use tracing::{debug, error, info, instrument};

use crate::prompts::{self, StepParams};

/// Service that generates a title, meta-description and body for a topic
#[derive(Clone)]
pub struct ContentGenerator {
    news: NewsLookup,
    generator: Arc<dyn TextGenerator>,
}

impl ContentGenerator {
    pub fn new(news: NewsLookup, generator: Arc<dyn TextGenerator>) -> Self {
        Self { news, generator }
    }

    /// Run the full pipeline for `topic`
    ///
    /// Returns the trimmed output of all three steps or the error of the first
    /// failed step. An empty completion is kept as an empty field.
    #[instrument(skip(self))]
    pub async fn generate(&self, topic: &str) -> Result<GeneratedArticle, GenerationError> {
        let digest = self.news.lookup(topic).await;

        let title = self
            .run_step(GenerationStep::Title, prompts::title_prompt(topic, &digest))
            .await?;

        let meta_description = self
            .run_step(
                GenerationStep::MetaDescription,
                prompts::meta_description_prompt(&title),
            )
            .await?;

        let post_content = self
            .run_step(GenerationStep::Body, prompts::body_prompt(topic, &digest))
            .await?;

        info!(
            "Generated article for '{}': title={} chars, body={} chars",
            topic,
            title.len(),
            post_content.len()
        );

        Ok(GeneratedArticle {
            title,
            meta_description,
            post_content,
        })
    }

    async fn run_step(
        &self,
        step: GenerationStep,
        prompt: String,
    ) -> Result<String, GenerationError> {
        let request = StepParams::for_step(step).request(prompt);

        let raw = self.generator.complete(&request).await.map_err(|e| {
            error!("Generation failed at {} step: {}", step, e);
            GenerationError::new(step, e)
        })?;

        let text = raw.trim();
        debug!("Completed {} step ({} chars)", step, text.len());
        Ok(text.to_string())
    }
}

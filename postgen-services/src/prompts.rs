//! Prompt templates and sampling parameters for each generation step

use postgen_core::{GenerationStep, NewsDigest};
use postgen_llm::CompletionRequest;

/// Fixed sampling parameters for one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub max_tokens: u32,
    pub temperature: f32,
    /// Cut generation at the first occurrence of this marker
    pub stop: Option<&'static str>,
    /// (presence, frequency)
    pub penalties: Option<(f32, f32)>,
}

impl StepParams {
    /// Single line, stopped at the first newline
    pub const TITLE: StepParams = StepParams {
        max_tokens: 60,
        temperature: 0.5,
        stop: Some("\n"),
        penalties: None,
    };

    /// Single sentence, stopped at the first period
    pub const META_DESCRIPTION: StepParams = StepParams {
        max_tokens: 120,
        temperature: 0.5,
        stop: Some("."),
        penalties: None,
    };

    /// Long-form and length-bound only
    pub const BODY: StepParams = StepParams {
        max_tokens: 2000,
        temperature: 0.3,
        stop: None,
        penalties: Some((0.6, 0.6)),
    };

    pub fn for_step(step: GenerationStep) -> StepParams {
        match step {
            GenerationStep::Title => Self::TITLE,
            GenerationStep::MetaDescription => Self::META_DESCRIPTION,
            GenerationStep::Body => Self::BODY,
        }
    }

    pub fn request(&self, prompt: String) -> CompletionRequest {
        let mut request = CompletionRequest::new(prompt, self.max_tokens, self.temperature);
        if let Some(stop) = self.stop {
            request = request.with_stop(stop);
        }
        if let Some((presence, frequency)) = self.penalties {
            request = request.with_penalties(presence, frequency);
        }
        request
    }
}

pub fn title_prompt(topic: &str, digest: &NewsDigest) -> String {
    format!(
        "Come up with an engaging and accurate headline for an article on the topic '{}', \
         taking the recent news into account:\n{}\n\
         The headline should be interesting and clearly convey the essence of the topic.",
        topic,
        digest.as_str()
    )
}

/// Only the generated title feeds this prompt
pub fn meta_description_prompt(title: &str) -> String {
    format!(
        "Write a meta description for an article titled: '{}'. \
         It should be complete, informative and contain the main keywords.",
        title
    )
}

pub fn body_prompt(topic: &str, digest: &NewsDigest) -> String {
    format!(
        r#"You are a professional journalist who writes in-depth, engaging articles.
Write a detailed article on the topic '{}', using the recent news:
{}

The article must:
1. Be informative and logically structured
2. Contain at least 2000 characters
3. Have a clear structure with subheadings
4. Include an analysis of current trends
5. Have an introduction, a main body and a conclusion
6. Include examples from the recent news
7. Use paragraphs of at least 3-4 sentences each
8. Be easy to read and substantive"#,
        topic,
        digest.as_str()
    )
}

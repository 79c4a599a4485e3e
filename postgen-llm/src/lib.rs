//! Text-generation client
//!
//! This crate exposes the [`TextGenerator`] seam used by the content pipeline
//! and an OpenAI chat-completions implementation of it.

pub mod completion;
pub mod openai;

pub use completion::{CompletionRequest, TextGenerator};
pub use openai::OpenAIClient;

//! Business logic for the Post Generator service
//!
//! This crate provides the pipeline that turns one topic into a fully
//! populated [`postgen_core::GeneratedArticle`]: a news lookup followed by
//! three dependent generation calls.

pub mod content_generator;
pub mod prompts;

pub use content_generator::ContentGenerator;
pub use prompts::StepParams;

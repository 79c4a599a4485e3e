//! Error types for the post generator

use std::fmt;

use thiserror::Error;

/// Workspace-wide error type for calls to external services
#[derive(Error, Debug)]
pub enum PostgenError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostgenError {
    pub fn api(msg: impl Into<String>) -> Self {
        PostgenError::Api(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        PostgenError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        PostgenError::Parse(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        PostgenError::Internal(msg.into())
    }
}

/// Result type alias for calls to external services
pub type PostgenResult<T> = Result<T, PostgenError>;

/// One of the three dependent generation calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationStep {
    Title,
    MetaDescription,
    Body,
}

impl GenerationStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStep::Title => "title",
            GenerationStep::MetaDescription => "meta_description",
            GenerationStep::Body => "body",
        }
    }
}

impl fmt::Display for GenerationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fatal error for a single article request
///
/// Raised when any of the three generation steps fails. Output from steps
/// that already completed is discarded.
#[derive(Error, Debug)]
#[error("content generation failed at {step} step: {source}")]
pub struct GenerationError {
    pub step: GenerationStep,
    #[source]
    pub source: PostgenError,
}

impl GenerationError {
    pub fn new(step: GenerationStep, source: PostgenError) -> Self {
        Self { step, source }
    }
}

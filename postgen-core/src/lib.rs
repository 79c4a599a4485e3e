//! Core types for the Post Generator service
//!
//! This crate defines the shared data structures used across the workspace:
//! the request-scoped article types, the process configuration and the
//! error types that flow between the news, generation and API layers.

pub mod article;
pub mod config;
pub mod error;

pub use article::{
    GeneratedArticle, NewsDigest, Topic, MAX_HEADLINES, NO_NEWS_SENTINEL, PROVIDER_ERROR_SENTINEL,
};
pub use config::{AppConfig, ConfigError, NewsProvider};
pub use error::{GenerationError, GenerationStep, PostgenError, PostgenResult};

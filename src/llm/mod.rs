// src/llm/mod.rs
//! Hosted language model access. Everything that talks to the model goes
//! through [`LanguageModel`], so the pipeline can run against a fake in tests.

use async_trait::async_trait;
use thiserror::Error;

pub mod chat_client;
pub mod prompts;

pub use chat_client::ChatClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse model response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Model returned empty content")]
    EmptyContent,
}

/// Single-shot prompt in, text out.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Builds a fresh model client for each submission.
pub trait ModelProvider: Send + Sync {
    fn build(&self) -> Result<Box<dyn LanguageModel>, LlmError>;
}

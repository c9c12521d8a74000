// src/error.rs
use thiserror::Error;

use crate::llm::LlmError;

/// Message surfaced when the model's job list cannot be parsed. Oversized
/// pages make the model truncate its JSON, which is the usual cause.
pub const JOB_PARSE_MESSAGE: &str = "Context too big. Unable to parse jobs.";

#[derive(Debug, Error)]
pub enum CoverLetterError {
    #[error("Unsupported file format: {0}. Please upload a .docx or .pdf file.")]
    UnsupportedFormat(String),

    #[error("Failed to read resume: {0}")]
    Document(String),

    #[error("Failed to fetch job posting: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Language model client unavailable: {0}")]
    ModelSetup(#[source] LlmError),

    #[error("Job extraction request failed: {0}")]
    JobExtraction(#[source] LlmError),

    #[error("{}", JOB_PARSE_MESSAGE)]
    JobParse,

    #[error("Cover letter generation failed: {0}")]
    Generation(#[source] LlmError),
}

pub type Result<T> = std::result::Result<T, CoverLetterError>;

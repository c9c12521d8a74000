//! Cover letter generator: reads a résumé, scrapes a careers page and asks a
//! hosted language model for one personalized cover letter per job found.

pub mod config;
pub mod cover_letter;
pub mod error;
pub mod jobs;
pub mod llm;
pub mod pipeline;
pub mod resume;
pub mod utils;
pub mod web;

pub use config::{ModelConfig, Settings};
pub use cover_letter::{write_cover_letter, CoverLetter};
pub use error::{CoverLetterError, Result};
pub use jobs::{extract_jobs, HttpPageFetcher, JobPosting, PageFetcher};
pub use llm::{LanguageModel, LlmError, ModelProvider};
pub use pipeline::{CoverLetterService, LetterOutcome, Submission, SubmissionOutcome};
pub use resume::{extract_profile, read_resume, DocumentFormat, RawDocument, ResumeProfile};
pub use utils::clean_text;
pub use web::start_web_server;

// src/cover_letter.rs
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::{CoverLetterError, Result};
use crate::jobs::JobPosting;
use crate::llm::{prompts, LanguageModel};
use crate::resume::ResumeProfile;

#[derive(Debug, Clone, Serialize)]
pub struct CoverLetter {
    pub role: String,
    pub text: String,
    pub generated_at: DateTime<Utc>,
}

/// Generate a cover letter for one posting. The model's reply is returned
/// verbatim.
pub async fn write_cover_letter(
    model: &dyn LanguageModel,
    job: &JobPosting,
    profile: &ResumeProfile,
) -> Result<CoverLetter> {
    info!("Writing cover letter for role: {}", job.role);

    let prompt = prompts::cover_letter_prompt(job, profile);
    let text = model
        .complete(&prompt)
        .await
        .map_err(CoverLetterError::Generation)?;

    Ok(CoverLetter {
        role: job.role.clone(),
        text,
        generated_at: Utc::now(),
    })
}

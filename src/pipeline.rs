// src/pipeline.rs
//! One submission, end to end: résumé in, one cover letter per job out.

use serde::Serialize;
use tracing::{error, info, info_span, warn, Instrument};

use crate::cover_letter::{write_cover_letter, CoverLetter};
use crate::error::{CoverLetterError, Result};
use crate::jobs::{extract_jobs, JobPosting, PageFetcher};
use crate::llm::ModelProvider;
use crate::resume::{extract_profile, read_resume, RawDocument};

pub const MISSING_RESUME_MESSAGE: &str = "Please upload your resume to proceed.";
pub const MISSING_URL_MESSAGE: &str = "Please enter the job posting URL.";

/// What the user handed in with one press of the generate button.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub resume: Option<RawDocument>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LetterOutcome {
    Generated {
        job: JobPosting,
        cover_letter: CoverLetter,
    },
    Failed {
        job: JobPosting,
        error: String,
    },
}

/// Result of a submission as shown to the user.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Warning { message: String },
    Letters { letters: Vec<LetterOutcome> },
    Error { message: String },
}

pub struct CoverLetterService<F, P> {
    fetcher: F,
    models: P,
}

impl<F, P> CoverLetterService<F, P>
where
    F: PageFetcher,
    P: ModelProvider,
{
    pub fn new(fetcher: F, models: P) -> Self {
        Self { fetcher, models }
    }

    /// Run a submission. Errors never escape: they come back as
    /// [`SubmissionOutcome::Error`] carrying the error text.
    pub async fn submit(&self, submission: Submission) -> SubmissionOutcome {
        let (resume, url) = match validate(submission) {
            Ok(inputs) => inputs,
            Err(message) => {
                return SubmissionOutcome::Warning {
                    message: message.to_string(),
                }
            }
        };

        let request_id = uuid::Uuid::new_v4();
        let span = info_span!("submission", %request_id);

        match self.run(resume, &url).instrument(span).await {
            Ok(letters) => SubmissionOutcome::Letters { letters },
            Err(e) => {
                error!(%request_id, "Submission failed: {}", e);
                SubmissionOutcome::Error {
                    message: format!("An Error Occurred: {}", e),
                }
            }
        }
    }

    async fn run(&self, resume: RawDocument, url: &str) -> Result<Vec<LetterOutcome>> {
        let resume_text = tokio::task::spawn_blocking(move || read_resume(&resume))
            .await
            .map_err(|e| CoverLetterError::Document(e.to_string()))??;

        let profile = extract_profile(&resume_text);
        info!("Resume profile extracted for {}", profile.name);

        let page_text = self.fetcher.fetch_page_text(url).await?;

        let model = self.models.build().map_err(CoverLetterError::ModelSetup)?;
        let jobs = extract_jobs(model.as_ref(), &page_text).await?;

        let mut letters = Vec::with_capacity(jobs.len());
        for job in jobs {
            let outcome = match write_cover_letter(model.as_ref(), &job, &profile).await {
                Ok(cover_letter) => LetterOutcome::Generated { job, cover_letter },
                Err(e) => {
                    warn!("Cover letter for {} failed: {}", job.role, e);
                    LetterOutcome::Failed {
                        job,
                        error: e.to_string(),
                    }
                }
            };
            letters.push(outcome);
        }

        Ok(letters)
    }
}

/// The résumé check comes first, so a submission missing both inputs asks
/// for the résumé.
fn validate(submission: Submission) -> std::result::Result<(RawDocument, String), &'static str> {
    let resume = submission
        .resume
        .filter(|resume| !resume.is_empty())
        .ok_or(MISSING_RESUME_MESSAGE)?;
    let url = submission
        .url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .ok_or(MISSING_URL_MESSAGE)?;
    Ok((resume, url))
}

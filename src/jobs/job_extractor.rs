// src/jobs/job_extractor.rs
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{info, warn};

use super::JobPosting;
use crate::error::{CoverLetterError, Result};
use crate::llm::{prompts, LanguageModel};

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?(.*?)(?:```|$)").expect("Invalid regex pattern"));

/// Ask the model for the job postings on a careers page.
///
/// A reply that is not valid JSON yields [`CoverLetterError::JobParse`] and no
/// postings; there is no retry.
pub async fn extract_jobs(model: &dyn LanguageModel, page_text: &str) -> Result<Vec<JobPosting>> {
    let prompt = prompts::job_extraction_prompt(page_text);
    let reply = model
        .complete(&prompt)
        .await
        .map_err(CoverLetterError::JobExtraction)?;

    let jobs = parse_jobs(&reply)?;
    info!("Extracted {} job posting(s)", jobs.len());
    Ok(jobs)
}

/// Parse the model reply into postings. A single object is treated as a
/// one-element list; any element that is not an object fails the whole reply.
///
/// The reply is parsed as-is first; only when that fails is a Markdown code
/// fence around it unwrapped.
pub fn parse_jobs(reply: &str) -> Result<Vec<JobPosting>> {
    let value = serde_json::from_str::<Value>(reply.trim())
        .or_else(|_| serde_json::from_str(strip_code_fence(reply)))
        .map_err(|e| {
            warn!("Model reply is not valid JSON: {}", e);
            CoverLetterError::JobParse
        })?;

    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| JobPosting::from_value(item).ok_or(CoverLetterError::JobParse))
            .collect(),
        object @ Value::Object(_) => Ok(vec![
            JobPosting::from_value(&object).ok_or(CoverLetterError::JobParse)?
        ]),
        other => {
            warn!("Model reply is JSON but not a job list: {}", other);
            Err(CoverLetterError::JobParse)
        }
    }
}

fn strip_code_fence(reply: &str) -> &str {
    JSON_FENCE
        .captures(reply)
        .and_then(|captures| captures.get(1))
        .map_or(reply, |body| body.as_str())
        .trim()
}

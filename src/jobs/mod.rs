// src/jobs/mod.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod job_extractor;
pub mod job_scraper;

pub use job_extractor::extract_jobs;
pub use job_scraper::{HttpPageFetcher, PageFetcher};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub role: String,
    pub experience: String,
    pub skills: String,
    pub description: String,
}

impl JobPosting {
    /// Build a posting from one element of the model's JSON reply.
    ///
    /// Models are loose with types: lists are joined with ", ", scalars are
    /// stringified and missing or null fields are left empty. Returns `None`
    /// when the value is not an object at all.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |key: &str| object.get(key).map(field_text).unwrap_or_default();

        Some(Self {
            role: field("role"),
            experience: field("experience"),
            skills: field("skills"),
            description: field("description"),
        })
    }

    /// The posting as it is embedded in the cover letter prompt.
    pub fn to_prompt_text(&self) -> String {
        serde_json::json!({
            "role": self.role,
            "experience": self.experience,
            "skills": self.skills,
            "description": self.description,
        })
        .to_string()
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(field_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

// src/web/types.rs

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::Serialize;

use crate::config::ModelConfig;
use crate::jobs::HttpPageFetcher;
use crate::pipeline::CoverLetterService;

/// The service as mounted in rocket state.
pub type AppService = CoverLetterService<HttpPageFetcher, ModelConfig>;

/// Both fields are optional so a missing input reaches the shell as a
/// warning instead of a form rejection.
#[derive(FromForm)]
pub struct GenerateForm<'f> {
    pub resume: Option<TempFile<'f>>,
    pub url: Option<String>,
}

pub struct ServerConfig {
    pub model: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
}

// src/web/handlers.rs

use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use super::types::{AppService, GenerateForm, HealthResponse, ServerConfig};
use crate::pipeline::{Submission, SubmissionOutcome};
use crate::resume::RawDocument;

pub async fn generate_cover_letters_handler(
    mut form: Form<GenerateForm<'_>>,
    service: &State<AppService>,
) -> Json<SubmissionOutcome> {
    let resume = match form.resume.as_mut() {
        Some(file) if file.len() > 0 => match read_upload(file).await {
            Ok(document) => Some(document),
            Err(e) => {
                error!("Failed to read uploaded resume: {}", e);
                return Json(SubmissionOutcome::Error {
                    message: format!("An Error Occurred: {}", e),
                });
            }
        },
        _ => None,
    };

    info!(
        "Cover letter request: resume={}, url={:?}",
        resume.is_some(),
        form.url
    );

    let submission = Submission {
        resume,
        url: form.url.take(),
    };

    Json(service.submit(submission).await)
}

pub async fn health_handler(config: &State<ServerConfig>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: config.model.clone(),
    })
}

async fn read_upload(file: &mut rocket::fs::TempFile<'_>) -> std::io::Result<RawDocument> {
    let media_type = file.content_type().map(|ct| ct.to_string());
    let file_name = file
        .raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str().to_string());

    let temp_path = std::env::temp_dir().join(format!("resume_upload_{}", uuid::Uuid::new_v4()));
    let bytes = with_scratch_file(&temp_path, |path| async move {
        file.persist_to(&path).await?;
        tokio::fs::read(&path).await
    })
    .await?;

    Ok(RawDocument::new(bytes, media_type, file_name))
}

/// Run `op` against a scratch path and remove whatever it left there,
/// whether it succeeded or not.
async fn with_scratch_file<T, F, Fut>(path: &Path, op: F) -> std::io::Result<T>
where
    F: FnOnce(PathBuf) -> Fut,
    Fut: Future<Output = std::io::Result<T>>,
{
    let result = op(path.to_path_buf()).await;
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!("Failed to remove temp upload {}: {}", path.display(), e);
        }
    }
    result
}

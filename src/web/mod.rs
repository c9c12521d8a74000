// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Rocket, State};
use tracing::info;

use crate::config::Settings;
use crate::jobs::HttpPageFetcher;
use crate::pipeline::{CoverLetterService, SubmissionOutcome};

const INDEX_HTML: &str = include_str!("index.html");
const MAX_UPLOAD_MIB: u64 = 10;

#[get("/")]
pub fn index() -> RawHtml<&'static str> {
    RawHtml(INDEX_HTML)
}

#[post("/cover-letters", data = "<form>")]
pub async fn generate_cover_letters(
    form: Form<GenerateForm<'_>>,
    service: &State<AppService>,
) -> Json<SubmissionOutcome> {
    handlers::generate_cover_letters_handler(form, service).await
}

#[get("/health")]
pub async fn health(config: &State<ServerConfig>) -> Json<HealthResponse> {
    handlers::health_handler(config).await
}

// Error catchers
#[rocket::catch(413)]
pub fn payload_too_large() -> Json<SubmissionOutcome> {
    Json(SubmissionOutcome::Error {
        message: format!("An Error Occurred: File size exceeds {}MB limit", MAX_UPLOAD_MIB),
    })
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<SubmissionOutcome> {
    Json(SubmissionOutcome::Error {
        message: "An Error Occurred: Invalid form submission".to_string(),
    })
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<SubmissionOutcome> {
    Json(SubmissionOutcome::Error {
        message: "An Error Occurred: Internal server error".to_string(),
    })
}

/// Assemble the rocket instance without launching it.
pub fn build_rocket(settings: &Settings) -> Result<Rocket<Build>> {
    let fetcher = HttpPageFetcher::new(&settings.fetch)?;
    let service: AppService = CoverLetterService::new(fetcher, settings.model.clone());

    let limits = Limits::default()
        .limit("file", MAX_UPLOAD_MIB.mebibytes())
        .limit("data-form", MAX_UPLOAD_MIB.mebibytes());

    let figment = rocket::Config::figment()
        .merge(("address", settings.server.address.clone()))
        .merge(("port", settings.server.port))
        .merge(("limits", limits));

    Ok(rocket::custom(figment)
        .manage(service)
        .manage(ServerConfig {
            model: settings.model.model.clone(),
        })
        .mount("/", routes![index])
        .register("/api", catchers![payload_too_large, unprocessable, internal_error])
        .mount("/api", routes![generate_cover_letters, health]))
}

pub async fn start_web_server(settings: Settings) -> Result<()> {
    let rocket = build_rocket(&settings)?;

    info!("Starting cover letter generator");
    info!("Model: {} via {}", settings.model.model, settings.model.api_url);
    info!(
        "Server: http://{}:{}",
        settings.server.address, settings.server.port
    );
    if settings.model.api_key.is_none() {
        info!("GROQ_API_KEY is not set; generation requests will fail until it is");
    }

    rocket
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}

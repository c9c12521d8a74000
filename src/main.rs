use anyhow::{Context, Result};
use clap::Parser;
use cover_letter::{start_web_server, Settings};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cover-letter")]
#[command(about = "Generate personalized cover letters from a resume and a job posting URL")]
struct Cli {
    /// YAML configuration file (defaults to ./config.yaml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind the web interface to
    #[arg(long)]
    address: Option<String>,

    /// Port to serve the web interface on
    #[arg(long)]
    port: Option<u16>,

    /// Also write JSON logs to this file (truncated on startup)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(address) = cli.address {
        settings = settings.with_address(address);
    }
    if let Some(port) = cli.port {
        settings = settings.with_port(port);
    }
    info!("Loaded settings: {:?}", settings);

    start_web_server(settings).await
}

fn init_logging(log_file: Option<&std::path::Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cover_letter=info,rocket::server=off"));

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

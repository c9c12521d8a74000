// src/jobs/job_scraper.rs
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Node};
use tracing::{debug, info};

use crate::config::FetchSettings;
use crate::error::Result;
use crate::utils::clean_text;

/// Elements whose text never renders.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Retrieves a job page and returns its normalized visible text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page_text(&self, url: &str) -> Result<String>;
}

pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page_text(&self, url: &str) -> Result<String> {
        info!("Fetching job page: {}", url);

        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let text = clean_text(&visible_text(&html));
        debug!(
            "Job page yielded {} chars of text ({} chars of markup)",
            text.len(),
            html.len()
        );
        Ok(text)
    }
}

/// All text nodes of the document in order, one per line, skipping scripts,
/// styles and other non-rendered content. Nodes keep their own whitespace so
/// words from neighbouring elements stay apart once newlines are stripped.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let blocks: Vec<&str> = document
        .root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => {
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
                });
                (!hidden).then_some(&**text)
            }
            _ => None,
        })
        .collect();

    blocks.join("\n")
}

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Result, SearchError};
use crate::query::SearchQuery;
use crate::Args;

/// Body of `GET /search/repositories`, reduced to what gets printed.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<Repository>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Decoded but never displayed.
    #[serde(default)]
    pub license: Option<serde_json::Value>,
    #[serde(default)]
    pub language: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub struct GitHubSearcher {
    client: Client,
    base_uri: String,
}

impl GitHubSearcher {
    /// Create a new GitHubSearcher for the API endpoint given in `args`
    pub fn new(args: &Args) -> Result<Self> {
        Self::with_base_uri(&args.github_api_uri)
    }

    pub fn with_base_uri(base_uri: &str) -> Result<Self> {
        // GitHub rejects requests without a User-Agent
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SearchError::Request)?;

        Ok(GitHubSearcher {
            client,
            base_uri: base_uri.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for `query`.
    pub fn url(&self, query: &SearchQuery) -> String {
        format!("{}/repositories?{}", self.base_uri, query)
    }

    /// Run one search request and decode the result list.
    ///
    /// The HTTP status is not checked: whatever JSON comes back is decoded.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let url = self.url(query);
        let spinner = progress_spinner(&url);

        debug!("Requesting URL: {}", url);
        let result = self.fetch(&url).await;
        spinner.finish_and_clear();

        let body = result?;
        let response: SearchResponse = serde_json::from_slice(&body)?;
        info!("Received {} repositories", response.items.len());
        Ok(response)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SearchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            warn!("API returned {} for {}", status, url);
        }

        // Reading to the end releases the connection on every path.
        let body = response.bytes().await.map_err(SearchError::Body)?;
        debug!("Read {} bytes of response body", body.len());
        Ok(body.to_vec())
    }
}

fn progress_spinner(url: &str) -> ProgressBar {
    if !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {wide_msg}")
    {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "));
    }
    pb.set_message(format!("Searching {}", url));
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

use std::time::Duration;

use async_trait::async_trait;
use catalog_protocol::{CatalogConfig, ListingRecord};

use crate::error::{FetchError, Result};
use crate::parse::parse_listing;

/// Where the raw listing markdown comes from.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}

/// Fetch the listing document and parse it.
pub async fn list_entries(source: &dyn ListingSource) -> Result<Vec<ListingRecord>> {
    let raw = source.fetch().await?;
    let records = parse_listing(&raw);
    if records.is_empty() {
        log::warn!(
            "no listing rows found in {} ({} bytes)",
            source.describe(),
            raw.len()
        );
    }
    Ok(records)
}

/// Plain HTTP GET against a fixed URL. Non-success statuses are errors; nothing is retried.
pub struct HttpListingSource {
    url: String,
    client: reqwest::Client,
}

impl HttpListingSource {
    pub fn new(url: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(concat!("mcp-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|error| FetchError::Client(error.to_string()))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::new(config.readme_url.clone(), config.http_timeout_ms)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch(&self) -> Result<String> {
        log::debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|error| FetchError::from_reqwest(&self.url, error))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|error| FetchError::from_reqwest(&self.url, error))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// A listing held in memory.
pub struct StaticListingSource {
    text: String,
}

impl StaticListingSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl ListingSource for StaticListingSource {
    async fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "in-memory listing".to_string()
    }
}

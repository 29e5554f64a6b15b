//! HTTP fetchers for the two report documents
//!
//! The documents are static JSON published next to the dashboard. One
//! GET per dialog open; no retries, no caching — a failed fetch simply
//! propagates to whoever asked.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{Config, USER_AGENT};
use crate::error::{Error, Result};
use crate::models::{CallReport, QueueReport};

/// Client for the published report documents.
#[derive(Debug, Clone)]
pub struct ReportClient {
    http: Client,
    base_url: String,
    call_report_file: String,
    queue_report_file: String,
}

impl ReportClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::InvalidArgument("base_url is empty".to_string()));
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::ConfigError(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            call_report_file: config.call_report_file.clone(),
            queue_report_file: config.queue_report_file.clone(),
        })
    }

    /// Create a client from config.yml / environment.
    pub fn from_env() -> Result<Self> {
        Self::new(&Config::new())
    }

    /// Fetch and decode the call-history report.
    pub async fn fetch_call_report(&self) -> Result<CallReport> {
        self.fetch_json(&self.call_report_file).await
    }

    /// Fetch and decode the queue analytics report.
    pub async fn fetch_queue_report(&self) -> Result<QueueReport> {
        self.fetch_json(&self.queue_report_file).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, document: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, document);
        debug!(url = %url, "Fetching report document");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::ConnectionError(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Report endpoint returned error status");
            return Err(Error::FetchFailed {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::ConnectionError(format!("Failed to read body: {}", e)))?;

        serde_json::from_str(&body).map_err(Error::from)
    }
}

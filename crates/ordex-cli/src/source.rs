//! Loading orders from a saved order-history page.
//!
//! The page is either scraped in-process or sent to a running
//! `ordex-server`, mirroring how the popup messages the page context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use ordex_core::{OrderRecord, ScrapeRequest, ScrapeResponse};
use ordex_scraper::ScrapeOptions;
use reqwest::Client;
use thiserror::Error;

const SCRAPE_PATH: &str = "/api/v1/scrape";

/// Why orders could not be loaded. The messages are shown to the user as-is.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Open your Amazon orders tab and try again.")]
    NoOrdersPage,

    #[error("No response from content script.")]
    NoResponse,

    /// Extraction failed in the page context; carries its message verbatim.
    #[error("{0}")]
    Scrape(String),

    #[error("Unable to load orders.")]
    Unavailable,
}

/// Where the page HTML comes from and who scrapes it.
#[derive(Debug, Clone)]
pub struct OrderSource {
    pub page: PathBuf,
    /// Base URL of an `ordex-server`; scrape in-process when `None`.
    pub server: Option<String>,
}

impl OrderSource {
    /// Reads the page and returns its orders.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] describing the first failure: unreadable page,
    /// missing reply, or a scrape error reported by the page context.
    pub async fn load(
        &self,
        options: &ScrapeOptions,
        timeout_secs: u64,
    ) -> Result<Vec<OrderRecord>, LoadError> {
        let html = read_page(&self.page)?;
        let request = ScrapeRequest::scrape_orders(html);

        let response = match &self.server {
            Some(base_url) => {
                let client =
                    PageClient::new(base_url, timeout_secs).map_err(|_| LoadError::NoResponse)?;
                client.send(&request).await?
            }
            None => ordex_scraper::respond(&request, options).ok_or(LoadError::NoResponse)?,
        };
        into_orders(response)
    }
}

fn read_page(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| {
        tracing::debug!(path = %path.display(), error = %e, "cannot read order page");
        LoadError::NoOrdersPage
    })
}

fn into_orders(response: ScrapeResponse) -> Result<Vec<OrderRecord>, LoadError> {
    match response.into_result() {
        Ok(orders) => Ok(orders),
        // A blank reply reports a failure, not an empty order list.
        Err(message) if message.trim().is_empty() => Err(LoadError::Unavailable),
        Err(message) => Err(LoadError::Scrape(message)),
    }
}

/// HTTP client for the page-context service.
pub struct PageClient {
    client: Client,
    scrape_url: String,
}

impl PageClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest::Client` cannot be built.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("ordex-cli/0.1")
            .build()?;
        Ok(Self {
            client,
            scrape_url: format!("{}{SCRAPE_PATH}", base_url.trim_end_matches('/')),
        })
    }

    /// Sends `request` and returns the service's reply.
    ///
    /// # Errors
    ///
    /// - [`LoadError::NoResponse`] on transport failure or an empty or
    ///   unreadable body.
    /// - [`LoadError::Unavailable`] when the service refuses the request.
    pub async fn send(&self, request: &ScrapeRequest) -> Result<ScrapeResponse, LoadError> {
        let response = self
            .client
            .post(&self.scrape_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %self.scrape_url, error = %e, "page-context service unreachable");
                LoadError::NoResponse
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "page-context service refused the request");
            return Err(LoadError::Unavailable);
        }

        let body = response.text().await.map_err(|_| LoadError::NoResponse)?;
        if body.trim().is_empty() {
            return Err(LoadError::NoResponse);
        }
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "unreadable reply from page-context service");
            LoadError::NoResponse
        })
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;

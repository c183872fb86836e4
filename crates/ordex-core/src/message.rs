//! Request/response contract between the popup surface and the page context.
//!
//! A scrape is a one-shot exchange: the request names the `SCRAPE_ORDERS`
//! message kind and carries the rendered page, the response carries either
//! the order list or a plain error string, never both.

use serde::{Deserialize, Serialize};

use crate::model::OrderRecord;

/// Message kind meaning "scrape the current page now".
pub const SCRAPE_ORDERS: &str = "SCRAPE_ORDERS";

/// Outcome of a scrape as seen by the popup surface.
pub type ScrapeResult = Result<Vec<OrderRecord>, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    #[serde(rename = "type")]
    pub kind: String,
    /// Rendered HTML of the page to scrape.
    #[serde(default)]
    pub html: String,
}

impl ScrapeRequest {
    #[must_use]
    pub fn scrape_orders(html: impl Into<String>) -> Self {
        Self {
            kind: SCRAPE_ORDERS.to_string(),
            html: html.into(),
        }
    }

    #[must_use]
    pub fn is_scrape_orders(&self) -> bool {
        self.kind == SCRAPE_ORDERS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScrapeResponse {
    Orders { orders: Vec<OrderRecord> },
    Error { error: String },
}

impl ScrapeResponse {
    #[must_use]
    pub fn into_result(self) -> ScrapeResult {
        match self {
            ScrapeResponse::Orders { orders } => Ok(orders),
            ScrapeResponse::Error { error } => Err(error),
        }
    }
}

impl From<ScrapeResult> for ScrapeResponse {
    fn from(result: ScrapeResult) -> Self {
        match result {
            Ok(orders) => ScrapeResponse::Orders { orders },
            Err(error) => ScrapeResponse::Error { error },
        }
    }
}

//! Whole-page extraction.

use ordex_core::OrderRecord;
use scraper::Html;

use crate::options::ScrapeOptions;
use crate::order::extract_order;
use crate::selectors::page;

/// Extracts every retained order card in document order.
///
/// Cards that yield neither items nor an order number are dropped. A page
/// without order cards produces an empty list.
#[must_use]
pub fn scrape_page(document: &Html, options: &ScrapeOptions) -> Vec<OrderRecord> {
    let orders: Vec<OrderRecord> = document
        .select(&page::ORDER_CARD)
        .map(|card| extract_order(card, options))
        .filter(OrderRecord::is_retained)
        .collect();
    tracing::info!(orders = orders.len(), "scraped order page");
    orders
}

/// Parses `html` as a full document and runs [`scrape_page`] on it.
#[must_use]
pub fn scrape_html(html: &str, options: &ScrapeOptions) -> Vec<OrderRecord> {
    scrape_page(&Html::parse_document(html), options)
}

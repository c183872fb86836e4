//! Page-context message handling.
//!
//! Answers a `SCRAPE_ORDERS` request with either the orders or an error
//! string. Extraction never propagates a failure to the caller: a panic
//! during extraction becomes an error response.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use ordex_core::{OrderRecord, ScrapeRequest, ScrapeResponse};

use crate::error::ScrapeError;
use crate::options::ScrapeOptions;
use crate::page::scrape_html;

/// Message used when a failure carries no readable payload.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Handles one request from the popup surface.
///
/// Returns `None` for message kinds other than `SCRAPE_ORDERS`; those get no
/// reply.
#[must_use]
pub fn respond(request: &ScrapeRequest, options: &ScrapeOptions) -> Option<ScrapeResponse> {
    if !request.is_scrape_orders() {
        tracing::debug!(kind = %request.kind, "ignoring message");
        return None;
    }

    let result = run_scrape(&request.html, options).map_err(|err| {
        tracing::warn!(error = %err, "order extraction failed");
        err.to_string()
    });
    Some(ScrapeResponse::from(result))
}

/// Runs the page scrape, turning a panic into [`ScrapeError::ExtractionPanicked`].
///
/// # Errors
///
/// Returns [`ScrapeError::ExtractionPanicked`] when extraction panics.
pub fn run_scrape(
    html: &str,
    options: &ScrapeOptions,
) -> Result<Vec<OrderRecord>, ScrapeError> {
    guard(|| scrape_html(html, options))
}

/// Runs `extract`, catching any panic it raises.
fn guard<F>(extract: F) -> Result<Vec<OrderRecord>, ScrapeError>
where
    F: FnOnce() -> Vec<OrderRecord>,
{
    panic::catch_unwind(AssertUnwindSafe(extract)).map_err(|payload| {
        ScrapeError::ExtractionPanicked {
            message: panic_message(payload.as_ref()),
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_ERROR.to_owned()
    }
}

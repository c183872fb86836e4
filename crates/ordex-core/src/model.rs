//! Order records extracted from a rendered order-history page.
//!
//! Price, value, and date fields carry the page's display text verbatim
//! (currency symbols, locale formatting). Numeric interpretation belongs to
//! the export side.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static ORDER_NUMBER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Order\s*#\s*").expect("valid order label regex"));

/// A single purchased product inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product title. Never empty: items without a title are not extracted.
    pub title: String,
    /// Product image URL, empty when the page shows none.
    pub image_url: String,
    /// Price display text, e.g. `"$12.99"`. Often empty on order history.
    pub price: String,
    /// Always at least 1.
    pub quantity: u32,
    /// Absolute product detail URL, empty when no link was found.
    pub product_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Shipped,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// One order card as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Order id text exactly as displayed; may still carry an `Order #` label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    pub items: Vec<LineItem>,
}

impl OrderRecord {
    /// Returns `true` when the record is worth keeping: it has at least one
    /// item or a non-empty order number.
    #[must_use]
    pub fn is_retained(&self) -> bool {
        !self.items.is_empty() || self.order_number.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Order number with any `Order #` label removed, for display and export.
    ///
    /// Returns an empty string when no order number was extracted.
    #[must_use]
    pub fn display_order_number(&self) -> String {
        self.order_number
            .as_deref()
            .map(strip_order_label)
            .unwrap_or_default()
    }

    /// Total number of line items in this order.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Removes the first `Order #` label (case-insensitive) and trims the rest.
#[must_use]
pub fn strip_order_label(raw: &str) -> String {
    ORDER_NUMBER_LABEL.replace(raw, "").trim().to_string()
}

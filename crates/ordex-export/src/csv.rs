//! CSV serialization of the loaded order list.
//!
//! One data row is written per (order, item) pair, so orders without items
//! produce no rows. Fields are quoted only when they contain a comma, a
//! double quote, or a newline. Records are separated by `\n` with no
//! trailing newline.

use chrono::{DateTime, Utc};
use ordex_core::{CsvSchema, LineItem, OrderRecord};

use crate::error::ExportError;
use crate::filename::export_filename;

const DETAILED_HEADERS: [&str; 8] = [
    "Order #",
    "Order Date",
    "Order Value",
    "Item Title",
    "Item Price",
    "Item Quantity",
    "Product URL",
    "Image URL",
];

const SUMMARY_HEADERS: [&str; 7] = [
    "Order #",
    "Order Date",
    "Order Value",
    "Status",
    "Item Title",
    "Item Quantity",
    "Product URL",
];

/// A ready-to-deliver export: file contents plus the name to store it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub csv_content: String,
    pub filename: String,
}

/// Column headers for `schema`, in output order.
#[must_use]
pub fn headers(schema: CsvSchema) -> &'static [&'static str] {
    match schema {
        CsvSchema::Detailed => &DETAILED_HEADERS,
        CsvSchema::Summary => &SUMMARY_HEADERS,
    }
}

/// Quotes `field` when it contains a comma, double quote, or newline,
/// doubling any embedded quotes. Other fields are returned unchanged.
#[must_use]
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serializes `orders` in the given column layout.
///
/// Returns an empty string for an empty order list; otherwise the header
/// row followed by one row per item.
#[must_use]
pub fn orders_to_csv(orders: &[OrderRecord], schema: CsvSchema) -> String {
    if orders.is_empty() {
        return String::new();
    }

    let mut lines = vec![headers(schema).join(",")];
    for order in orders {
        let order_number = order.display_order_number();
        let date = order.date.as_deref().unwrap_or_default();
        let value = order.order_value.as_deref().unwrap_or_default();
        for item in &order.items {
            let row = match schema {
                CsvSchema::Detailed => detailed_row(&order_number, date, value, item),
                CsvSchema::Summary => {
                    let status = order
                        .status
                        .map(|s| s.to_string())
                        .unwrap_or_default();
                    summary_row(&order_number, date, value, &status, item)
                }
            };
            lines.push(row.join(","));
        }
    }
    lines.join("\n")
}

fn detailed_row(order_number: &str, date: &str, value: &str, item: &LineItem) -> Vec<String> {
    vec![
        escape_field(order_number),
        escape_field(date),
        escape_field(value),
        escape_field(&item.title),
        escape_field(&item.price),
        item.quantity.to_string(),
        escape_field(&item.product_url),
        escape_field(&item.image_url),
    ]
}

fn summary_row(
    order_number: &str,
    date: &str,
    value: &str,
    status: &str,
    item: &LineItem,
) -> Vec<String> {
    vec![
        escape_field(order_number),
        escape_field(date),
        escape_field(value),
        escape_field(status),
        escape_field(&item.title),
        item.quantity.to_string(),
        escape_field(&item.product_url),
    ]
}

/// Builds the CSV contents and timestamped file name for an export.
#[must_use]
pub fn generate_csv_export(
    orders: &[OrderRecord],
    schema: CsvSchema,
    now: DateTime<Utc>,
) -> CsvExport {
    let csv_content = orders_to_csv(orders, schema);
    let filename = export_filename(now);
    tracing::debug!(
        %filename,
        %schema,
        orders = orders.len(),
        bytes = csv_content.len(),
        "generated csv export"
    );
    CsvExport {
        csv_content,
        filename,
    }
}

/// Refuses an export that would contain no item rows.
///
/// # Errors
///
/// Returns [`ExportError::NothingToExport`] when `orders` is empty or no
/// order has any items.
pub fn ensure_exportable(orders: &[OrderRecord]) -> Result<(), ExportError> {
    if orders.iter().all(|order| order.items.is_empty()) {
        return Err(ExportError::NothingToExport);
    }
    Ok(())
}

#[cfg(test)]
#[path = "csv_test.rs"]
mod tests;

use chrono::{DateTime, Utc};

/// File name for an order export taken at `now`, e.g.
/// `amazon-orders-2025-01-14T09-05-33.csv`.
///
/// Uses the UTC instant with `:` replaced by `-` and no fractional seconds
/// or zone suffix, so the name is safe on every common filesystem.
#[must_use]
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("amazon-orders-{}.csv", now.format("%Y-%m-%dT%H-%M-%S"))
}

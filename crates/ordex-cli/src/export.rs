//! `export` and `upload` command handlers.

use std::path::{Path, PathBuf};

use chrono::Utc;
use ordex_core::{AppConfig, CsvSchema, OrderRecord};
use ordex_export::{
    ensure_exportable, export_to_drive, generate_csv_export, write_csv, DriveClient,
    EnvTokenProvider, ExportError,
};

pub const EXPORT_SUCCESS: &str = "Export was successful";

/// Writes the loaded orders as CSV into `out_dir` and returns the file path.
///
/// # Errors
///
/// Returns [`ExportError::NothingToExport`] when there are no item rows, or
/// [`ExportError::Io`] when the file cannot be written.
pub(crate) fn export_to_dir(
    orders: &[OrderRecord],
    schema: CsvSchema,
    out_dir: &Path,
) -> Result<PathBuf, ExportError> {
    ensure_exportable(orders)?;
    let export = generate_csv_export(orders, schema, Utc::now());
    write_csv(out_dir, &export)
}

/// Uploads the loaded orders as CSV to Google Drive and returns the file id.
///
/// # Errors
///
/// Returns [`ExportError::NothingToExport`] when there are no item rows, or
/// any token or upload error from the Drive client.
pub(crate) async fn upload_to_drive(
    orders: &[OrderRecord],
    schema: CsvSchema,
    config: &AppConfig,
) -> Result<String, ExportError> {
    ensure_exportable(orders)?;
    let export = generate_csv_export(orders, schema, Utc::now());
    let client = DriveClient::from_config(config)?;
    let provider = EnvTokenProvider::from_config(config);
    export_to_drive(&provider, &client, &export).await
}

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while building or delivering a CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The loaded order list has no rows to export.
    #[error("No orders to export. Please load your orders first.")]
    NothingToExport,

    /// Writing the export file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No access token could be obtained for the upload.
    #[error("{0}")]
    Auth(String),

    /// The upload endpoint rejected the request. Carries the server-provided
    /// message when there is one.
    #[error("{0}")]
    Upload(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

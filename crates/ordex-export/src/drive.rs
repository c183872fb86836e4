//! Google Drive upload of a finished export.
//!
//! Token acquisition is kept behind [`TokenProvider`] so the upload itself
//! only ever sees a bearer token. Uploads are attempted once; failures are
//! reported to the caller without retrying.

use std::future::Future;
use std::time::Duration;

use ordex_core::AppConfig;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::csv::CsvExport;
use crate::error::ExportError;

/// OAuth scope limited to files created by this application.
pub const DRIVE_FILE_SCOPE: &str = "https://www.googleapis.com/auth/drive.file";

const MISSING_TOKEN: &str = "Failed to get authentication token";
const UPLOAD_FAILED: &str = "Failed to upload to Google Drive";

/// Source of OAuth bearer tokens for the Drive API.
pub trait TokenProvider {
    /// Returns an access token granting `scope`.
    fn access_token(&self, scope: &str)
        -> impl Future<Output = Result<String, ExportError>> + Send;
}

/// Token provider backed by a token issued out of band, typically read from
/// `ORDEX_DRIVE_ACCESS_TOKEN`.
#[derive(Clone, Default)]
pub struct EnvTokenProvider {
    token: Option<String>,
}

impl std::fmt::Debug for EnvTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvTokenProvider")
            .field("token", &self.token.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

impl EnvTokenProvider {
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.drive_access_token.clone())
    }
}

impl TokenProvider for EnvTokenProvider {
    fn access_token(
        &self,
        scope: &str,
    ) -> impl Future<Output = Result<String, ExportError>> + Send {
        let token = self.token.clone();
        tracing::debug!(scope, has_token = token.is_some(), "resolving drive token");
        async move { token.ok_or_else(|| ExportError::Auth(MISSING_TOKEN.to_string())) }
    }
}

#[derive(Deserialize)]
struct CreatedFile {
    id: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Client for the Drive multipart upload endpoint.
///
/// Use [`DriveClient::from_config`] for production or [`DriveClient::with_upload_url`]
/// to point at a mock server in tests.
pub struct DriveClient {
    client: Client,
    upload_url: String,
}

impl DriveClient {
    /// Creates a client using the upload URL and timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, ExportError> {
        Self::with_upload_url(config.http_timeout_secs, &config.drive_upload_url)
    }

    /// Creates a client posting to a custom upload URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_upload_url(timeout_secs: u64, upload_url: &str) -> Result<Self, ExportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("ordex/0.1 (order-export)")
            .build()?;
        Ok(Self {
            client,
            upload_url: upload_url.to_owned(),
        })
    }

    /// Uploads `csv` as a new Drive file named `filename` and returns the
    /// created file's id.
    ///
    /// # Errors
    ///
    /// - [`ExportError::Upload`] when the endpoint answers with a non-success
    ///   status; carries the API's `error.message` when present.
    /// - [`ExportError::Http`] on network failure.
    /// - [`ExportError::Deserialize`] if a success body has no file id.
    pub async fn upload_csv(
        &self,
        csv: &str,
        filename: &str,
        access_token: &str,
    ) -> Result<String, ExportError> {
        let metadata = serde_json::json!({ "name": filename, "mimeType": "text/csv" }).to_string();

        let form = Form::new()
            .part("metadata", Part::text(metadata).mime_str("application/json")?)
            .part(
                "file",
                Part::text(csv.to_owned())
                    .file_name(filename.to_owned())
                    .mime_str("text/csv")?,
            );

        let response = self
            .client
            .post(&self.upload_url)
            .bearer_auth(access_token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = upload_error_message(&body);
            tracing::warn!(%status, %message, "drive upload rejected");
            return Err(ExportError::Upload(message));
        }

        let created: CreatedFile =
            serde_json::from_str(&body).map_err(|e| ExportError::Deserialize {
                context: "drive upload response".to_string(),
                source: e,
            })?;
        tracing::info!(file_id = %created.id, %filename, "uploaded csv to drive");
        Ok(created.id)
    }
}

/// The API's `error.message`, or a generic message when the body has none.
fn upload_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| UPLOAD_FAILED.to_string())
}

/// Acquires a token from `provider`, then uploads `export` through `client`.
///
/// Returns the created file id.
///
/// # Errors
///
/// Returns [`ExportError::Auth`] when no token is available, otherwise any
/// error from [`DriveClient::upload_csv`].
pub async fn export_to_drive<P: TokenProvider>(
    provider: &P,
    client: &DriveClient,
    export: &CsvExport,
) -> Result<String, ExportError> {
    let token = provider.access_token(DRIVE_FILE_SCOPE).await?;
    client
        .upload_csv(&export.csv_content, &export.filename, &token)
        .await
}

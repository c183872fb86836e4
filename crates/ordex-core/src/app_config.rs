use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Column layout of the CSV export.
///
/// `Detailed` is the canonical (v2) layout. `Summary` is the older v1 layout
/// that carries a `Status` column and omits price and image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CsvSchema {
    #[default]
    Detailed,
    Summary,
}

impl CsvSchema {
    #[must_use]
    pub fn version(self) -> u8 {
        match self {
            CsvSchema::Detailed => 2,
            CsvSchema::Summary => 1,
        }
    }
}

impl std::fmt::Display for CsvSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvSchema::Detailed => write!(f, "detailed"),
            CsvSchema::Summary => write!(f, "summary"),
        }
    }
}

impl std::str::FromStr for CsvSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" | "v2" => Ok(CsvSchema::Detailed),
            "summary" | "v1" => Ok(CsvSchema::Summary),
            other => Err(format!(
                "unknown CSV schema \"{other}\" (expected detailed or summary)"
            )),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Origin that root-relative product links are resolved against.
    pub site_origin: String,
    pub export_dir: PathBuf,
    pub csv_schema: CsvSchema,
    pub drive_upload_url: String,
    pub drive_access_token: Option<String>,
    pub http_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("site_origin", &self.site_origin)
            .field("export_dir", &self.export_dir)
            .field("csv_schema", &self.csv_schema)
            .field("drive_upload_url", &self.drive_upload_url)
            .field(
                "drive_access_token",
                &self.drive_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("http_timeout_secs", &self.http_timeout_secs)
            .finish()
    }
}

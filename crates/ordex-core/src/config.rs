use crate::app_config::{AppConfig, CsvSchema, Environment};
use crate::ConfigError;

pub const DEFAULT_SITE_ORIGIN: &str = "https://www.amazon.com";
pub const DEFAULT_DRIVE_UPLOAD_URL: &str =
    "https://www.googleapis.com/upload/drive/v3/files?uploadType=multipart";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every setting has a default, so an empty environment yields a usable
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("ORDEX_ENV", "development"))?;
    let bind_addr = parse_addr("ORDEX_BIND_ADDR", "127.0.0.1:3017")?;
    let log_level = or_default("ORDEX_LOG_LEVEL", "info");

    let site_origin = or_default("ORDEX_SITE_ORIGIN", DEFAULT_SITE_ORIGIN);
    if !(site_origin.starts_with("http://") || site_origin.starts_with("https://")) {
        return Err(invalid(
            "ORDEX_SITE_ORIGIN",
            format!("\"{site_origin}\" must start with http:// or https://"),
        ));
    }
    let site_origin = site_origin.trim_end_matches('/').to_string();

    let export_dir = PathBuf::from(or_default("ORDEX_EXPORT_DIR", "./exports"));
    let csv_schema = or_default("ORDEX_CSV_SCHEMA", "detailed")
        .parse::<CsvSchema>()
        .map_err(|reason| invalid("ORDEX_CSV_SCHEMA", reason))?;
    let drive_upload_url = or_default("ORDEX_DRIVE_UPLOAD_URL", DEFAULT_DRIVE_UPLOAD_URL);
    let drive_access_token = lookup("ORDEX_DRIVE_ACCESS_TOKEN")
        .ok()
        .filter(|t| !t.trim().is_empty());
    let http_timeout_secs = parse_u64("ORDEX_HTTP_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        site_origin,
        export_dir,
        csv_schema,
        drive_upload_url,
        drive_access_token,
        http_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ORDEX_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use ordex_core::config::DEFAULT_SITE_ORIGIN;
use ordex_core::AppConfig;

use crate::error::ScrapeError;

/// Settings that affect how extracted values are normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Origin that root-relative links are resolved against, without a
    /// trailing slash (e.g. `"https://www.amazon.com"`).
    pub site_origin: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
        }
    }
}

impl ScrapeOptions {
    /// Builds options for a custom site origin.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::InvalidSiteOrigin`] when `origin` is not an
    /// `http(s)://` URL.
    pub fn with_site_origin(origin: &str) -> Result<Self, ScrapeError> {
        let trimmed = origin.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ScrapeError::InvalidSiteOrigin {
                origin: origin.to_owned(),
                reason: "expected an http:// or https:// origin".into(),
            });
        }
        Ok(Self {
            site_origin: trimmed.to_owned(),
        })
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            site_origin: config.site_origin.clone(),
        }
    }
}

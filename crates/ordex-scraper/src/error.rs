use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid site origin \"{origin}\": {reason}")]
    InvalidSiteOrigin { origin: String, reason: String },

    #[error("{message}")]
    ExtractionPanicked { message: String },
}

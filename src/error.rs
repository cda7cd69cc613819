use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrabError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Request timeout for URL: {0}")]
    RequestTimeout(String),

    #[error("HTTP error {status} for URL: {url}")]
    HttpError { status: u16, url: String },

    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),

    #[error("Failed to parse URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Download link not found")]
    DownloadLinkNotFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Chat delivery failed: {0}")]
    Chat(String),
}

impl GrabError {
    /// True when the media API answered but had nothing to download.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GrabError::DownloadLinkNotFound)
    }
}

pub type Result<T> = std::result::Result<T, GrabError>;

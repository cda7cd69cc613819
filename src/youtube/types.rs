use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "YouTube Video";
pub const DEFAULT_QUALITY: &str = "Unknown";

/// Remote document that announces the media API base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteApiConfig {
    #[serde(default)]
    pub api: Option<String>,
}

/// Raw `ytDl3` answer; every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YtDlResponse {
    #[serde(rename = "downloadLink", default)]
    pub download_link: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
}

/// Media resolved for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetadata {
    pub download_link: String,
    pub title: String,
    pub quality: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl YtDlResponse {
    /// Apply defaults; `None` when there is no usable download link.
    pub fn into_metadata(self) -> Option<MediaMetadata> {
        let download_link = non_blank(self.download_link)?;
        Some(MediaMetadata {
            download_link,
            title: non_blank(self.title).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            quality: non_blank(self.quality).unwrap_or_else(|| DEFAULT_QUALITY.to_string()),
        })
    }
}

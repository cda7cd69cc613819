use tracing::debug;

use crate::download::download_json;
use crate::error::{GrabError, Result};
use crate::youtube::types::{MediaMetadata, YtDlResponse};
use crate::youtube::utils::is_valid_video_id;

/// Build the `ytDl3` request URL for a video
pub fn build_resolve_url(api_base: &str, video_id: &str) -> String {
    format!(
        "{}/ytDl3?link={}&format=mp4",
        api_base.trim_end_matches('/'),
        urlencoding::encode(video_id)
    )
}

/// Ask the media API for a direct mp4 link.
///
/// A well-formed answer without a download link is reported as
/// [`GrabError::DownloadLinkNotFound`], distinct from transport or parse failures.
pub async fn resolve_media(
    client: &reqwest::Client,
    api_base: &str,
    video_id: &str,
) -> Result<MediaMetadata> {
    if !is_valid_video_id(video_id) {
        return Err(GrabError::InvalidUrl(format!("Not a video ID: {}", video_id)));
    }
    let url = build_resolve_url(api_base, video_id);
    debug!(%url, video_id, "resolving media");
    let raw: YtDlResponse = download_json(client, &url).await?;
    raw.into_metadata().ok_or(GrabError::DownloadLinkNotFound)
}

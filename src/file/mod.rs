use futures_util::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::download::get_response;
use crate::error::{GrabError, Result};
use crate::utils::request_token;
use crate::youtube::types::DEFAULT_TITLE;

pub const VIDEO_EXTENSION: &str = ".mp4";
/// Byte limit for a single path component on common filesystems.
const MAX_FILE_NAME_BYTES: usize = 255;

/// Longest prefix of `s` that fits in `max` bytes without splitting a char
fn truncate_to_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Turn an untrusted title into a safe `<title>.mp4` file name of at most 255 bytes
pub fn video_file_name(title: &str) -> String {
    let sanitized = sanitize_filename::sanitize(title.trim());
    let stem = truncate_to_bytes(sanitized.trim(), MAX_FILE_NAME_BYTES - VIDEO_EXTENSION.len()).trim_end();
    if stem.is_empty() {
        format!("{}{}", DEFAULT_TITLE, VIDEO_EXTENSION)
    } else {
        format!("{}{}", stem, VIDEO_EXTENSION)
    }
}

/// Root of the transient download area
#[derive(Debug, Clone)]
pub struct ScratchDir {
    root: PathBuf,
}

impl ScratchDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Download `url` into `<root>/<token>/<file_name>`, creating directories as needed.
    ///
    /// The body is streamed to disk. On failure nothing is left behind.
    pub async fn fetch(
        &self,
        client: &reqwest::Client,
        url: &str,
        file_name: &str,
        message_id: &str,
    ) -> Result<ScratchFile> {
        let dir = self.root.join(request_token(message_id));
        tokio::fs::create_dir_all(&dir).await?;
        let mut guard = ScratchFile {
            path: dir.join(file_name),
            dir: Some(dir),
            bytes: 0,
        };

        // on error the guard drops and takes the partial file with it
        guard.bytes = write_body(client, url, &guard.path).await?;
        debug!(path = %guard.path.display(), bytes = guard.bytes, "download finished");
        Ok(guard)
    }
}

async fn write_body(client: &reqwest::Client, url: &str, path: &Path) -> Result<u64> {
    let response = get_response(client, url).await?;
    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = response.bytes_stream();
    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}

/// A downloaded file owned by one request.
///
/// Call [`ScratchFile::remove`] once the file has been delivered. `Drop` is only a
/// best-effort safety net for error paths and uses blocking `std::fs` calls.
#[derive(Debug)]
pub struct ScratchFile {
    path: PathBuf,
    dir: Option<PathBuf>,
    bytes: u64,
}

impl ScratchFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> u64 {
        self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }

    /// Delete the file now and report the outcome.
    pub async fn remove(mut self) -> Result<()> {
        let result = tokio::fs::remove_file(&self.path).await;
        if let Some(dir) = self.dir.take() {
            let _ = tokio::fs::remove_dir(&dir).await;
        }
        // mark as gone so Drop does nothing
        self.path = PathBuf::new();
        result.map_err(GrabError::from)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.path.as_os_str().is_empty() {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            warn!(path = %self.path.display(), error = %e, "failed to remove scratch file");
        }
        if let Some(dir) = self.dir.take() {
            let _ = std::fs::remove_dir(dir);
        }
    }
}

pub mod api;
pub mod types;
pub mod utils;

// Re-export commonly used types and functions
pub use api::{build_resolve_url, resolve_media};
pub use types::{MediaMetadata, RemoteApiConfig, YtDlResponse};
pub use utils::{build_watch_url, find_youtube_url, is_valid_video_id, parse_id};

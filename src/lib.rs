pub mod bot;
pub mod config;
pub mod core;
mod download;
pub mod endpoint;
pub mod error;
pub mod file;
mod utils;
pub mod youtube;

pub use bot::{CommandInfo, DlCommand, Handled, Trigger};
pub use config::{RefreshPolicy, Settings};
pub use crate::core::{ChatApi, IncomingMessage, Reaction};
pub use endpoint::{EndpointResolver, EndpointSource};
pub use error::{GrabError, Result};
pub use file::{ScratchDir, ScratchFile};
pub use youtube::{MediaMetadata, find_youtube_url, parse_id};

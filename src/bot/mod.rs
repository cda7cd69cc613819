use std::sync::Arc;

use crate::config::Settings;
use crate::download::build_http_client;
use crate::endpoint::EndpointResolver;
use crate::error::Result;
use crate::file::ScratchDir;

mod command;
pub mod info;
mod observer;
mod pipeline;
pub mod reply;

pub use info::CommandInfo;
pub use reply::Trigger;

/// How a single trigger was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// Nothing to do; no reply was sent.
    Ignored,
    /// Argument missing or not a YouTube link.
    Rejected,
    Delivered { title: String, quality: String },
    NotFound,
    Failed,
}

/// The `dl` command: explicit download on request plus passive link scanning.
#[derive(Debug)]
pub struct DlCommand {
    info: CommandInfo,
    client: reqwest::Client,
    endpoint: Arc<EndpointResolver>,
    scratch: ScratchDir,
}

impl DlCommand {
    pub fn new(endpoint: Arc<EndpointResolver>, scratch: ScratchDir, info: CommandInfo) -> Result<Self> {
        Ok(Self {
            info,
            client: build_http_client(None)?,
            endpoint,
            scratch,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(
            Arc::new(EndpointResolver::from_settings(settings)),
            ScratchDir::new(&settings.scratch_dir),
            CommandInfo::new(&settings.command_name),
        )
    }

    pub fn info(&self) -> &CommandInfo {
        &self.info
    }

    pub fn endpoint(&self) -> &Arc<EndpointResolver> {
        &self.endpoint
    }
}

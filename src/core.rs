use serde::{Deserialize, Serialize};
use std::path::Path;
use strum_macros::{Display, EnumIter};

use crate::error::Result;

/// A chat message as delivered by the host framework
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncomingMessage {
    pub thread_id: String,
    pub message_id: String,
    pub sender_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl IncomingMessage {
    pub fn new(
        thread_id: impl Into<String>,
        message_id: impl Into<String>,
        sender_id: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            message_id: message_id.into(),
            sender_id: sender_id.into(),
            body: Some(body.into()),
        }
    }
}

/// Progress marker set on the triggering message
#[derive(EnumIter, Display, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Reaction {
    #[strum(to_string = "⏳")]
    Pending,
    #[strum(to_string = "✅")]
    Done,
    #[strum(to_string = "❌")]
    Failed,
}

/// Outbound primitives the host chat framework provides
#[async_trait::async_trait]
pub trait ChatApi: Send + Sync {
    /// Identifier the bot itself posts under
    fn current_user_id(&self) -> &str;

    async fn send_text(&self, thread_id: &str, text: &str, reply_to: Option<&str>) -> Result<()>;

    /// Send `caption` with the file at `attachment`. The file must stay
    /// readable until this returns.
    async fn send_attachment(
        &self,
        thread_id: &str,
        caption: &str,
        attachment: &Path,
        reply_to: Option<&str>,
    ) -> Result<()>;

    async fn set_reaction(&self, reaction: Reaction, message_id: &str) -> Result<()>;
}

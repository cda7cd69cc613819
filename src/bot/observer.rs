use tracing::{debug, instrument};

use super::{DlCommand, Handled, Trigger};
use crate::core::{ChatApi, IncomingMessage};
use crate::youtube::{find_youtube_url, parse_id};

impl DlCommand {
    /// Passive scan of every chat message. Stays silent unless a YouTube
    /// link is found, and ignores the bot's own messages.
    #[instrument(skip_all, fields(thread_id = %msg.thread_id, message_id = %msg.message_id))]
    pub async fn on_chat(&self, api: &dyn ChatApi, msg: &IncomingMessage) -> Handled {
        let Some(body) = msg.body.as_deref().filter(|b| !b.is_empty()) else {
            return Handled::Ignored;
        };
        if msg.sender_id == api.current_user_id() {
            return Handled::Ignored;
        }
        let Some(video_id) = find_youtube_url(body).and_then(parse_id) else {
            return Handled::Ignored;
        };

        debug!(%video_id, "found YouTube link in chat");
        self.run(api, msg, &video_id, Trigger::Passive).await
    }
}

use tracing::{debug, instrument};

use super::pipeline::reply;
use super::reply::{INVALID_URL, MISSING_URL};
use super::{DlCommand, Handled, Trigger};
use crate::core::{ChatApi, IncomingMessage};
use crate::youtube::parse_id;

impl DlCommand {
    /// Explicit invocation, e.g. `/dl <url>`. Only the first argument is used.
    #[instrument(skip_all, fields(thread_id = %msg.thread_id, message_id = %msg.message_id))]
    pub async fn on_start(&self, api: &dyn ChatApi, msg: &IncomingMessage, args: &[&str]) -> Handled {
        let Some(url) = args.first() else {
            reply(api, msg, MISSING_URL).await;
            return Handled::Rejected;
        };

        let Some(video_id) = parse_id(url) else {
            debug!(url, "argument is not a YouTube link");
            reply(api, msg, INVALID_URL).await;
            return Handled::Rejected;
        };

        self.run(api, msg, &video_id, Trigger::Command).await
    }
}

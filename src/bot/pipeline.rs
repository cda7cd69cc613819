use tracing::{error, info, warn};

use super::{DlCommand, Handled, Trigger};
use crate::core::{ChatApi, IncomingMessage, Reaction};
use crate::error::{GrabError, Result};
use crate::file::video_file_name;
use crate::youtube::{build_watch_url, resolve_media};

impl DlCommand {
    /// Run the download for an already validated video ID and report the
    /// result in chat. Never returns an error: failures become replies.
    pub(super) async fn run(
        &self,
        api: &dyn ChatApi,
        msg: &IncomingMessage,
        video_id: &str,
        trigger: Trigger,
    ) -> Handled {
        match self.deliver(api, msg, video_id, trigger).await {
            Ok(handled) => handled,
            Err(e) => {
                error!(video = %build_watch_url(video_id), error = %e, "download pipeline failed");
                react(api, Reaction::Failed, &msg.message_id).await;
                reply(api, msg, &trigger.failure(&e)).await;
                Handled::Failed
            }
        }
    }

    async fn deliver(
        &self,
        api: &dyn ChatApi,
        msg: &IncomingMessage,
        video_id: &str,
        trigger: Trigger,
    ) -> Result<Handled> {
        react(api, Reaction::Pending, &msg.message_id).await;

        let api_base = self.endpoint.resolve().await;
        let media = match resolve_media(&self.client, &api_base, video_id).await {
            Ok(media) => media,
            Err(GrabError::DownloadLinkNotFound) => {
                info!(video_id, "no download link for video");
                react(api, Reaction::Failed, &msg.message_id).await;
                reply(api, msg, trigger.not_found()).await;
                return Ok(Handled::NotFound);
            }
            Err(e) => return Err(e),
        };

        let file = self
            .scratch
            .fetch(
                &self.client,
                &media.download_link,
                &video_file_name(&media.title),
                &msg.message_id,
            )
            .await?;
        info!(video_id, path = %file.path().display(), bytes = file.len(), "video downloaded");

        react(api, Reaction::Done, &msg.message_id).await;
        api.send_attachment(
            &msg.thread_id,
            &trigger.caption(&media.title, &media.quality),
            file.path(),
            Some(&msg.message_id),
        )
        .await?;

        if let Err(e) = file.remove().await {
            warn!(error = %e, "failed to remove delivered file");
        }
        Ok(Handled::Delivered {
            title: media.title,
            quality: media.quality,
        })
    }
}

/// Set a reaction; a failure here is logged and otherwise ignored.
pub(super) async fn react(api: &dyn ChatApi, reaction: Reaction, message_id: &str) {
    if let Err(e) = api.set_reaction(reaction, message_id).await {
        warn!(%reaction, message_id, error = %e, "failed to set reaction");
    }
}

/// Send a text reply to the triggering message.
pub(super) async fn reply(api: &dyn ChatApi, msg: &IncomingMessage, text: &str) {
    if let Err(e) = api
        .send_text(&msg.thread_id, text, Some(&msg.message_id))
        .await
    {
        error!(thread_id = %msg.thread_id, error = %e, "failed to send reply");
    }
}

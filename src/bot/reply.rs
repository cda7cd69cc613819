use crate::error::GrabError;

pub const MISSING_URL: &str = "❌ Please provide a YouTube link!";
pub const INVALID_URL: &str = "❌ Invalid YouTube URL!";

/// Which entry point started the request; decides the wording of replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Command,
    Passive,
}

impl Trigger {
    pub fn not_found(&self) -> &'static str {
        match self {
            Trigger::Command => "⚠️ Download link not found!",
            Trigger::Passive => "⚠️ Failed to fetch video.",
        }
    }

    pub fn caption(&self, title: &str, quality: &str) -> String {
        let done = match self {
            Trigger::Command => "✅ Download Complete!",
            Trigger::Passive => "✅ Auto Download Complete!",
        };
        format!("🎬 {}\n📺 Quality: {}\n{}", title, quality, done)
    }

    pub fn failure(&self, err: &GrabError) -> String {
        match self {
            Trigger::Command => format!("❌ Download failed: {}", err),
            Trigger::Passive => format!("❌ Error: {}", err),
        }
    }
}

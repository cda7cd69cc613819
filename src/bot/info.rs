use serde::{Deserialize, Serialize};

/// Registration metadata the host shows in its command list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: String,
    pub version: String,
    pub author: String,
    /// Minimum permission level; 0 means everyone.
    pub role: u8,
    pub category: String,
    pub short_description: String,
    pub long_description: String,
    /// Usage line; `{pn}` stands for prefix + name.
    pub guide: String,
}

impl CommandInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            author: "ytgrab".to_string(),
            role: 0,
            category: "media".to_string(),
            short_description: "Auto or manual YouTube video downloader".to_string(),
            long_description: "Downloads a YouTube video and sends it back, either on command \
                               or automatically when a link shows up in chat."
                .to_string(),
            guide: "{pn} [YouTube URL] - download a YouTube video".to_string(),
        }
    }

    pub fn usage(&self, prefix: &str) -> String {
        self.guide.replace("{pn}", &format!("{}{}", prefix, self.name))
    }

    /// Split `body` into arguments if it invokes this command, e.g. `/dl <url>`.
    pub fn match_invocation<'a>(&self, prefix: &str, body: &'a str) -> Option<Vec<&'a str>> {
        let rest = body.trim_start().strip_prefix(prefix)?.strip_prefix(&self.name)?;
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some(rest.split_whitespace().collect())
    }
}

impl Default for CommandInfo {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_COMMAND_NAME)
    }
}

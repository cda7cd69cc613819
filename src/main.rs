use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use ytgrab::{ChatApi, DlCommand, GrabError, IncomingMessage, Reaction, RefreshPolicy, Settings};

const THREAD_ID: &str = "console";
const USER_ID: &str = "user";

#[derive(Parser)]
#[command(
    name = "ytgrab",
    version,
    about = "Download YouTube videos from chat",
    long_about = "Runs the download bot against a console chat.\n\
    Every line typed on stdin is a chat message.\n\n\
    Examples:\n\
      /dl https://youtu.be/dQw4w9WgXcQ                   # Explicit command\n\
      look at this https://www.youtube.com/shorts/...   # Picked up automatically"
)]
struct Args {
    /// JSON settings file; flags override its values
    #[arg(short = 'c', long = "config", env = "YTGRAB_CONFIG")]
    config: Option<PathBuf>,

    /// Remote JSON document announcing the media API base
    #[arg(long = "config-url", env = "YTGRAB_CONFIG_URL")]
    config_url: Option<String>,

    /// API base used when the remote document is unusable
    #[arg(long = "fallback-api", env = "YTGRAB_FALLBACK_API")]
    fallback_api: Option<String>,

    /// Use this API base and skip the remote document entirely
    #[arg(long = "api", env = "YTGRAB_API")]
    api_base: Option<String>,

    /// Re-resolve the API base after this many seconds (default: never)
    #[arg(long = "refresh-secs", env = "YTGRAB_REFRESH_SECS")]
    refresh_secs: Option<u64>,

    /// Timeout in seconds for the remote config fetch
    #[arg(long = "config-timeout", env = "YTGRAB_CONFIG_TIMEOUT")]
    config_timeout_secs: Option<u64>,

    /// Scratch directory for in-flight downloads
    #[arg(short = 's', long = "scratch-dir", env = "YTGRAB_SCRATCH_DIR")]
    scratch_dir: Option<PathBuf>,

    /// Where delivered videos are saved
    #[arg(short = 'd', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Command prefix
    #[arg(short = 'p', long = "prefix", env = "YTGRAB_PREFIX")]
    prefix: Option<String>,

    /// Command name
    #[arg(short = 'n', long = "name", env = "YTGRAB_COMMAND")]
    command_name: Option<String>,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("reading settings from {}", path.display()))?,
            None => Settings::default(),
        };
        if let Some(v) = &self.config_url {
            settings.config_url = v.clone();
        }
        if let Some(v) = &self.fallback_api {
            settings.fallback_api = v.clone();
        }
        if let Some(v) = &self.api_base {
            settings.api_base = Some(v.clone());
        }
        if let Some(secs) = self.refresh_secs {
            settings.refresh = RefreshPolicy::After { secs };
        }
        if let Some(secs) = self.config_timeout_secs {
            settings.config_timeout_secs = secs;
        }
        if let Some(v) = &self.scratch_dir {
            settings.scratch_dir = v.clone();
        }
        if let Some(v) = &self.prefix {
            settings.prefix = v.clone();
        }
        if let Some(v) = &self.command_name {
            settings.command_name = v.clone();
        }
        Ok(settings)
    }
}

/// Chat host backed by the terminal: replies go to stdout and
/// attachments are copied into `output_dir`.
struct ConsoleChat {
    bot_id: String,
    output_dir: PathBuf,
}

#[async_trait::async_trait]
impl ChatApi for ConsoleChat {
    fn current_user_id(&self) -> &str {
        &self.bot_id
    }

    async fn send_text(&self, thread_id: &str, text: &str, reply_to: Option<&str>) -> ytgrab::Result<()> {
        println!("[{}] bot ({}): {}", thread_id, reply_to.unwrap_or("-"), text);
        Ok(())
    }

    async fn send_attachment(
        &self,
        thread_id: &str,
        caption: &str,
        attachment: &Path,
        reply_to: Option<&str>,
    ) -> ytgrab::Result<()> {
        let name = attachment
            .file_name()
            .ok_or_else(|| GrabError::Chat(format!("not a file: {}", attachment.display())))?;
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let target = self.output_dir.join(name);
        tokio::fs::copy(attachment, &target).await?;
        println!("[{}] bot ({}): {}", thread_id, reply_to.unwrap_or("-"), caption);
        println!("✓ Saved to: {}", target.display());
        Ok(())
    }

    async fn set_reaction(&self, reaction: Reaction, message_id: &str) -> ytgrab::Result<()> {
        println!("[{}] {} on #{}", THREAD_ID, reaction, message_id);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = args.settings()?;
    let plugin = Arc::new(DlCommand::from_settings(&settings)?);
    let chat = Arc::new(ConsoleChat {
        bot_id: "ytgrab".to_string(),
        output_dir: args.output_dir.clone(),
    });

    println!("Usage: {}", plugin.info().usage(&settings.prefix));
    println!("Type messages below; Ctrl-D to quit.");

    let next_id = AtomicU64::new(1);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tasks = tokio::task::JoinSet::new();
    while let Some(line) = lines.next_line().await? {
        let message_id = next_id.fetch_add(1, Ordering::Relaxed).to_string();
        let msg = IncomingMessage::new(THREAD_ID, message_id, USER_ID, line);
        let plugin = Arc::clone(&plugin);
        let chat = Arc::clone(&chat);
        let prefix = settings.prefix.clone();
        tasks.spawn(async move {
            let body = msg.body.clone().unwrap_or_default();
            let outcome = match plugin.info().match_invocation(&prefix, &body) {
                Some(args) => plugin.on_start(chat.as_ref(), &msg, &args).await,
                None => plugin.on_chat(chat.as_ref(), &msg).await,
            };
            tracing::debug!(message_id = %msg.message_id, ?outcome, "message handled");
        });
    }

    while let Some(res) = tasks.join_next().await {
        if let Err(e) = res {
            tracing::error!(error = %e, "handler task panicked");
        }
    }
    Ok(())
}

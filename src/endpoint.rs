use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::{RefreshPolicy, Settings};
use crate::download::{build_http_client, download_json};
use crate::error::{GrabError, Result};
use crate::youtube::types::RemoteApiConfig;

/// Where the cached API base came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointSource {
    Remote,
    Fallback,
    Fixed,
}

#[derive(Debug, Clone)]
struct CachedEndpoint {
    base: String,
    source: EndpointSource,
    resolved_at: Instant,
}

/// Resolves the media API base from a remote JSON document, failing open to a
/// hardcoded default. The result is cached according to the refresh policy.
#[derive(Debug)]
pub struct EndpointResolver {
    client: Option<reqwest::Client>,
    config_url: String,
    fallback: String,
    refresh: RefreshPolicy,
    cache: RwLock<Option<CachedEndpoint>>,
}

impl EndpointResolver {
    pub fn new(
        config_url: impl Into<String>,
        fallback: impl Into<String>,
        timeout: Duration,
        refresh: RefreshPolicy,
    ) -> Self {
        let client = match build_http_client(Some(timeout)) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!(error = %e, "cannot build config client, remote config disabled");
                None
            }
        };
        Self {
            client,
            config_url: config_url.into(),
            fallback: fallback.into(),
            refresh,
            cache: RwLock::new(None),
        }
    }

    /// A resolver that never touches the network.
    pub fn fixed(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            client: None,
            config_url: String::new(),
            fallback: base.clone(),
            refresh: RefreshPolicy::Never,
            cache: RwLock::new(Some(CachedEndpoint {
                base,
                source: EndpointSource::Fixed,
                resolved_at: Instant::now(),
            })),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        match &settings.api_base {
            Some(base) => Self::fixed(base.clone()),
            None => Self::new(
                settings.config_url.clone(),
                settings.fallback_api.clone(),
                settings.config_timeout(),
                settings.refresh,
            ),
        }
    }

    /// Return the API base. Never fails: any problem with the remote document
    /// yields the fallback.
    pub async fn resolve(&self) -> String {
        if let Some(base) = self.fresh().await {
            return base;
        }

        let mut slot = self.cache.write().await;
        // Another caller may have filled the slot while we waited.
        if let Some(cached) = slot.as_ref()
            && !self.refresh.is_stale(cached.resolved_at.elapsed())
        {
            return cached.base.clone();
        }

        let (base, source) = match &self.client {
            None => {
                warn!(fallback = %self.fallback, "no config client, using fallback API");
                (self.fallback.clone(), EndpointSource::Fallback)
            }
            Some(client) => match self.fetch_remote(client).await {
                Ok(base) => {
                    info!(%base, "resolved media API base from remote config");
                    (base, EndpointSource::Remote)
                }
                Err(e) => {
                    warn!(error = %e, fallback = %self.fallback, "remote config fetch failed, using fallback API");
                    (self.fallback.clone(), EndpointSource::Fallback)
                }
            },
        };
        *slot = Some(CachedEndpoint {
            base: base.clone(),
            source,
            resolved_at: Instant::now(),
        });
        base
    }

    /// The cached value and its origin, if any.
    pub async fn cached(&self) -> Option<(String, EndpointSource)> {
        self.cache
            .read()
            .await
            .as_ref()
            .map(|c| (c.base.clone(), c.source))
    }

    async fn fresh(&self) -> Option<String> {
        let slot = self.cache.read().await;
        slot.as_ref()
            .filter(|c| !self.refresh.is_stale(c.resolved_at.elapsed()))
            .map(|c| c.base.clone())
    }

    async fn fetch_remote(&self, client: &reqwest::Client) -> Result<String> {
        debug!(url = %self.config_url, "fetching remote API config");
        let doc: RemoteApiConfig = download_json(client, &self.config_url).await?;
        let api = doc
            .api
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| GrabError::InvalidUrl("remote config has no api field".to_string()))?;
        url::Url::parse(&api)?;
        Ok(api)
    }
}

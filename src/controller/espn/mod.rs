pub mod cache;
pub mod client;

pub use cache::*;
pub use client::*;

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use crate::error::AppError;
use crate::model::{RefreshSource, ScoreboardFetch, fallback_scoreboard};

/// Fetch adapter: cached upstream scoreboard, or the bundled fallback when upstream fails.
pub struct ScoreboardService {
    api: Arc<dyn EspnApiClient>,
    cache: ScoreboardCache,
    upstream_timeout: Duration,
}

impl ScoreboardService {
    #[must_use]
    pub fn new(api: Arc<dyn EspnApiClient>, cache: ScoreboardCache) -> Self {
        Self {
            api,
            cache,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
        }
    }

    /// Bound on one upstream call. The cache lock is held while it runs, so this also bounds how
    /// long queued callers wait before they get an answer.
    #[must_use]
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    async fn fetch_upstream(&self) -> Result<serde_json::Value, AppError> {
        tokio::time::timeout(self.upstream_timeout, self.api.get_scoreboard_json())
            .await
            .map_err(|_| AppError::Timeout(self.upstream_timeout))?
    }

    /// Never fails: upstream errors and timeouts are logged and answered with the fallback
    /// scoreboard, which is not cached so the next call retries upstream.
    pub async fn fetch_scoreboard(&self) -> ScoreboardFetch {
        let mut entry = self.cache.entry.lock().await;
        let now = Utc::now();

        if let Some(cached) = entry.as_ref() {
            if self.cache.is_fresh(cached, now) {
                tracing::debug!("Cache hit for scoreboard cached at {}", cached.cached_time);
                return ScoreboardFetch {
                    json: Arc::clone(&cached.json),
                    source: RefreshSource::Espn,
                    fetched_at: cached.cached_time,
                    cache_hit: true,
                };
            }
        }
        tracing::debug!("Cache miss for scoreboard, fetching upstream");

        match self.fetch_upstream().await {
            Ok(json) => {
                let json = Arc::new(json);
                *entry = Some(CachedScoreboard {
                    json: Arc::clone(&json),
                    cached_time: now,
                });
                ScoreboardFetch {
                    json,
                    source: RefreshSource::Espn,
                    fetched_at: now,
                    cache_hit: false,
                }
            }
            Err(e) => {
                tracing::warn!("Error fetching from ESPN API, serving fallback scoreboard: {e}");
                ScoreboardFetch {
                    json: fallback_scoreboard(),
                    source: RefreshSource::Fallback,
                    fetched_at: now,
                    cache_hit: false,
                }
            }
        }
    }
}

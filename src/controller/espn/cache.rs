use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const DEFAULT_CACHE_DURATION: TimeDelta = TimeDelta::minutes(5);

#[derive(Clone, Debug)]
pub struct CachedScoreboard {
    pub json: Arc<Value>,
    pub cached_time: DateTime<Utc>,
}

/// Holds the last good upstream scoreboard. The mutex is held for the whole refresh, so at most
/// one upstream request is outstanding and concurrent callers wait for its result.
#[derive(Debug)]
pub struct ScoreboardCache {
    max_age: TimeDelta,
    pub(crate) entry: Mutex<Option<CachedScoreboard>>,
}

impl ScoreboardCache {
    #[must_use]
    pub fn new(max_age: TimeDelta) -> Self {
        Self {
            max_age,
            entry: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn max_age(&self) -> TimeDelta {
        self.max_age
    }

    #[must_use]
    pub fn is_fresh(&self, cached: &CachedScoreboard, now: DateTime<Utc>) -> bool {
        now - cached.cached_time < self.max_age
    }
}

impl Default for ScoreboardCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_DURATION)
    }
}

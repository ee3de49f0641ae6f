#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use rusty_golf_groups::AppError;
use rusty_golf_groups::controller::espn::{EspnApiClient, ScoreboardCache, ScoreboardService};
use rusty_golf_groups::model::{Competitor, Event, RefreshSource, ScoreboardFetch};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Upstream stand-in that always answers with the same document.
pub struct StaticEspnClient {
    json: Value,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StaticEspnClient {
    pub fn new(json: Value) -> Self {
        Self {
            json,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn slow(json: Value, delay: Duration) -> Self {
        Self {
            json,
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EspnApiClient for StaticEspnClient {
    async fn get_scoreboard_json(&self) -> Result<Value, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.json.clone())
    }
}

/// Upstream stand-in that is always down.
#[derive(Default)]
pub struct FailingEspnClient {
    calls: AtomicUsize,
}

impl FailingEspnClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EspnApiClient for FailingEspnClient {
    async fn get_scoreboard_json(&self) -> Result<Value, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Upstream(503))
    }
}

/// Upstream stand-in that accepts the request and never answers.
#[derive(Default)]
pub struct HangingEspnClient {
    calls: AtomicUsize,
}

impl HangingEspnClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EspnApiClient for HangingEspnClient {
    async fn get_scoreboard_json(&self) -> Result<Value, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}

pub fn service_with(api: Arc<dyn EspnApiClient>) -> ScoreboardService {
    ScoreboardService::new(api, ScoreboardCache::default())
}

pub fn competitor(value: Value) -> Competitor {
    serde_json::from_value(value).expect("test competitor json")
}

pub fn named(name: &str, score: &str) -> Competitor {
    competitor(json!({ "id": name, "athlete": { "displayName": name }, "score": score }))
}

pub fn event_with(competitors: Vec<Competitor>) -> Event {
    Event::new(
        "1".to_string(),
        "Test Open".to_string(),
        "2024-01-01T00:00Z".to_string(),
        competitors,
    )
}

pub fn scoreboard_json(competitors: Value) -> Value {
    json!({
        "events": [{
            "id": "401580999",
            "name": "Test Open",
            "date": "2024-01-01T00:00Z",
            "competitions": [{ "competitors": competitors }]
        }]
    })
}

pub fn fetch_of(json: Value) -> ScoreboardFetch {
    ScoreboardFetch {
        json: Arc::new(json),
        source: RefreshSource::Espn,
        fetched_at: Utc::now(),
        cache_hit: false,
    }
}

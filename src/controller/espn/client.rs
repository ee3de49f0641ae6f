use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::error::AppError;

/// Longest a scoreboard request may take before the fallback is served instead.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

pub const ESPN_SCOREBOARD_URL: &str =
    "https://site.api.espn.com/apis/site/v2/sports/golf/pga/scoreboard";

// espn is pickier with clients that do not look like a browser
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[async_trait]
pub trait EspnApiClient: Send + Sync {
    /// Fetch the current scoreboard document.
    async fn get_scoreboard_json(&self) -> Result<Value, AppError>;
}

pub struct ReqwestEspnClient {
    client: Client,
    url: String,
}

impl ReqwestEspnClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl EspnApiClient for ReqwestEspnClient {
    async fn get_scoreboard_json(&self) -> Result<Value, AppError> {
        let resp = self.client.get(&self.url).send().await?.error_for_status()?;
        let json: Value = resp.json().await?;
        Ok(json)
    }
}

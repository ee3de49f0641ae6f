use chrono::Utc;

use crate::model::{LeaderboardSnapshot, PlayerStatus, format_time_ago};

/// Second line under a player's name, e.g. `-3 | 1 | Thru: 5` or `Tee: 10:00 AM`.
#[must_use]
pub fn status_line(status: &PlayerStatus) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(2);
    if status.show_today && !status.today.is_empty() {
        parts.push(status.today.clone());
    }
    if let Some(progress) = &status.progress {
        parts.push(format!("{}: {progress}", progress.label()));
    }
    parts.join(" | ")
}

#[must_use]
pub fn last_refresh_line(snapshot: &LeaderboardSnapshot) -> String {
    let elapsed = Utc::now() - snapshot.fetched_at;
    let cached = if snapshot.cache_hit { " (cached)" } else { "" };
    format!(
        "Updated {} ago from {}{cached}",
        format_time_ago(elapsed),
        snapshot.source
    )
}

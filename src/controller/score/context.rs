use super::aggregate::build_standings;
use crate::error::AppError;
use crate::model::{Event, Group, LeaderboardSnapshot, ScoreboardFetch};

/// Turn one fetched scoreboard into the leaderboard the page renders.
///
/// # Errors
///
/// Returns `AppError::NoCompetitionData` or `AppError::Parse` when the document holds no usable
/// competition.
pub fn snapshot_from_fetch(
    fetch: &ScoreboardFetch,
    groups: &[Group],
) -> Result<LeaderboardSnapshot, AppError> {
    let event = Event::from_json(&fetch.json)?;
    Ok(LeaderboardSnapshot {
        standings: build_standings(&event, groups),
        event_id: event.id,
        event_name: event.name,
        event_date: event.date,
        source: fetch.source,
        fetched_at: fetch.fetched_at,
        cache_hit: fetch.cache_hit,
    })
}

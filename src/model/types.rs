use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::model::group::MemberRole;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshSource {
    Espn,
    Fallback,
}

impl fmt::Display for RefreshSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RefreshSource::Espn => "ESPN",
            RefreshSource::Fallback => "fallback data",
        };
        write!(f, "{s}")
    }
}

/// Raw scoreboard document as handed out by the fetch adapter.
#[derive(Clone, Debug)]
pub struct ScoreboardFetch {
    pub json: Arc<Value>,
    pub source: RefreshSource,
    pub fetched_at: DateTime<Utc>,
    pub cache_hit: bool,
}

/// Where a player's progress string came from.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Progress {
    Thru(usize),
    TeeTime(String),
    Unknown,
}

pub const NO_PROGRESS: &str = "—";

impl Progress {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Progress::Thru(_) => "Thru",
            Progress::TeeTime(_) | Progress::Unknown => "Tee",
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Thru(holes) => write!(f, "{holes}"),
            Progress::TeeTime(time) => write!(f, "{time}"),
            Progress::Unknown => write!(f, "{NO_PROGRESS}"),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PlayerStatus {
    pub short_detail: String,
    /// Non-zero round values joined with `" | "`.
    pub today: String,
    /// Round 1 carries a value, so `today` belongs on screen (even when it is empty).
    pub show_today: bool,
    /// `None` when the competitor has no rounds at all.
    pub progress: Option<Progress>,
    pub today_over_under: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct MemberLine {
    pub name: String,
    pub role: MemberRole,
    pub found: bool,
    pub score: i32,
    /// Score token as shown, or `N/A` for a roster name missing from the event.
    pub score_display: String,
    pub status: Option<PlayerStatus>,
}

#[derive(Serialize, Clone, Debug)]
pub struct GroupStanding {
    pub name: String,
    pub place: usize,
    pub place_label: String,
    pub total: i32,
    pub display_total: String,
    pub members: Vec<MemberLine>,
}

/// Everything the page shows for one fetch cycle. Built in one go and replaced whole on the
/// next refresh.
#[derive(Serialize, Clone, Debug)]
pub struct LeaderboardSnapshot {
    pub event_id: String,
    pub event_name: String,
    pub event_date: String,
    pub standings: Vec<GroupStanding>,
    pub source: RefreshSource,
    pub fetched_at: DateTime<Utc>,
    pub cache_hit: bool,
}

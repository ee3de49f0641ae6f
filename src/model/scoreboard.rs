use ahash::RandomState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::AppError;

/// Raw shape of the ESPN scoreboard payload. Only the fields the leaderboard reads are modelled;
/// everything else in the upstream document is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScoreboardResponse {
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RawEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub competitions: Vec<Competition>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Competition {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Competitor {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub athlete: Athlete,
    #[serde(default)]
    pub score: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CompetitorStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linescores: Option<Vec<RoundLine>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Athlete {
    #[serde(default)]
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CompetitorStatus {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<StatusType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thru: Option<i64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatusType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_detail: Option<String>,
}

/// One round of a competitor. `linescores` holds the hole-by-hole entries; only their count is
/// used, so they stay as untyped json.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoundLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tee_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linescores: Option<Vec<Value>>,
}

impl RoundLine {
    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.linescores.as_ref().map_or(0, Vec::len)
    }
}

impl Competitor {
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.athlete.display_name
    }

    /// Zero-based round access; `None` when the round (or the whole list) is missing.
    #[must_use]
    pub fn round(&self, idx: usize) -> Option<&RoundLine> {
        self.linescores.as_ref().and_then(|rounds| rounds.get(idx))
    }

    #[must_use]
    pub fn short_detail(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|s| s.kind.as_ref())
            .and_then(|k| k.short_detail.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or("N/A")
    }
}

/// A normalised tournament snapshot. Built once per fetch and never mutated afterwards.
#[derive(Serialize, Clone, Debug)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: String,
    pub competitors: Vec<Competitor>,
    #[serde(skip)]
    name_index: HashMap<String, usize, RandomState>,
}

impl Event {
    #[must_use]
    pub fn new(id: String, name: String, date: String, competitors: Vec<Competitor>) -> Self {
        let mut name_index: HashMap<String, usize, RandomState> =
            HashMap::with_capacity_and_hasher(competitors.len(), RandomState::new());
        for (idx, competitor) in competitors.iter().enumerate() {
            // first competitor with a given name wins, same as a linear scan would
            name_index
                .entry(competitor.display_name().to_lowercase())
                .or_insert(idx);
        }
        Self {
            id,
            name,
            date,
            competitors,
            name_index,
        }
    }

    /// Takes the first event's first competition.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NoCompetitionData` if there is no event or it has no competitors.
    pub fn from_scoreboard(scoreboard: ScoreboardResponse) -> Result<Self, AppError> {
        let raw_event = scoreboard
            .events
            .into_iter()
            .next()
            .ok_or(AppError::NoCompetitionData)?;
        let competitors = raw_event
            .competitions
            .into_iter()
            .next()
            .map(|c| c.competitors)
            .unwrap_or_default();

        if competitors.is_empty() {
            return Err(AppError::NoCompetitionData);
        }

        Ok(Self::new(
            raw_event.id,
            raw_event.name,
            raw_event.date,
            competitors,
        ))
    }

    /// # Errors
    ///
    /// Returns `AppError::Parse` if the document does not match the scoreboard shape, or
    /// `AppError::NoCompetitionData` if it carries no competitors.
    pub fn from_json(json: &Value) -> Result<Self, AppError> {
        let scoreboard = ScoreboardResponse::deserialize(json)?;
        Self::from_scoreboard(scoreboard)
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.name_index.get(&name.to_lowercase()).copied()
    }
}

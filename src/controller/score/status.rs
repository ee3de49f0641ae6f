use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta, Utc};

use crate::model::{Competitor, PlayerStatus, Progress, RoundLine, calculate_over_under_par};

/// Rounds consulted for the "today" string.
const TODAY_ROUNDS: usize = 3;

/// Tee times arrive in UTC; the page shows them two hours earlier.
const TEE_TIME_OFFSET: TimeDelta = TimeDelta::hours(2);

const TEE_TIME_DISPLAY: &str = "%-I:%M %p";

/// One candidate for a player's progress string. Round indexes are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSource {
    HolesInRound(usize),
    TeeTimeOfRound(usize),
}

/// Checked top to bottom; the first source that yields something wins.
pub const PROGRESS_PRECEDENCE: [ProgressSource; 4] = [
    ProgressSource::HolesInRound(2),
    ProgressSource::HolesInRound(1),
    ProgressSource::HolesInRound(0),
    ProgressSource::TeeTimeOfRound(0),
];

impl ProgressSource {
    #[must_use]
    pub fn resolve(self, competitor: &Competitor) -> Option<Progress> {
        match self {
            ProgressSource::HolesInRound(round) => competitor
                .round(round)
                .map(RoundLine::holes_played)
                .filter(|&holes| holes > 0)
                .map(Progress::Thru),
            ProgressSource::TeeTimeOfRound(round) => competitor
                .round(round)
                .and_then(|r| r.tee_time.as_deref())
                .and_then(local_tee_time)
                .map(Progress::TeeTime),
        }
    }
}

#[must_use]
pub fn thru_or_tee_time(competitor: &Competitor) -> Progress {
    PROGRESS_PRECEDENCE
        .iter()
        .find_map(|source| source.resolve(competitor))
        .unwrap_or(Progress::Unknown)
}

/// Render an upstream tee time as local `h:mm AM`. Full timestamps are shifted from UTC; a bare
/// clock time (as in the fallback data) is already local and only gets reformatted.
#[must_use]
pub fn local_tee_time(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Some(utc) = parse_utc_timestamp(raw) {
        let local = utc - TEE_TIME_OFFSET;
        return Some(local.format(TEE_TIME_DISPLAY).to_string());
    }
    NaiveTime::parse_from_str(raw, "%I:%M %p")
        .ok()
        .map(|t| t.format(TEE_TIME_DISPLAY).to_string())
}

fn parse_utc_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    // espn writes minute precision with a bare Z, e.g. 2024-04-11T12:00Z
    ["%Y-%m-%dT%H:%MZ", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn format_round_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Values of the first three rounds joined with `" | "`. Absent and zero values are left out.
#[must_use]
pub fn today_score(competitor: &Competitor) -> String {
    (0..TODAY_ROUNDS)
        .filter_map(|round| competitor.round(round).and_then(|r| r.value))
        .filter(|&value| value != 0.0)
        .map(format_round_value)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Over/under against the par of the holes played so far in round 2. A round-2 value of 0
/// counts as not recorded.
#[must_use]
pub fn today_over_under(competitor: &Competitor) -> Option<String> {
    let round = competitor.round(1)?;
    let value = round.value.filter(|&v| v != 0.0)?;
    Some(calculate_over_under_par(
        value.round() as i32,
        round.holes_played(),
    ))
}

#[must_use]
pub fn player_status(competitor: &Competitor) -> PlayerStatus {
    PlayerStatus {
        short_detail: competitor.short_detail().to_string(),
        today: today_score(competitor),
        show_today: competitor.round(0).and_then(|r| r.value).is_some(),
        progress: competitor
            .linescores
            .as_ref()
            .map(|_| thru_or_tee_time(competitor)),
        today_over_under: today_over_under(competitor),
    }
}

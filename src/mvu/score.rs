use maud::Markup;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::controller::espn::ScoreboardService;
use crate::controller::score::snapshot_from_fetch;
use crate::error::AppError;
use crate::model::{LeaderboardSnapshot, Roster, ScoreboardFetch};
use crate::view::score::render_leaderboard;

/// State of one fetch-then-render cycle. Nothing here outlives the request; the snapshot is
/// swapped in whole once a fetch lands.
#[derive(Debug, Clone)]
pub struct LeaderboardModel {
    pub groups: Roster,
    pub want_json: bool,
    pub loading: bool,
    pub snapshot: Option<LeaderboardSnapshot>,
    pub markup: Option<Markup>,
    pub error: Option<AppError>,
}

impl LeaderboardModel {
    #[must_use]
    pub fn new(groups: Roster, want_json: bool) -> Self {
        Self {
            groups,
            want_json,
            loading: false,
            snapshot: None,
            markup: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    Refresh,
    ScoreboardFetched(ScoreboardFetch),
    Rendered(Markup),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    FetchScoreboard,
    RenderTemplate,
}

fn render_unless_json(model: &LeaderboardModel) -> Vec<Effect> {
    if model.want_json {
        vec![]
    } else {
        vec![Effect::RenderTemplate]
    }
}

pub fn update(model: &mut LeaderboardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::Refresh => {
            // busy flag, the server-side twin of the button's hx-disabled-elt. A model is built
            // per request, so in the handlers this only matters if a cycle sends Refresh twice.
            if model.loading {
                return vec![];
            }
            model.loading = true;
            model.error = None;
            vec![Effect::FetchScoreboard]
        }
        Msg::ScoreboardFetched(fetch) => {
            model.loading = false;
            match snapshot_from_fetch(&fetch, &model.groups) {
                Ok(snapshot) => {
                    model.snapshot = Some(snapshot);
                    model.error = None;
                }
                Err(e) => {
                    tracing::warn!("Error building leaderboard from {}: {e}", fetch.source);
                    model.error = Some(e);
                }
            }
            render_unless_json(model)
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub scoreboard: &'a ScoreboardService,
}

pub async fn run_effect(effect: Effect, model: &LeaderboardModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::FetchScoreboard => Msg::ScoreboardFetched(deps.scoreboard.fetch_scoreboard().await),
        Effect::RenderTemplate => Msg::Rendered(render_leaderboard(
            model.snapshot.as_ref(),
            model.error.as_ref(),
            model.loading,
        )),
    }
}

/// Parse query params into a `LeaderboardModel`.
#[must_use]
pub fn decode_request_to_model<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    groups: Roster,
) -> LeaderboardModel {
    let want_json = match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };
    LeaderboardModel::new(groups, want_json)
}

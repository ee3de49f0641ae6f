use maud::{Markup, html};

use super::banner::render_error_banner;
use super::skeleton::render_loading_skeleton;
use super::utils::{last_refresh_line, status_line};
use crate::error::AppError;
use crate::model::{GroupStanding, LeaderboardSnapshot, MemberLine, MemberRole};
use crate::view::index::page_heading;

fn render_member(member: &MemberLine) -> Markup {
    let is_wildcard = member.role == MemberRole::Wildcard;
    html! {
        div class=(if is_wildcard { "player-row wildcard" } else { "player-row" }) {
            div {
                span class="player-name" { (member.name) }
                @if is_wildcard {
                    div class="wildcard-tag" { "Wildcard" }
                }
                @if let Some(status) = &member.status {
                    div class="player-status" { (status_line(status)) }
                    @if let Some(over_under) = &status.today_over_under {
                        div class="player-today" { "Today: " (over_under) }
                    }
                }
            }
            div class="player-score" { (member.score_display) }
        }
    }
}

fn render_group_card(standing: &GroupStanding) -> Markup {
    let leader = standing.place == 0;
    html! {
        div class=(if leader { "card leader" } else { "card" }) data-group=(standing.name) {
            div class=(if leader { "card-header leader" } else { "card-header" }) {
                div class="card-title" {
                    span class="group-name" { (standing.name) }
                    span class="group-total" { (standing.display_total) }
                }
                div class="card-description" { (standing.place_label) }
            }
            div class="card-content" {
                @for member in &standing.members {
                    (render_member(member))
                }
            }
        }
    }
}

/// Leaderboard fragment swapped into `#scores`. The heading is refreshed out of band so it
/// follows the event that was actually loaded.
#[must_use]
pub fn render_leaderboard(
    snapshot: Option<&LeaderboardSnapshot>,
    error: Option<&AppError>,
    loading: bool,
) -> Markup {
    html! {
        @if error.is_some() {
            (render_error_banner())
        }
        @if loading {
            (render_loading_skeleton())
        } @else {
            @if let Some(snapshot) = snapshot {
                (page_heading(Some(snapshot.event_name.as_str()), true))
                div class="grid" {
                    @for standing in &snapshot.standings {
                        (render_group_card(standing))
                    }
                }
                p class="refresh" { (last_refresh_line(snapshot)) }
            }
        }
    }
}

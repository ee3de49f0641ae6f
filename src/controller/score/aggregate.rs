use super::lookup::find_player_by_name;
use super::status::player_status;
use crate::model::{
    Event, Group, GroupStanding, MemberLine, MemberRole, format_relative, format_score_token,
    score_or_zero,
};

/// Parsed score of a roster name. Names missing from the event count as even par.
#[must_use]
pub fn member_score(event: &Event, name: &str) -> i32 {
    find_player_by_name(event, name).map_or(0, |c| score_or_zero(&c.score))
}

#[must_use]
pub fn calculate_group_score(event: &Event, group: &Group) -> i32 {
    group
        .members()
        .map(|(name, _)| member_score(event, name))
        .sum()
}

/// Lowest total first. The sort is stable, so tied groups keep their roster order.
#[must_use]
pub fn sort_groups_by_score<'a>(event: &Event, groups: &'a [Group]) -> Vec<(&'a Group, i32)> {
    let mut totals: Vec<(&Group, i32)> = groups
        .iter()
        .map(|group| (group, calculate_group_score(event, group)))
        .collect();
    totals.sort_by_key(|(_, total)| *total);
    totals
}

#[must_use]
pub fn place_label(place: usize) -> String {
    let suffix = match place {
        0 => return "Currently Leading".to_string(),
        1 => "nd",
        2 => "rd",
        _ => "th",
    };
    format!("{}{suffix} Place", place + 1)
}

fn member_line(event: &Event, name: &str, role: MemberRole) -> MemberLine {
    match find_player_by_name(event, name) {
        Some(competitor) => MemberLine {
            name: name.to_string(),
            role,
            found: true,
            score: score_or_zero(&competitor.score),
            score_display: format_score_token(&competitor.score).to_string(),
            status: Some(player_status(competitor)),
        },
        None => MemberLine {
            name: name.to_string(),
            role,
            found: false,
            score: 0,
            score_display: "N/A".to_string(),
            status: None,
        },
    }
}

#[must_use]
pub fn build_standings(event: &Event, groups: &[Group]) -> Vec<GroupStanding> {
    sort_groups_by_score(event, groups)
        .into_iter()
        .enumerate()
        .map(|(place, (group, total))| GroupStanding {
            name: group.name.clone(),
            place,
            place_label: place_label(place),
            total,
            display_total: format_relative(total),
            members: group
                .members()
                .map(|(name, role)| member_line(event, name, role))
                .collect(),
        })
        .collect()
}

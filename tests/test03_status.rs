mod common;

use common::competitor;
use rusty_golf_groups::controller::score::{
    PROGRESS_PRECEDENCE, ProgressSource, local_tee_time, player_status, thru_or_tee_time,
    today_over_under, today_score,
};
use rusty_golf_groups::model::Progress;
use serde_json::{Value, json};

fn holes(n: usize) -> Vec<Value> {
    (0..n).map(|i| json!({ "value": 4, "period": i + 1 })).collect()
}

#[test]
fn test03_today_score_drops_zero_rounds() {
    let c = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "-1",
        "linescores": [{ "value": -2 }, { "value": 0 }, { "value": 1 }]
    }));
    assert_eq!(today_score(&c), "-2 | 1");
}

#[test]
fn test03_today_score_only_reads_three_rounds() {
    let c = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "-1",
        "linescores": [{ "value": -1 }, {}, { "value": 3 }, { "value": -6 }]
    }));
    assert_eq!(today_score(&c), "-1 | 3");
}

#[test]
fn test03_today_score_empty_when_nothing_to_show() {
    let zeros = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "E",
        "linescores": [{ "value": 0 }, { "value": 0 }]
    }));
    assert_eq!(today_score(&zeros), "");

    let none = competitor(json!({ "athlete": { "displayName": "A" }, "score": "E" }));
    assert_eq!(today_score(&none), "");
}

#[test]
fn test03_thru_prefers_latest_round_with_holes() {
    let c = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "-3",
        "linescores": [
            { "value": -1, "linescores": holes(18) },
            { "value": -1, "linescores": holes(18) },
            { "value": -1, "linescores": holes(5) }
        ]
    }));
    assert_eq!(thru_or_tee_time(&c), Progress::Thru(5));
    assert_eq!(thru_or_tee_time(&c).to_string(), "5");
}

#[test]
fn test03_thru_skips_empty_hole_lists() {
    let c = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "-3",
        "linescores": [
            { "value": -1, "linescores": holes(18) },
            { "value": -2, "linescores": holes(7) },
            { "value": 0, "linescores": [] }
        ]
    }));
    assert_eq!(thru_or_tee_time(&c), Progress::Thru(7));
}

#[test]
fn test03_tee_time_when_no_holes_played() {
    let c = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "E",
        "linescores": [{ "value": 0, "teeTime": "2024-01-01T15:00:00Z" }]
    }));
    let progress = thru_or_tee_time(&c);
    assert_eq!(progress, Progress::TeeTime("1:00 PM".to_string()));
    assert_eq!(progress.label(), "Tee");
}

#[test]
fn test03_tee_time_formats() {
    assert_eq!(local_tee_time("2024-01-01T15:00:00Z").as_deref(), Some("1:00 PM"));
    assert_eq!(local_tee_time("2024-04-11T12:05Z").as_deref(), Some("10:05 AM"));
    assert_eq!(local_tee_time("2024-04-11T01:30Z").as_deref(), Some("11:30 PM"));
    // bare clock times are already local
    assert_eq!(local_tee_time("10:00 AM").as_deref(), Some("10:00 AM"));
    assert_eq!(local_tee_time("tomorrow"), None);
}

#[test]
fn test03_placeholder_without_holes_or_tee_time() {
    let c = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "E",
        "linescores": [{ "value": -1 }]
    }));
    assert_eq!(thru_or_tee_time(&c), Progress::Unknown);
    assert_eq!(thru_or_tee_time(&c).to_string(), "—");
}

#[test]
fn test03_precedence_table_order() {
    assert_eq!(
        PROGRESS_PRECEDENCE,
        [
            ProgressSource::HolesInRound(2),
            ProgressSource::HolesInRound(1),
            ProgressSource::HolesInRound(0),
            ProgressSource::TeeTimeOfRound(0),
        ]
    );

    let c = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "E",
        "linescores": [{ "value": 0, "teeTime": "2024-01-01T15:00:00Z", "linescores": holes(2) }]
    }));
    assert_eq!(ProgressSource::HolesInRound(2).resolve(&c), None);
    assert_eq!(ProgressSource::HolesInRound(0).resolve(&c), Some(Progress::Thru(2)));
    assert_eq!(
        ProgressSource::TeeTimeOfRound(0).resolve(&c),
        Some(Progress::TeeTime("1:00 PM".to_string()))
    );
    // holes win over the tee time
    assert_eq!(thru_or_tee_time(&c), Progress::Thru(2));
}

#[test]
fn test03_today_over_under_uses_second_round() {
    let c = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "-1",
        "linescores": [{ "value": 70 }, { "value": 2, "linescores": holes(3) }]
    }));
    assert_eq!(today_over_under(&c).as_deref(), Some("-11"));

    let one_round = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "-1",
        "linescores": [{ "value": 70 }]
    }));
    assert_eq!(today_over_under(&one_round), None);
}

#[test]
fn test03_today_over_under_hidden_for_zero_second_round() {
    let c = competitor(json!({
        "athlete": { "displayName": "A" },
        "score": "-1",
        "linescores": [{ "value": 70 }, { "value": 0, "linescores": holes(3) }]
    }));
    assert_eq!(today_over_under(&c), None);
    assert_eq!(player_status(&c).today_over_under, None);
}

#[test]
fn test03_player_status_without_rounds() {
    let c = competitor(json!({ "athlete": { "displayName": "A" }, "score": "+2" }));
    let status = player_status(&c);
    assert_eq!(status.short_detail, "N/A");
    assert!(!status.show_today);
    assert_eq!(status.progress, None);
    assert_eq!(status.today_over_under, None);
}

#[test]
fn test03_player_status_from_fallback_shape() {
    let c = competitor(json!({
        "id": "1",
        "athlete": { "displayName": "Scottie Scheffler" },
        "score": "-7",
        "status": { "type": { "shortDetail": "F" }, "thru": 18 },
        "linescores": [{ "value": -3, "teeTime": "10:00 AM" }]
    }));
    let status = player_status(&c);
    assert_eq!(status.short_detail, "F");
    assert!(status.show_today);
    assert_eq!(status.today, "-3");
    assert_eq!(status.progress, Some(Progress::TeeTime("10:00 AM".to_string())));
    assert_eq!(status.today_over_under, None);
}

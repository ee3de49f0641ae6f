use crate::model::{Competitor, Event};

/// Case-insensitive exact match on the athlete's display name. No fuzzy matching: a typo in
/// the roster simply finds nobody.
#[must_use]
pub fn find_player_by_name<'a>(event: &'a Event, name: &str) -> Option<&'a Competitor> {
    event
        .index_of(name)
        .and_then(|idx| event.competitors.get(idx))
}

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A fantasy group: two picked players plus a wildcard.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub players: [String; 2],
    pub wildcard: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Primary,
    Wildcard,
}

impl Group {
    #[must_use]
    pub fn new(name: &str, players: [&str; 2], wildcard: &str) -> Self {
        Self {
            name: name.to_string(),
            players: players.map(str::to_string),
            wildcard: wildcard.to_string(),
        }
    }

    /// Primaries in roster order, then the wildcard.
    pub fn members(&self) -> impl Iterator<Item = (&str, MemberRole)> {
        self.players
            .iter()
            .map(|p| (p.as_str(), MemberRole::Primary))
            .chain(std::iter::once((
                self.wildcard.as_str(),
                MemberRole::Wildcard,
            )))
    }
}

/// Shared, read-only roster. Created at startup; never changes while the server runs.
pub type Roster = Arc<[Group]>;

#[must_use]
pub fn default_groups() -> Vec<Group> {
    vec![
        Group::new("Phillip", ["Rory McIlroy", "Bryson DeChambeau"], "Akshay Bhatia"),
        Group::new("Tay", ["Scottie Scheffler", "Brooks Koepka"], "Will Zalatoris"),
        Group::new("Gilb", ["Collin Morikawa", "Xander Schauffele"], "Wyndham Clark"),
    ]
}

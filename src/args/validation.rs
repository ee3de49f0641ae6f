use std::collections::HashSet;
use std::{fs, path::PathBuf};

use crate::args::types::RosterFile;
use crate::model::Group;

/// # Errors
///
/// Will return `Err` if the value is not an http(s) url
pub fn check_upstream_url(url: &str) -> Result<String, String> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(format!("The upstream url '{url}' must start with http:// or https://."))
    }
}

/// # Errors
///
/// Will return `Err` if the file is not readable or does not hold a valid roster
pub fn check_readable_groups_json(file: &str) -> Result<RosterFile, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The groups file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The groups file '{file}' is not readable: {e}"))?;
    parse_groups_json(&contents).map(RosterFile)
}

/// Parse and validate a roster document.
/// format we expect is this:
/// [{ "name": "Phillip", "players": ["Rory McIlroy", "Bryson DeChambeau"], "wildcard": "Akshay Bhatia" }, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn parse_groups_json(contents: &str) -> Result<Vec<Group>, String> {
    let groups: Vec<Group> = serde_json::from_str(contents).map_err(|e| {
        format!("The groups json is not in the correct format. Expected [{{name, players: [a, b], wildcard}}]: {e}")
    })?;
    validate_groups(&groups)?;
    Ok(groups)
}

fn validate_groups(groups: &[Group]) -> Result<(), String> {
    if groups.is_empty() {
        return Err("The groups json must define at least one group.".to_string());
    }

    let mut seen = HashSet::new();
    for group in groups {
        if group.name.trim().is_empty() {
            return Err("Every group needs a non-empty name.".to_string());
        }
        if !seen.insert(group.name.as_str()) {
            return Err(format!("The group name '{}' is used more than once.", group.name));
        }
        if group.members().any(|(member, _)| member.trim().is_empty()) {
            return Err(format!("Group '{}' has an empty player name.", group.name));
        }
    }
    Ok(())
}

use chrono::TimeDelta;
use clap::Parser;
use std::time::Duration;

use crate::controller::espn::ESPN_SCOREBOARD_URL;
use crate::model::{Group, Roster};

/// Groups read from a `--groups` file.
#[derive(Debug, Clone)]
pub struct RosterFile(pub Vec<Group>);

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the web server binds to
    #[arg(long, value_name = "ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value_t = 5201)]
    pub port: u16,
    /// Scoreboard endpoint that /api/golf proxies
    #[arg(
        short = 'u',
        long,
        value_name = "URL",
        default_value = ESPN_SCOREBOARD_URL,
        value_parser = crate::args::validation::check_upstream_url
    )]
    pub upstream_url: String,
    /// How long a good upstream scoreboard is reused, in seconds
    #[arg(short = 'c', long, value_name = "SECONDS", default_value_t = 300)]
    pub cache_secs: u32,
    /// Give up on the upstream scoreboard after this many seconds and serve the fallback
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub upstream_timeout_secs: u64,
    /// Json roster replacing the built-in groups: [{"name": "..", "players": ["..", ".."], "wildcard": ".."}]
    #[arg(
        short = 'g',
        long,
        value_name = "GROUPS_JSON",
        value_parser = crate::args::validation::check_readable_groups_json
    )]
    pub groups: Option<RosterFile>,
    /// Tracing filter directive; RUST_LOG wins when set
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub upstream_url: String,
    pub cache_duration: TimeDelta,
    pub upstream_timeout: Duration,
    pub groups: Roster,
    pub log_filter: String,
}

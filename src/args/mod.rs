use chrono::TimeDelta;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, RosterFile};

use crate::model::default_groups;

#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        let groups = match args.groups {
            Some(RosterFile(groups)) => groups,
            None => default_groups(),
        };
        CleanArgs {
            bind: args.bind,
            port: args.port,
            upstream_url: args.upstream_url,
            cache_duration: TimeDelta::seconds(i64::from(args.cache_secs)),
            upstream_timeout: Duration::from_secs(args.upstream_timeout_secs),
            groups: Arc::from(groups),
            log_filter: args.log,
        }
    }
}

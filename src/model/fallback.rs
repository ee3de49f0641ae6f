use serde_json::Value;
use std::sync::{Arc, LazyLock};

/// Masters snapshot served whenever the upstream scoreboard cannot be fetched.
pub const FALLBACK_SCOREBOARD_JSON: &str = include_str!("fallback_scoreboard.json");

static FALLBACK_SCOREBOARD: LazyLock<Arc<Value>> = LazyLock::new(|| {
    Arc::new(
        serde_json::from_str(FALLBACK_SCOREBOARD_JSON)
            .expect("Bundled fallback scoreboard should always be valid json"),
    )
});

#[must_use]
pub fn fallback_scoreboard() -> Arc<Value> {
    Arc::clone(&FALLBACK_SCOREBOARD)
}

use maud::{Markup, html};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load scoreboard data. Please try again later.";

/// Non-fatal error strip with a retry button that re-requests the leaderboard.
#[must_use]
pub fn render_error_banner() -> Markup {
    html! {
        div class="error-banner" role="alert" {
            span class="error-message" { (LOAD_FAILED_MESSAGE) }
            button class="retry-button" title="Retry"
                hx-get="scores" hx-target="#scores" hx-swap="innerHTML" hx-disabled-elt="this" {
                "⟳"
            }
        }
    }
}

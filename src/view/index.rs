use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::view::score::render_loading_skeleton;

pub const DEFAULT_INDEX_TITLE: &str = "Golf Tournament";

/// `{event} Groups`. With `oob` set the heading is marked for an htmx out-of-band swap.
#[must_use]
pub fn page_heading(event_name: Option<&str>, oob: bool) -> Markup {
    let name = event_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(DEFAULT_INDEX_TITLE);
    html! {
        @if oob {
            h1 id="title" hx-swap-oob="true" { (name) " Groups" }
        } @else {
            h1 id="title" { (name) " Groups" }
        }
    }
}

#[must_use]
pub fn render_index_template(event_name: Option<&str>) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (event_name.unwrap_or(DEFAULT_INDEX_TITLE)) " Groups" }
            script src=(HTMX_PATH) defer {}
        }
        body {
            div class="container" {
                (page_heading(event_name, false))
                div class="toolbar" {
                    button id="refresh" class="refresh-button"
                        hx-get="scores" hx-target="#scores" hx-swap="innerHTML"
                        hx-indicator="#refresh" hx-disabled-elt="this" {
                        span class="refresh-icon" { "⟳" }
                        span class="idle-label" { "Refresh Data" }
                        span class="busy-label" { "Refreshing..." }
                    }
                }
                div id="scores" hx-get="scores" hx-trigger="load" hx-swap="innerHTML" {
                    (render_loading_skeleton())
                }
            }
        }
    }
}

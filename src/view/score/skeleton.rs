use maud::{Markup, html};

const SKELETON_CARDS: usize = 3;
const SKELETON_ROWS: usize = 3;

#[must_use]
pub fn render_loading_skeleton() -> Markup {
    html! {
        div class="grid" aria-busy="true" {
            @for _ in 0..SKELETON_CARDS {
                div class="card" {
                    div class="card-header leader" {
                        div class="skeleton skeleton-title" {}
                    }
                    div class="card-content" {
                        @for _ in 0..SKELETON_ROWS {
                            div class="player-row" {
                                div class="skeleton skeleton-name" {}
                                div class="skeleton skeleton-score" {}
                            }
                        }
                    }
                }
            }
        }
    }
}

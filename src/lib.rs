pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod espn;
    pub mod score;
}
pub mod mvu {
    pub mod runtime;
    pub mod score;
}
pub mod view {
    pub mod index;
    pub mod score;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use error::AppError;

use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;

use crate::controller::espn::ScoreboardService;
use crate::error::AppError;
use crate::model::{Event, Roster};
use crate::mvu::runtime::run_leaderboard;
use crate::mvu::score::{Deps, Msg, decode_request_to_model};
use crate::view::index::render_index_template;

const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, OPTIONS"),
    ("Access-Control-Allow-Headers", "*"),
];

/// Read-only proxy of the upstream scoreboard. Always 200: upstream trouble is answered with
/// the fallback document.
pub async fn golf_api(service: Data<ScoreboardService>) -> impl Responder {
    let fetch = service.fetch_scoreboard().await;
    let mut resp = HttpResponse::Ok();
    for header in CORS_HEADERS {
        resp.insert_header(header);
    }
    resp.insert_header(("X-Scoreboard-Source", fetch.source.to_string()))
        .json(fetch.json.as_ref())
}

pub async fn golf_api_preflight() -> impl Responder {
    let mut resp = HttpResponse::NoContent();
    for header in CORS_HEADERS {
        resp.insert_header(header);
    }
    resp.finish()
}

/// Leaderboard fragment for htmx, or the standings as json with `?json=1`.
pub async fn scores(
    query: web::Query<HashMap<String, String>>,
    service: Data<ScoreboardService>,
    groups: Data<Roster>,
) -> impl Responder {
    let mut model = decode_request_to_model(&query.0, Roster::clone(groups.get_ref()));
    let deps = Deps {
        scoreboard: service.get_ref(),
    };
    let result = run_leaderboard(&mut model, Msg::Refresh, deps).await;

    if model.want_json {
        return match (result, model.snapshot) {
            (Ok(()), Some(snapshot)) => HttpResponse::Ok().json(snapshot),
            (Err(e), _) => HttpResponse::ServiceUnavailable().json(json!({"error": e.to_string()})),
            (Ok(()), None) => HttpResponse::ServiceUnavailable()
                .json(json!({"error": AppError::NoCompetitionData.to_string()})),
        };
    }

    match model.markup {
        Some(markup) => HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string()),
        None => HttpResponse::InternalServerError()
            .json(json!({"error": "leaderboard was not rendered"})),
    }
}

/// Event name for the page title, if the current scoreboard has one.
pub async fn try_resolve_index_title(service: &ScoreboardService) -> Result<String, AppError> {
    let fetch = service.fetch_scoreboard().await;
    let event = Event::from_json(&fetch.json)?;
    Ok(event.name)
}

pub async fn index(service: Data<ScoreboardService>) -> impl Responder {
    let title = match try_resolve_index_title(service.get_ref()).await {
        Ok(title) => Some(title),
        Err(e) => {
            tracing::warn!("Falling back to default title: {e}");
            None
        }
    };

    let markup = render_index_template(title.as_deref());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

use rusty_golf_groups::args;
use rusty_golf_groups::controller::espn::{ReqwestEspnClient, ScoreboardCache, ScoreboardService};
use rusty_golf_groups::controller::score::{golf_api, golf_api_preflight, index, scores};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = ReqwestEspnClient::new(args.upstream_url.clone(), args.upstream_timeout)?;
    let service = Data::new(
        ScoreboardService::new(Arc::new(client), ScoreboardCache::new(args.cache_duration))
            .with_upstream_timeout(args.upstream_timeout),
    );
    let groups = Data::new(args.groups.clone());

    tracing::info!(
        "Serving {} groups on {}:{} from {}",
        args.groups.len(),
        args.bind,
        args.port,
        args.upstream_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .app_data(groups.clone())
            .route("/", web::get().to(index))
            .route("/scores", web::get().to(scores))
            .route("/api/golf", web::get().to(golf_api))
            .route(
                "/api/golf",
                web::route()
                    .method(actix_web::http::Method::OPTIONS)
                    .to(golf_api_preflight),
            )
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static"))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

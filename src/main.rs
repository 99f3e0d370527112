use golf_pool::args;
use golf_pool::controller::leaderboard::{leaderboard, refresh_scores, tournament_info};
use golf_pool::provider::{ProviderConfig, RapidApiProvider};
use golf_pool::repository::PoolRepository;
use golf_pool::seed::PoolSeed;

use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = args::args_checks();

    let seed = match &args.roster_json {
        Some(path) => PoolSeed::from_json_file(path)?,
        None => PoolSeed::default_pool(),
    };

    let provider = Arc::new(RapidApiProvider::new(ProviderConfig {
        api_key: args.api_key.clone(),
        api_host: args.api_host.clone(),
        tournament_id: args.tournament_id,
    }));
    let repo = PoolRepository::new(provider, &seed);

    log::info!(
        "serving pool for tournament {} on {}",
        args.tournament_id,
        args.bind
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(repo.clone()))
            .route("/api/leaderboard", web::get().to(leaderboard))
            .route("/api/refresh-scores", web::post().to(refresh_scores))
            .route("/api/tournament-info", web::get().to(tournament_info))
            .route("/health", web::get().to(HttpResponse::Ok))
    })
    .bind(&args.bind)?
    .run()
    .await?;
    Ok(())
}

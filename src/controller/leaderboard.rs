use crate::repository::PoolRepository;
use actix_web::web::Data;
use actix_web::{HttpResponse, Responder};
use serde_json::json;

/// `GET /api/leaderboard` — current standings plus tournament status.
pub async fn leaderboard(repo: Data<PoolRepository>) -> impl Responder {
    let data = repo.leaderboard().await;
    HttpResponse::Ok().json(data)
}

/// `POST /api/refresh-scores` — run the refresh pipeline and return the
/// updated snapshot. On failure the prior leaderboard is left exactly as it
/// was and the caller gets a 500; retrying is the caller's choice.
pub async fn refresh_scores(repo: Data<PoolRepository>) -> impl Responder {
    match repo.refresh_scores().await {
        Ok(data) => HttpResponse::Ok().json(json!({
            "participants": data.participants,
            "tournamentInfo": data.tournament_info,
            "message": "Scores updated successfully",
        })),
        Err(e) => {
            log::error!("refresh failed: {e}");
            HttpResponse::InternalServerError().json(json!({"message": "Failed to refresh scores"}))
        }
    }
}

/// `GET /api/tournament-info` — the singleton tournament record.
pub async fn tournament_info(repo: Data<PoolRepository>) -> impl Responder {
    let info = repo.tournament_info().await;
    HttpResponse::Ok().json(json!({"tournamentInfo": info}))
}

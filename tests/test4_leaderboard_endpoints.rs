mod common;

use actix_web::web::Data;
use actix_web::{App, test, web};
use common::{FakeProvider, UnavailableProvider, seed_pool};
use golf_pool::controller::leaderboard::{leaderboard, refresh_scores, tournament_info};
use golf_pool::repository::PoolRepository;
use golf_pool::seed::PoolSeed;
use serde_json::Value;
use std::sync::Arc;

fn app_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/leaderboard", web::get().to(leaderboard))
        .route("/api/refresh-scores", web::post().to(refresh_scores))
        .route("/api/tournament-info", web::get().to(tournament_info));
}

#[actix_web::test]
async fn test4_leaderboard_endpoint() {
    let repo = PoolRepository::new(Arc::new(FakeProvider::new()), &PoolSeed::default_pool());
    let app =
        test::init_service(App::new().app_data(Data::new(repo)).configure(app_routes)).await;

    let req = test::TestRequest::get().uri("/api/leaderboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    let participants = body.get("participants").unwrap().as_array().unwrap();
    assert_eq!(participants.len(), 8);

    let leader = &participants[0];
    assert_eq!(leader.get("rank").unwrap().as_i64(), Some(1));
    assert_eq!(leader.get("totalScore").unwrap().as_i64(), Some(-12));
    assert_eq!(leader.get("golfers").unwrap().as_array().unwrap().len(), 4);

    assert!(body.pointer("/tournamentInfo/status").is_some());
    assert!(body.pointer("/tournamentInfo/lastUpdated").is_some());
}

#[actix_web::test]
async fn test4_refresh_endpoint_success() {
    let seed = seed_pool(&[("A", &["G1"]), ("B", &["G2"])]);
    let provider = FakeProvider::new()
        .with_score("G1", 1, false)
        .with_score("G2", -3, false);
    let repo = PoolRepository::new(Arc::new(provider), &seed);
    let app =
        test::init_service(App::new().app_data(Data::new(repo)).configure(app_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/refresh-scores")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body.get("message").unwrap().as_str(),
        Some("Scores updated successfully")
    );
    let participants = body.get("participants").unwrap().as_array().unwrap();
    assert_eq!(participants[0].get("name").unwrap().as_str(), Some("B"));
    assert_eq!(participants[0].get("rank").unwrap().as_i64(), Some(1));
    assert_eq!(
        body.pointer("/tournamentInfo/round").unwrap().as_str(),
        Some("Round 4")
    );
}

#[actix_web::test]
async fn test4_refresh_endpoint_failure_leaves_leaderboard_alone() {
    let repo = PoolRepository::new(Arc::new(UnavailableProvider), &PoolSeed::default_pool());
    let app =
        test::init_service(App::new().app_data(Data::new(repo)).configure(app_routes)).await;

    let before = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/leaderboard").to_request(),
    )
    .await;
    let before: Value = test::read_body_json(before).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/refresh-scores")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body.get("message").unwrap().as_str(),
        Some("Failed to refresh scores")
    );

    let after = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/leaderboard").to_request(),
    )
    .await;
    let after: Value = test::read_body_json(after).await;
    assert_eq!(before, after);
}

#[actix_web::test]
async fn test4_tournament_info_endpoint() {
    let repo = PoolRepository::new(Arc::new(FakeProvider::new()), &PoolSeed::default_pool());
    let app =
        test::init_service(App::new().app_data(Data::new(repo)).configure(app_routes)).await;

    let req = test::TestRequest::get()
        .uri("/api/tournament-info")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body.pointer("/tournamentInfo/round").unwrap().as_str(),
        Some("Round 3")
    );
    assert_eq!(
        body.pointer("/tournamentInfo/cutLine").unwrap().as_i64(),
        Some(3)
    );
}

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers;
use super::handlers::probes::health;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/api/jobs", get(handlers::jobs::list))
        .route("/api/jobs", post(handlers::jobs::create))
        .route("/api/jobs/{id}", delete(handlers::jobs::remove))
        .route("/api/extract-job-info", post(handlers::extract::extract))
        .route("/api/newsletter", post(handlers::newsletter::subscribe))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state);

    Ok(app)
}

//! HTTP routes
//!
//! Builds the axum router for the car and rating endpoints.

pub mod car_routes;
pub mod rating_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(car_routes::create_car_router())
        .merge(rating_routes::create_rating_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Endpoint de salud
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "car-ratings",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

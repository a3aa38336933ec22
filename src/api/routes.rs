use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::check_in::check_in_routes;
use super::favorites::favorites_routes;
use super::health::health_check;
use super::middleware::{cors_layer, security_headers_layer};
use super::profile::profile_routes;
use super::workouts::workout_routes;
use crate::services::AppServices;

pub fn create_routes(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/check-in", check_in_routes(services.check_in))
        .nest("/api/favorites", favorites_routes(services.favorites))
        .nest("/api/profile", profile_routes(services.profiles))
        .nest("/api/workouts", workout_routes(services.workouts))
        .layer(security_headers_layer())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

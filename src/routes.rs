// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{analytics, grading, health},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Merges the grading and analytics sub-routers.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins(&state.config.cors_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let grading_routes = Router::new()
        .route("/grade/{score}", get(grading::grade))
        .route("/submission", post(grading::score_submission))
        .route("/review", post(grading::review_attempt));

    let analytics_routes = Router::new()
        .route("/gpa", post(analytics::gpa))
        .route("/categories", post(analytics::category_stats))
        .route("/top-subjects", post(analytics::top_subjects))
        .route("/challenges", post(analytics::challenge_stats))
        .route("/overview", post(analytics::overview))
        .route("/subjects/{id}/summary", post(analytics::subject_summary));

    Router::new()
        .route("/api/health", get(health::health))
        .nest("/api/grading", grading_routes)
        .nest("/api/analytics", analytics_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `*` allows any origin; anything else is an explicit list.
fn allowed_origins(configured: &[String]) -> AllowOrigin {
    if configured.iter().any(|o| o == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
